use crate::core::cart::Cart;
use crate::core::catalog::format_price;
use crate::core::command_init::StoreContext;
use crate::core::error::{Result, StorefrontError};
use crate::core::output::{print_field, print_info, print_section_header, print_success};
use crate::core::selection::Selection;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::Subcommand)]
pub enum CartAction {
    /// Show the bag (default)
    Show,
    /// Open the bag drawer and show it
    Open,
    /// Close the bag drawer
    Close,
    /// Remove every line from the bag
    Clear,
}

pub fn execute_add(ctx: &mut StoreContext, selection: Vec<String>) -> Result<()> {
    let products = ctx.resolve_products(&selection)?;

    for product in &products {
        ctx.cart.add_to_cart(product)?;
        log::debug!("Added {} to bag", product.id);
    }

    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    print_success(&format!("Added to bag: {}", names.join(", ")));
    print_totals(ctx.cart.cart());
    println!();
    Ok(())
}

pub fn execute_cart(ctx: &mut StoreContext, action: Option<CartAction>) -> Result<()> {
    match action.unwrap_or(CartAction::Show) {
        CartAction::Show => print_cart(ctx.cart.cart()),
        CartAction::Open => {
            ctx.cart.set_is_cart_open(true)?;
            print_cart(ctx.cart.cart());
        }
        CartAction::Close => {
            ctx.cart.set_is_cart_open(false)?;
            print_success("Bag closed");
            println!();
        }
        CartAction::Clear => {
            ctx.cart.clear()?;
            print_success("Bag cleared");
            println!();
        }
    }
    Ok(())
}

/// Resolve a bag line by its number in the bag or by product id.
fn resolve_line(cart: &Cart, arg: &str) -> Result<String> {
    let ids: Vec<String> = cart.lines().iter().map(|l| l.product.id.clone()).collect();
    if ids.is_empty() {
        return Err(StorefrontError::EmptyCart);
    }
    let id = Selection::resolve_one(arg, &ids)?;
    if cart.line(&id).is_none() {
        return Err(StorefrontError::invalid_selection(format!("{id} is not in your bag")));
    }
    Ok(id)
}

pub fn parse_quantity(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| StorefrontError::invalid_quantity(raw))
}

pub fn execute_qty(ctx: &mut StoreContext, line: &str, quantity: &str) -> Result<()> {
    let quantity = parse_quantity(quantity)?;
    let id = resolve_line(ctx.cart.cart(), line)?;
    ctx.cart.update_quantity(&id, quantity)?;

    if quantity <= 0 {
        print_success(&format!("Removed {id} from bag"));
    } else {
        print_success(&format!("Set {id} to {quantity}"));
    }
    print_cart(ctx.cart.cart());
    Ok(())
}

pub fn execute_inc(ctx: &mut StoreContext, line: &str) -> Result<()> {
    let id = resolve_line(ctx.cart.cart(), line)?;
    ctx.cart.increment(&id)?;
    print_cart(ctx.cart.cart());
    Ok(())
}

/// Never goes below one; use `remove` to drop the line.
pub fn execute_dec(ctx: &mut StoreContext, line: &str) -> Result<()> {
    let id = resolve_line(ctx.cart.cart(), line)?;
    ctx.cart.decrement(&id)?;
    print_cart(ctx.cart.cart());
    Ok(())
}

pub fn execute_remove(ctx: &mut StoreContext, line: &str) -> Result<()> {
    let id = resolve_line(ctx.cart.cart(), line)?;
    ctx.cart.remove_from_cart(&id)?;
    print_success(&format!("Removed {id} from bag"));
    print_cart(ctx.cart.cart());
    Ok(())
}

fn print_totals(cart: &Cart) {
    let items = cart.total_items();
    let noun = if items == 1 { "item" } else { "items" };
    print_field("Items", &format!("{items} {noun}"));
    print_field("Subtotal", &format_price(cart.total_price()).white().bold().to_string());
}

/// The bag drawer.
pub fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        print_info("Your bag is empty");
        return;
    }

    let title = if cart.is_open() {
        "Shopping Bag (open)"
    } else {
        "Shopping Bag"
    };
    print_section_header(title);

    for (i, line) in cart.lines().iter().enumerate() {
        println!(
            "   {} {} {}  {} × {} = {}",
            format!("[{}]", i + 1).cyan().bold(),
            line.product.name.white(),
            format!("({})", line.product.id).bright_black(),
            line.quantity,
            format_price(line.product.price),
            format_price(line.subtotal()).white().bold()
        );
    }
    println!();
    print_totals(cart);
    println!();
}
