use crate::core::catalog::format_price;
use crate::core::command_init::StoreContext;
use crate::core::error::Result;
use crate::core::orders::orders_for_customer;
use crate::core::output::{print_field, print_info, print_section_header, print_success};
use crate::core::profile::{
    add_address, delete_address, fetch_profile, list_addresses, save_profile, NewAddress,
};
use crate::core::session::AccountService;
use crate::core::style::colored_order_status;
use colored::*;

#[derive(Debug, Clone, PartialEq, Eq, clap::Subcommand)]
pub enum AddressAction {
    /// List saved addresses
    List,
    /// Save a new address
    Add {
        #[arg(long, default_value = "Home")]
        label: String,
        /// Recipient name
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        line1: String,
        #[arg(long)]
        line2: Option<String>,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        pincode: String,
        /// Use this address for checkout
        #[arg(long = "default")]
        is_default: bool,
    },
    /// Delete an address by id
    Delete { id: String },
}

pub fn execute_signup(
    ctx: &mut StoreContext,
    email: &str,
    password: &str,
    name: Option<&str>,
) -> Result<()> {
    let session = ctx.accounts.sign_up(email, password, name)?;
    save_profile(&mut ctx.records, &session.user.id, name, None)?;
    print_success(&format!("Welcome, {}", session.user.display_name()));
    println!();
    Ok(())
}

pub fn execute_login(ctx: &mut StoreContext, email: &str, password: &str) -> Result<()> {
    let session = ctx.accounts.sign_in(email, password)?;
    let role = if ctx.session().is_admin { " (admin)" } else { "" };
    print_success(&format!("Signed in as {}{role}", session.user.email));
    println!();
    Ok(())
}

pub fn execute_logout(ctx: &mut StoreContext) -> Result<()> {
    ctx.accounts.sign_out()?;
    print_success("Signed out");
    println!();
    Ok(())
}

pub fn execute_whoami(ctx: &StoreContext) -> Result<()> {
    let view = ctx.session();
    match &view.user {
        Some(user) => {
            let role = if view.is_admin { "admin" } else { "customer" };
            print_section_header("Account");
            print_field("Email", &user.email);
            print_field("Name", user.display_name());
            print_field("Role", role);
            println!();
        }
        None => print_info("Not signed in"),
    }
    Ok(())
}

pub fn execute_profile(ctx: &mut StoreContext, name: Option<&str>, phone: Option<&str>) -> Result<()> {
    let user = ctx.session().require_user()?.clone();

    let profile = if name.is_some() || phone.is_some() {
        let saved = save_profile(&mut ctx.records, &user.id, name, phone)?;
        print_success("Profile updated!");
        saved
    } else {
        fetch_profile(&ctx.records, &user.id)?.unwrap_or_default()
    };

    print_section_header("Profile");
    print_field("Email", &user.email);
    print_field("Name", profile.full_name.as_deref().unwrap_or("-"));
    print_field("Phone", profile.phone.as_deref().unwrap_or("-"));
    println!();
    Ok(())
}

pub fn execute_address(ctx: &mut StoreContext, action: AddressAction) -> Result<()> {
    let user = ctx.session().require_user()?.clone();

    match action {
        AddressAction::List => {
            let addresses = list_addresses(&ctx.records, &user.id)?;
            if addresses.is_empty() {
                print_info("No saved addresses");
                return Ok(());
            }
            print_section_header("Addresses");
            for address in &addresses {
                let default = if address.is_default {
                    " default".green().to_string()
                } else {
                    String::new()
                };
                println!(
                    "   {} {} {}{}",
                    format!("[{}]", address.id).cyan().bold(),
                    address.full_name.white(),
                    format!("({})", address.label).bright_black(),
                    default
                );
                println!("      {}", address.summary());
                if !address.phone.is_empty() {
                    println!("      {}", address.phone.bright_black());
                }
            }
            println!();
        }
        AddressAction::Add {
            label,
            name,
            phone,
            line1,
            line2,
            city,
            state,
            pincode,
            is_default,
        } => {
            let new = NewAddress {
                label,
                full_name: name,
                phone,
                address_line1: line1,
                address_line2: line2,
                city,
                state,
                pincode,
                is_default,
            };
            let address = add_address(&mut ctx.records, &user.id, new)?;
            print_success(&format!("Address added! ({})", address.id));
            println!();
        }
        AddressAction::Delete { id } => {
            delete_address(&mut ctx.records, &user.id, &id)?;
            print_success(&format!("Address {id} deleted"));
            println!();
        }
    }
    Ok(())
}

/// The signed-in user's order history.
pub fn execute_orders(ctx: &StoreContext) -> Result<()> {
    let user = ctx.session().require_user()?.clone();
    let orders = orders_for_customer(&ctx.records, &user.id)?;

    if orders.is_empty() {
        print_info("No orders yet");
        return Ok(());
    }

    print_section_header("My Orders");
    for order in &orders {
        println!(
            "   {} {} {}  {}",
            format!("#{}", order.id).white().bold(),
            colored_order_status(order.status),
            order.created_at.format("%d/%m/%Y").to_string().bright_black(),
            format_price(order.total_amount)
        );
    }
    println!();
    Ok(())
}
