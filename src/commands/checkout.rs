use crate::core::catalog::format_price;
use crate::core::command_init::StoreContext;
use crate::core::error::{Result, StorefrontError};
use crate::core::orders::{place_order, Checkout, ShippingAddress};
use crate::core::output::{print_field, print_success};
use crate::core::profile::{fetch_profile, list_addresses, shipping_address};
use crate::core::style::colored_payment_status;
use chrono::Utc;

/// Turn the bag into an order for the signed-in user, then empty the bag.
///
/// Checks run in order: signed in, bag not empty, an address on file.
pub fn execute_checkout(ctx: &mut StoreContext) -> Result<()> {
    let user = ctx.session().require_user()?.clone();

    if ctx.cart.cart().is_empty() {
        return Err(StorefrontError::EmptyCart);
    }

    let addresses = list_addresses(&ctx.records, &user.id)?;
    let address = shipping_address(&addresses).ok_or(StorefrontError::NoShippingAddress)?;
    let profile = fetch_profile(&ctx.records, &user.id)?;

    let customer_name = profile
        .as_ref()
        .and_then(|p| p.full_name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| user.display_name().to_string());
    let customer_phone = if address.phone.is_empty() {
        profile.and_then(|p| p.phone).unwrap_or_default()
    } else {
        address.phone.clone()
    };

    let checkout = Checkout {
        customer_id: user.id.clone(),
        customer_name,
        customer_email: user.email.clone(),
        customer_phone,
        shipping_address: ShippingAddress::from(address),
    };

    let order = place_order(&mut ctx.records, checkout, ctx.cart.cart(), Utc::now())?;
    ctx.cart.clear()?;

    print_success(&format!("Order {} placed", order.id));
    print_field("Items", &order.item_count().to_string());
    print_field("Total", &format_price(order.total_amount));
    print_field("Ship to", &order.shipping_address.summary());
    print_field("Payment", &colored_payment_status(order.payment_status).to_string());
    println!();
    Ok(())
}
