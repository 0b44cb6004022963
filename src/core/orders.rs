//! Orders: placement at checkout, the back-office list, search and status changes.
//!
//! Orders are rows in [`Table::Orders`]. The admin list starts from the seed
//! orders, which are written into an empty store the first time an admin
//! opens it. A customer who checks out before any admin command has run
//! leaves the table non-empty, so the samples are never loaded and the
//! dashboard reflects real orders only. Status changes are persisted.

use crate::core::cart::Cart;
use crate::core::catalog::find_product;
use crate::core::error::{Result, StorefrontError};
use crate::core::profile::Address;
use crate::core::records::{decode_rows, next_sequence, RecordFilter, RecordStore, Table};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    /// Every status, in fulfilment order. Any of them may be chosen from any other.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::New,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StorefrontError::unknown_order_status(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl ShippingAddress {
    pub fn summary(&self) -> String {
        let mut parts = vec![self.line1.as_str()];
        if let Some(line2) = self.line2.as_deref() {
            parts.push(line2);
        }
        parts.push(&self.city);
        parts.push(&self.state);
        format!("{} - {}", parts.join(", "), self.pincode)
    }
}

impl From<&Address> for ShippingAddress {
    fn from(address: &Address) -> Self {
        Self {
            line1: address.address_line1.clone(),
            line2: address.address_line2.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            pincode: address.pincode.clone(),
        }
    }
}

/// A purchased line, priced at the time of the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub price: u64,
    pub quantity: u32,
}

impl OrderItem {
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub items: Vec<OrderItem>,
    pub total_amount: u64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub shipping_address: ShippingAddress,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

/// All stored orders, newest first.
pub fn load_orders(store: &dyn RecordStore) -> Result<Vec<Order>> {
    let rows = store.fetch(Table::Orders, &RecordFilter::all())?;
    let mut orders: Vec<Order> = decode_rows(Table::Orders, rows)?;
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(orders)
}

/// One customer's orders, newest first.
pub fn orders_for_customer(store: &dyn RecordStore, customer_id: &str) -> Result<Vec<Order>> {
    let rows = store.fetch(
        Table::Orders,
        &RecordFilter::all().where_eq("customer_id", customer_id),
    )?;
    let mut orders: Vec<Order> = decode_rows(Table::Orders, rows)?;
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(orders)
}

/// Write the seed orders when the orders table is empty. Returns how many were written.
///
/// Any existing row skips seeding entirely, including an order placed at
/// checkout before the first admin visit.
pub fn seed_orders_if_empty(store: &mut dyn RecordStore) -> Result<usize> {
    if !store.fetch(Table::Orders, &RecordFilter::all())?.is_empty() {
        return Ok(0);
    }

    let seeds = seed_orders();
    for order in &seeds {
        store.insert(Table::Orders, serde_json::to_value(order)?)?;
    }
    log::debug!("Seeded {} order(s)", seeds.len());
    Ok(seeds.len())
}

/// Whether any of the sample orders are in `orders`.
pub fn has_seed_orders(orders: &[Order]) -> bool {
    let seeds = seed_orders();
    orders
        .iter()
        .any(|o| seeds.iter().any(|s| s.id == o.id && s.customer_id == o.customer_id))
}

/// Case-insensitive match on order id or customer name, AND the status filter.
pub fn search_orders<'a>(
    orders: &'a [Order],
    query: &str,
    status: Option<OrderStatus>,
) -> Vec<&'a Order> {
    let query = query.trim().to_lowercase();
    orders
        .iter()
        .filter(|o| {
            query.is_empty()
                || o.id.to_lowercase().contains(&query)
                || o.customer_name.to_lowercase().contains(&query)
        })
        .filter(|o| status.map_or(true, |s| o.status == s))
        .collect()
}

pub fn update_order_status(
    store: &mut dyn RecordStore,
    order_id: &str,
    status: OrderStatus,
    now: DateTime<Utc>,
) -> Result<Order> {
    let filter = RecordFilter::all().where_eq("id", order_id);
    let touched = store.update(
        Table::Orders,
        &filter,
        json!({ "status": status, "updated_at": now }),
    )?;
    if touched == 0 {
        return Err(StorefrontError::order_not_found(order_id));
    }

    let rows = store.fetch(Table::Orders, &filter)?;
    decode_rows::<Order>(Table::Orders, rows)?
        .into_iter()
        .next()
        .ok_or_else(|| StorefrontError::order_not_found(order_id))
}

/// `ORD-<year>-<seq>`, one past the highest sequence used that year.
pub fn next_order_id(store: &dyn RecordStore, year: i32) -> Result<String> {
    let prefix = format!("ORD-{year}-");
    let rows = store.fetch(Table::Orders, &RecordFilter::all())?;
    let seq = next_sequence(rows.iter().filter_map(|row| row.get("id")?.as_str()), &prefix);
    Ok(format!("{prefix}{seq:03}"))
}

/// Who is buying and where it goes.
#[derive(Debug, Clone)]
pub struct Checkout {
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: ShippingAddress,
}

/// Record the cart as a new order. Payment is left pending; the cart itself is not touched.
pub fn place_order(
    store: &mut dyn RecordStore,
    checkout: Checkout,
    cart: &Cart,
    now: DateTime<Utc>,
) -> Result<Order> {
    if cart.is_empty() {
        return Err(StorefrontError::EmptyCart);
    }

    let items: Vec<OrderItem> = cart
        .lines()
        .iter()
        .map(|line| OrderItem {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            price: line.product.price,
            quantity: line.quantity,
        })
        .collect();

    let order = Order {
        id: next_order_id(store, now.year())?,
        customer_id: checkout.customer_id,
        customer_name: checkout.customer_name,
        customer_email: checkout.customer_email,
        customer_phone: checkout.customer_phone,
        items,
        total_amount: cart.total_price(),
        status: OrderStatus::New,
        payment_status: PaymentStatus::Pending,
        shipping_address: checkout.shipping_address,
        created_at: now,
        updated_at: now,
    };

    store.insert(Table::Orders, serde_json::to_value(&order)?)?;
    log::debug!("Placed order {} for {}", order.id, order.customer_email);
    Ok(order)
}

pub(crate) fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn seed_items(lines: &[(&str, u32)]) -> Vec<OrderItem> {
    lines
        .iter()
        .filter_map(|&(id, quantity)| {
            let product = find_product(id)?;
            Some(OrderItem {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity,
            })
        })
        .collect()
}

fn address(line1: &str, line2: Option<&str>, city: &str, pincode: &str) -> ShippingAddress {
    ShippingAddress {
        line1: line1.to_string(),
        line2: line2.map(str::to_string),
        city: city.to_string(),
        state: "Tamil Nadu".to_string(),
        pincode: pincode.to_string(),
    }
}

pub(crate) fn priya_address() -> ShippingAddress {
    address(
        "45, Temple Street",
        Some("Near Kapaleeshwarar Temple"),
        "Chennai",
        "600004",
    )
}

pub(crate) fn lakshmi_address() -> ShippingAddress {
    address("12, Silk Bazaar Road", None, "Kanchipuram", "631501")
}

pub(crate) fn meenakshi_address() -> ShippingAddress {
    address("78, Anna Salai", Some("3rd Floor, Flat 302"), "Madurai", "625001")
}

pub(crate) fn kavitha_address() -> ShippingAddress {
    address("22, MG Road", None, "Coimbatore", "641001")
}

pub(crate) fn anitha_address() -> ShippingAddress {
    address("56, Nehru Street", None, "Trichy", "620001")
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    customer: (&str, &str, &str, &str),
    lines: &[(&str, u32)],
    status: OrderStatus,
    payment_status: PaymentStatus,
    shipping_address: ShippingAddress,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Order {
    let items = seed_items(lines);
    let (customer_id, name, email, phone) = customer;
    Order {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        customer_name: name.to_string(),
        customer_email: email.to_string(),
        customer_phone: phone.to_string(),
        total_amount: items.iter().map(OrderItem::subtotal).sum(),
        items,
        status,
        payment_status,
        shipping_address,
        created_at,
        updated_at,
    }
}

const PRIYA: (&str, &str, &str, &str) = (
    "cust-001",
    "Priya Venkatesh",
    "priya.v@email.com",
    "+91 98765 43210",
);

/// The back-office sample orders.
pub fn seed_orders() -> Vec<Order> {
    use OrderStatus::*;
    use PaymentStatus::*;

    vec![
        seed(
            "ORD-2024-001",
            PRIYA,
            &[("sg-001", 1), ("sg-006", 1)],
            New,
            Paid,
            priya_address(),
            utc(2024, 12, 15, 10, 30),
            utc(2024, 12, 15, 10, 30),
        ),
        seed(
            "ORD-2024-002",
            ("cust-002", "Lakshmi Narayanan", "lakshmi.n@email.com", "+91 87654 32109"),
            &[("sg-004", 1)],
            Processing,
            Paid,
            lakshmi_address(),
            utc(2024, 12, 14, 15, 45),
            utc(2024, 12, 15, 9, 0),
        ),
        seed(
            "ORD-2024-003",
            ("cust-003", "Meenakshi Sundaram", "meena.s@email.com", "+91 76543 21098"),
            &[("sg-002", 1), ("sg-005", 1)],
            Shipped,
            Paid,
            meenakshi_address(),
            utc(2024, 12, 12, 8, 20),
            utc(2024, 12, 14, 16, 0),
        ),
        seed(
            "ORD-2024-004",
            ("cust-004", "Kavitha Rajan", "kavitha.r@email.com", "+91 65432 10987"),
            &[("sg-007", 1)],
            Delivered,
            Paid,
            kavitha_address(),
            utc(2024, 12, 10, 12, 0),
            utc(2024, 12, 13, 14, 30),
        ),
        seed(
            "ORD-2024-005",
            ("cust-005", "Anitha Krishnan", "anitha.k@email.com", "+91 54321 09876"),
            &[("sg-003", 1), ("sg-008", 2)],
            New,
            Pending,
            anitha_address(),
            utc(2024, 12, 15, 14, 0),
            utc(2024, 12, 15, 14, 0),
        ),
        seed(
            "ORD-2024-006",
            PRIYA,
            &[("sg-005", 1)],
            Delivered,
            Paid,
            priya_address(),
            utc(2024, 11, 28, 9, 15),
            utc(2024, 12, 2, 11, 0),
        ),
    ]
}
