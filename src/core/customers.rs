//! The back-office customer directory.

use crate::core::orders::{
    anitha_address, kavitha_address, lakshmi_address, meenakshi_address, priya_address, utc,
    Order, ShippingAddress,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub total_orders: u32,
    pub total_spent: u64,
    pub default_address: ShippingAddress,
    pub created_at: DateTime<Utc>,
    pub last_order_at: DateTime<Utc>,
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    total_orders: u32,
    total_spent: u64,
    default_address: ShippingAddress,
    created_at: DateTime<Utc>,
    last_order_at: DateTime<Utc>,
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        total_orders,
        total_spent,
        default_address,
        created_at,
        last_order_at,
    }
}

pub fn seed_customers() -> Vec<Customer> {
    vec![
        customer(
            "cust-001",
            "Priya Venkatesh",
            "priya.v@email.com",
            "+91 98765 43210",
            4,
            185000,
            priya_address(),
            utc(2024, 6, 15, 10, 0),
            utc(2024, 12, 15, 10, 30),
        ),
        customer(
            "cust-002",
            "Lakshmi Narayanan",
            "lakshmi.n@email.com",
            "+91 87654 32109",
            2,
            93000,
            lakshmi_address(),
            utc(2024, 8, 20, 14, 30),
            utc(2024, 12, 14, 15, 45),
        ),
        customer(
            "cust-003",
            "Meenakshi Sundaram",
            "meena.s@email.com",
            "+91 76543 21098",
            3,
            142000,
            meenakshi_address(),
            utc(2024, 7, 10, 9, 0),
            utc(2024, 12, 12, 8, 20),
        ),
        customer(
            "cust-004",
            "Kavitha Rajan",
            "kavitha.r@email.com",
            "+91 65432 10987",
            1,
            48000,
            kavitha_address(),
            utc(2024, 10, 5, 11, 0),
            utc(2024, 12, 10, 12, 0),
        ),
        customer(
            "cust-005",
            "Anitha Krishnan",
            "anitha.k@email.com",
            "+91 54321 09876",
            1,
            76000,
            anitha_address(),
            utc(2024, 11, 20, 16, 0),
            utc(2024, 12, 15, 14, 0),
        ),
    ]
}

/// Case-insensitive match on name or email; the phone number matches as typed.
pub fn search_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    let raw = query.trim();
    let lowered = raw.to_lowercase();
    customers
        .iter()
        .filter(|c| {
            raw.is_empty()
                || c.name.to_lowercase().contains(&lowered)
                || c.email.to_lowercase().contains(&lowered)
                || c.phone.contains(raw)
        })
        .collect()
}

pub fn customer_orders<'a>(orders: &'a [Order], customer_id: &str) -> Vec<&'a Order> {
    orders.iter().filter(|o| o.customer_id == customer_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::orders::seed_orders;

    #[test]
    fn test_search_by_name_email_and_phone() {
        let customers = seed_customers();
        let ids = |q: &str| -> Vec<String> {
            search_customers(&customers, q)
                .into_iter()
                .map(|c| c.id.clone())
                .collect()
        };

        assert_eq!(ids("kavitha"), vec!["cust-004"]);
        assert_eq!(ids("MEENA.S@"), vec!["cust-003"]);
        assert_eq!(ids("54321"), vec!["cust-005"]);
        assert_eq!(ids("").len(), 5);
        assert!(ids("zzz").is_empty());
    }

    #[test]
    fn test_customer_orders() {
        let orders = seed_orders();
        let priya: Vec<&str> = customer_orders(&orders, "cust-001")
            .into_iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(priya, vec!["ORD-2024-001", "ORD-2024-006"]);
        assert!(customer_orders(&orders, "cust-999").is_empty());
    }
}
