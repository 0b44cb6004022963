//! Dashboard figures derived from the order list.

use crate::core::catalog::{best_sellers, Product};
use crate::core::orders::{Order, OrderStatus, PaymentStatus};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Sum over orders whose payment has not failed.
    pub total_sales: u64,
    pub today_orders: usize,
    pub total_customers: usize,
    pub average_order_value: u64,
    pub status_distribution: Vec<(OrderStatus, usize)>,
    /// `YYYY-MM` buckets in ascending order.
    pub monthly_revenue: Vec<(String, u64)>,
    pub best_sellers: Vec<&'static Product>,
}

impl DashboardStats {
    pub fn compute(
        orders: &[Order],
        total_customers: usize,
        today: NaiveDate,
        best_seller_limit: usize,
    ) -> Self {
        let counted = || orders.iter().filter(|o| o.payment_status != PaymentStatus::Failed);

        let total_sales: u64 = counted().map(|o| o.total_amount).sum();
        let today_orders = orders
            .iter()
            .filter(|o| o.created_at.date_naive() == today)
            .count();
        let average_order_value = match orders.len() as u64 {
            0 => 0,
            n => total_sales / n,
        };

        let status_distribution = OrderStatus::ALL
            .into_iter()
            .map(|status| (status, orders.iter().filter(|o| o.status == status).count()))
            .collect();

        let mut months: BTreeMap<String, u64> = BTreeMap::new();
        for order in counted() {
            *months
                .entry(order.created_at.format("%Y-%m").to_string())
                .or_default() += order.total_amount;
        }

        Self {
            total_sales,
            today_orders,
            total_customers,
            average_order_value,
            status_distribution,
            monthly_revenue: months.into_iter().collect(),
            best_sellers: best_sellers(best_seller_limit),
        }
    }

    pub fn status_count(&self, status: OrderStatus) -> usize {
        self.status_distribution
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, n)| *n)
    }
}
