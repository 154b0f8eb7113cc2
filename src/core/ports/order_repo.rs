//! Order repository port
//!
//! Defines the interface for loading and saving ingested orders.

use super::super::models::Order;

/// Repository for service orders
///
/// Implementations hand out a full snapshot on every load and replace the
/// whole set on save.
pub trait OrderRepository {
    /// Load every stored order
    fn load_orders(&self) -> anyhow::Result<Vec<Order>>;

    /// Replace the stored orders
    fn save_orders(&self, orders: &[Order]) -> anyhow::Result<()>;

    /// Find an order by its spreadsheet number
    fn find_by_number(&self, number: &str) -> anyhow::Result<Option<Order>> {
        Ok(self.load_orders()?.into_iter().find(|o| o.number == number))
    }
}
