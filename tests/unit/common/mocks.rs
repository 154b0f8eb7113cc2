//! Mock implementations of port traits for testing
//!
//! These mocks keep everything in memory so services can be exercised
//! without touching the filesystem.

use std::cell::{Cell, RefCell};

use monthwatch::core::models::{Order, Provider, Schedule};
use monthwatch::core::ports::{OrderRepository, ProviderRepository, ScheduleRepository};

/// In-memory store implementing every repository port
#[derive(Default)]
pub struct MockStore {
    orders: RefCell<Vec<Order>>,
    providers: RefCell<Vec<Provider>>,
    schedule: RefCell<Schedule>,
    saves: Cell<usize>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        let store = Self::default();
        *store.orders.borrow_mut() = orders;
        store
    }

    pub fn with_providers(self, providers: Vec<Provider>) -> Self {
        *self.providers.borrow_mut() = providers;
        self
    }

    /// Number of save calls across all repositories
    pub fn saves(&self) -> usize {
        self.saves.get()
    }

    fn saved(&self) {
        self.saves.set(self.saves.get() + 1);
    }
}

impl OrderRepository for MockStore {
    fn load_orders(&self) -> anyhow::Result<Vec<Order>> {
        Ok(self.orders.borrow().clone())
    }

    fn save_orders(&self, orders: &[Order]) -> anyhow::Result<()> {
        *self.orders.borrow_mut() = orders.to_vec();
        self.saved();
        Ok(())
    }
}

impl ProviderRepository for MockStore {
    fn load_providers(&self) -> anyhow::Result<Vec<Provider>> {
        Ok(self.providers.borrow().clone())
    }

    fn save_providers(&self, providers: &[Provider]) -> anyhow::Result<()> {
        *self.providers.borrow_mut() = providers.to_vec();
        self.saved();
        Ok(())
    }
}

impl ScheduleRepository for MockStore {
    fn load_schedule(&self) -> anyhow::Result<Schedule> {
        Ok(self.schedule.borrow().clone())
    }

    fn save_schedule(&self, schedule: &Schedule) -> anyhow::Result<()> {
        *self.schedule.borrow_mut() = schedule.clone();
        self.saved();
        Ok(())
    }
}
