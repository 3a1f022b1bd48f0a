/// Receives "decrement stock" signals from checkout.
pub trait InventorySystem {
    fn decrement_stock(&mut self);
}

/// Inventory that logs each update and counts them.
#[derive(Debug, Clone, Default)]
pub struct TracingInventory {
    updates: u64,
}

impl TracingInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of decrement signals received so far.
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl InventorySystem for TracingInventory {
    fn decrement_stock(&mut self) {
        self.updates += 1;
        tracing::info!(
            target: "flexorder::inventory",
            updates = self.updates,
            "Stock updated: decrementing quantities."
        );
    }
}
