#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistryMetrics {
    pub total_bindings_registered: usize,
    pub total_bindings_replaced: usize,
}

impl RegistryMetrics {
    pub fn record_insert(&mut self) {
        self.total_bindings_registered += 1;
    }

    pub fn record_replace(&mut self) {
        self.total_bindings_registered += 1;
        self.total_bindings_replaced += 1;
    }
}
