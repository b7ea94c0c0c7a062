#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    matched_count: usize,
}

impl DispatchOutcome {
    pub(crate) fn new(matched_count: usize) -> Self {
        Self { matched_count }
    }

    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    pub fn is_matched(&self) -> bool {
        self.matched_count > 0
    }
}
