use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;
use std::sync::Arc;

use crate::enums::MethodToken;
use crate::pattern::CompiledPattern;
use crate::registry::{HostScope, RegistryMetrics, RouteBinding};
use crate::types::Handler;

#[derive(Debug, Clone)]
pub struct RouteEntry {
    pattern: Arc<CompiledPattern>,
    bindings: SmallVec<[RouteBinding; 4]>,
}

impl RouteEntry {
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    pub fn bindings(&self) -> &[RouteBinding] {
        &self.bindings
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Added,
    Replaced,
}

/// Patterns in registration order, deduplicated by pattern text.
#[derive(Debug, Default, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    index: FastHashMap<Box<str>, usize>,
    next_seq: u64,
    metrics: RegistryMetrics,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `handler` under `pattern` for `method` within `hosts`.
    ///
    /// A pattern already present keeps its position. A binding with the same
    /// method and host scope is replaced in place and becomes the newest.
    pub fn insert(
        &mut self,
        pattern: Arc<CompiledPattern>,
        method: MethodToken,
        hosts: HostScope,
        handler: Handler,
    ) -> InsertOutcome {
        let slot = match self.index.get(pattern.as_str()) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(Box::from(pattern.as_str()), slot);
                self.entries.push(RouteEntry {
                    pattern,
                    bindings: SmallVec::new(),
                });
                slot
            }
        };

        let seq = self.next_seq;
        self.next_seq += 1;

        let entry = &mut self.entries[slot];
        if let Some(existing) = entry
            .bindings
            .iter_mut()
            .find(|binding| binding.same_slot(&method, &hosts))
        {
            existing.handler = handler;
            existing.seq = seq;
            self.metrics.record_replace();
            return InsertOutcome::Replaced;
        }

        entry
            .bindings
            .push(RouteBinding::new(method, hosts, handler, seq));
        self.metrics.record_insert();
        InsertOutcome::Added
    }

    pub fn get(&self, pattern_source: &str) -> Option<&RouteEntry> {
        self.index
            .get(pattern_source)
            .map(|&slot| &self.entries[slot])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
