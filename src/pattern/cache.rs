use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;
use std::sync::Arc;

use super::PatternResult;
use super::catalog::TypeCatalog;
use super::compiled::{CompiledPattern, compile_with};

#[derive(Debug, Default)]
pub struct PatternCompiler {
    catalog: TypeCatalog,
    cache: RwLock<FastHashMap<Box<str>, Arc<CompiledPattern>>>,
}

impl PatternCompiler {
    pub fn new(catalog: TypeCatalog) -> Self {
        Self {
            catalog,
            cache: RwLock::new(FastHashMap::new()),
        }
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn compile(&self, template: &str) -> PatternResult<Arc<CompiledPattern>> {
        if let Some(found) = self.cache.read().get(template).cloned() {
            return Ok(found);
        }

        let compiled = Arc::new(compile_with(template, &self.catalog)?);

        let mut cache = self.cache.write();
        let entry = cache
            .entry(Box::from(template))
            .or_insert_with(|| compiled.clone());
        Ok(entry.clone())
    }

    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn clear(&self) {
        let mut cache = self.cache.write();
        cache.clear();
        cache.shrink_to_fit();
    }
}
