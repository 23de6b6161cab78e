use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::codegen::CodeGenerator;
use crate::errors::ShortenerError;
use crate::model::LinkStats;

/// A single shortened link and its view metrics. `unique_visitors` holds the
/// client IPs that have followed the link, so its cardinality never exceeds
/// `view_count`.
#[derive(Debug)]
struct ShortMapping {
    destination_url: String,
    view_count: u64,
    unique_visitors: HashSet<String>,
}

/// In-memory source of truth for code -> destination mappings. One lock over
/// the whole table; the redirect path takes it for writing so its
/// read-then-increment is atomic with respect to concurrent redirects of the
/// same code.
#[derive(Default)]
pub struct MappingStore {
    table: RwLock<HashMap<String, ShortMapping>>,
}

impl MappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh code and inserts a mapping with zero counters.
    /// The destination URL is stored verbatim; only emptiness is rejected.
    /// A code collision silently overwrites the earlier mapping.
    pub fn create(
        &self,
        codes: &CodeGenerator,
        destination_url: &str,
    ) -> Result<String, ShortenerError> {
        if destination_url.is_empty() {
            return Err(ShortenerError::InvalidInput);
        }
        let code = codes.generate();
        let mapping = ShortMapping {
            destination_url: destination_url.to_string(),
            view_count: 0,
            unique_visitors: HashSet::new(),
        };
        let mut table = self.table.write().expect("mapping store lock poisoned");
        table.insert(code.clone(), mapping);
        Ok(code)
    }

    /// Returns the destination URL for a code, counting the visit. The write
    /// lock covers both the counter increment and the unique-visitor insert,
    /// so no concurrent redirect loses an update.
    pub fn resolve(&self, code: &str, client_ip: &str) -> Result<String, ShortenerError> {
        let mut table = self.table.write().expect("mapping store lock poisoned");
        let mapping = table.get_mut(code).ok_or(ShortenerError::NotFound)?;
        mapping.view_count += 1;
        mapping.unique_visitors.insert(client_ip.to_string());
        Ok(mapping.destination_url.clone())
    }

    pub fn stats(&self, code: &str) -> Result<LinkStats, ShortenerError> {
        let table = self.table.read().expect("mapping store lock poisoned");
        let mapping = table.get(code).ok_or(ShortenerError::NotFound)?;
        Ok(LinkStats {
            destination_url: mapping.destination_url.clone(),
            view_count: mapping.view_count,
            unique_view_count: mapping.unique_visitors.len(),
        })
    }

    /// Removes the mapping. Deleting an absent code is a no-op.
    pub fn delete(&self, code: &str) {
        let mut table = self.table.write().expect("mapping store lock poisoned");
        table.remove(code);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.table.read().expect("mapping store lock poisoned").len()
    }
}
