use crate::record::MappingRecord;
use crate::registry::Registry;
use crate::shortcode::ShortCode;
use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::trace;

/// In-memory implementation of the [`Registry`] trait.
///
/// A single mutex guards the whole map, so every operation (including the
/// click read-modify-write) is linearizable. All operations are O(1) map
/// accesses and never call out while holding the lock.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    storage: Mutex<HashMap<ShortCode, MappingRecord>>,
}

impl InMemoryRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new registry with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Mutex::new(HashMap::with_capacity(capacity)),
        }
    }
}

impl Registry for InMemoryRegistry {
    fn create(&self, code: &ShortCode, original_url: &str) {
        let record = MappingRecord::new(original_url);
        if self.storage.lock().insert(code.clone(), record).is_some() {
            trace!(code = %code, "replaced existing mapping");
        }
    }

    fn create_if_absent(&self, code: &ShortCode, original_url: &str) -> bool {
        match self.storage.lock().entry(code.clone()) {
            Entry::Occupied(_) => {
                trace!(code = %code, "short code already taken");
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(MappingRecord::new(original_url));
                true
            }
        }
    }

    fn get(&self, code: &ShortCode) -> Option<MappingRecord> {
        self.storage.lock().get(code).cloned()
    }

    fn exists(&self, code: &ShortCode) -> bool {
        self.storage.lock().contains_key(code)
    }

    fn increment_click(&self, code: &ShortCode) {
        match self.storage.lock().get_mut(code) {
            Some(record) => record.click_count += 1,
            None => trace!(code = %code, "ignoring click on unknown short code"),
        }
    }

    fn len(&self) -> usize {
        self.storage.lock().len()
    }
}
