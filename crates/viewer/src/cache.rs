use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
};

use types::{Order, OrderDetails};

use crate::RecordKind;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub kind: RecordKind,
    pub hash: String,
}

impl RecordKey {
    pub fn new(kind: RecordKind, hash: &str) -> Self {
        Self {
            kind,
            hash: hash.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CachedRecord {
    Order(Order),
    Details(OrderDetails),
}

/// Memoizes fetched records across assemblies. Only successfully decoded
/// records are ever inserted.
pub trait RecordCache: Send + Sync {
    fn get(&self, key: &RecordKey) -> Option<CachedRecord>;

    fn insert(&self, key: RecordKey, record: CachedRecord);
}

/// Unbounded in-process cache. Entries never expire.
#[derive(Debug, Default)]
pub struct MemoryCache {
    records: Mutex<HashMap<RecordKey, CachedRecord>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordCache for MemoryCache {
    fn get(&self, key: &RecordKey) -> Option<CachedRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn insert(&self, key: RecordKey, record: CachedRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::details;

    #[test]
    fn test_memory_cache_is_keyed_by_kind_and_hash() {
        let cache = MemoryCache::new();
        assert!(cache.is_empty());

        cache.insert(
            RecordKey::new(RecordKind::Details, "0xabc"),
            CachedRecord::Details(details()),
        );

        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.get(&RecordKey::new(RecordKind::Details, "0xabc")),
            Some(CachedRecord::Details(details()))
        );
        assert!(cache.get(&RecordKey::new(RecordKind::Order, "0xabc")).is_none());
        assert!(cache.get(&RecordKey::new(RecordKind::Details, "0xdef")).is_none());
    }
}
