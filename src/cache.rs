//! Local cache of list-query results and the patch applied after a create.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, RwLock},
};

use clients_domain::ClientRecord;
use tracing::debug;

use crate::errors::CacheError;

/// Identity of a cached read query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey(&'static str);

impl QueryKey {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// "List clients for the current user". Takes no parameters.
pub const CLIENT_LIST_QUERY: QueryKey = QueryKey::new("obtenerClientesVendedor");

/// Keyed store of previously fetched client lists.
///
/// `write` replaces the entry as a whole: a reader observes either the old
/// list or the new one, never a mix.
pub trait ClientListCache: Send + Sync {
    fn read(&self, key: QueryKey) -> Result<Arc<Vec<ClientRecord>>, CacheError>;
    fn write(&self, key: QueryKey, clients: Vec<ClientRecord>) -> Result<(), CacheError>;
    fn evict(&self, key: QueryKey) -> Result<(), CacheError>;
}

/// Process-local [`ClientListCache`].
#[derive(Debug, Default)]
pub struct InMemoryClientListCache {
    entries: RwLock<HashMap<QueryKey, Arc<Vec<ClientRecord>>>>,
}

impl InMemoryClientListCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: QueryKey) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(&key))
            .unwrap_or(false)
    }
}

impl ClientListCache for InMemoryClientListCache {
    fn read(&self, key: QueryKey) -> Result<Arc<Vec<ClientRecord>>, CacheError> {
        let entries = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        entries.get(&key).cloned().ok_or(CacheError::Miss(key))
    }

    fn write(&self, key: QueryKey, clients: Vec<ClientRecord>) -> Result<(), CacheError> {
        let snapshot = Arc::new(clients);
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        entries.insert(key, snapshot);
        Ok(())
    }

    fn evict(&self, key: QueryKey) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        entries.remove(&key);
        Ok(())
    }
}

/// Appends a just-created record to the cached client list.
///
/// Requires a prior cached list; a miss is returned to the caller rather than
/// triggering a refetch. Returns the new list length.
pub fn patch_created_client(
    cache: &dyn ClientListCache,
    created: &ClientRecord,
) -> Result<usize, CacheError> {
    let current = cache.read(CLIENT_LIST_QUERY)?;
    let mut next = Vec::with_capacity(current.len() + 1);
    next.extend(current.iter().cloned());
    next.push(created.clone());
    let len = next.len();
    cache.write(CLIENT_LIST_QUERY, next)?;
    debug!(client = %created.id, len, "patched cached client list");
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clients_domain::{ClientFields, ClientId};

    fn record(id: &str, first: &str) -> ClientRecord {
        ClientRecord::from_fields(
            ClientId::new(id),
            ClientFields {
                first_name: first.into(),
                last_name: "Doe".into(),
                company: "Acme".into(),
                email: format!("{}@acme.com", first.to_lowercase()),
                phone: String::new(),
            },
        )
    }

    #[test]
    fn patch_appends_in_order() {
        let cache = InMemoryClientListCache::new();
        let before = vec![record("1", "Ann"), record("2", "Bob")];
        cache
            .write(CLIENT_LIST_QUERY, before.clone())
            .expect("seed cache");

        let created = record("3", "Cid");
        let len = patch_created_client(&cache, &created).expect("patch");

        let after = cache.read(CLIENT_LIST_QUERY).expect("read back");
        let mut expected = before;
        expected.push(created);
        assert_eq!(len, 3);
        assert_eq!(*after, expected);
    }

    #[test]
    fn patch_does_not_deduplicate() {
        let cache = InMemoryClientListCache::new();
        let existing = record("1", "Ann");
        cache
            .write(CLIENT_LIST_QUERY, vec![existing.clone()])
            .expect("seed cache");

        patch_created_client(&cache, &existing).expect("patch");

        assert_eq!(cache.read(CLIENT_LIST_QUERY).expect("read").len(), 2);
    }

    #[test]
    fn patch_without_prior_read_is_a_miss() {
        let cache = InMemoryClientListCache::new();

        let err = patch_created_client(&cache, &record("1", "Ann")).expect_err("miss");

        assert_eq!(err, CacheError::Miss(CLIENT_LIST_QUERY));
        assert!(!cache.contains(CLIENT_LIST_QUERY));
    }

    #[test]
    fn earlier_snapshot_is_unaffected_by_a_write() {
        let cache = InMemoryClientListCache::new();
        cache
            .write(CLIENT_LIST_QUERY, vec![record("1", "Ann")])
            .expect("seed cache");
        let snapshot = cache.read(CLIENT_LIST_QUERY).expect("read");

        patch_created_client(&cache, &record("2", "Bob")).expect("patch");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(cache.read(CLIENT_LIST_QUERY).expect("read").len(), 2);
    }

    #[test]
    fn evict_removes_the_entry() {
        let cache = InMemoryClientListCache::new();
        cache.write(CLIENT_LIST_QUERY, Vec::new()).expect("seed");
        cache.evict(CLIENT_LIST_QUERY).expect("evict");

        assert!(cache.read(CLIENT_LIST_QUERY).is_err());
    }
}
