use std::sync::Arc;

use clients_domain::ClientRecord;
use tracing::debug;

use crate::{
    api::ClientApi,
    cache::{ClientListCache, CLIENT_LIST_QUERY},
    errors::{CacheError, ListError},
};

/// Returns the listing, serving it from cache when a prior result exists.
pub fn load_client_list(
    api: &dyn ClientApi,
    cache: &dyn ClientListCache,
) -> Result<Arc<Vec<ClientRecord>>, ListError> {
    match cache.read(CLIENT_LIST_QUERY) {
        Ok(clients) => {
            debug!(count = clients.len(), "client list served from cache");
            return Ok(clients);
        }
        Err(CacheError::Miss(_)) => {}
        Err(err) => return Err(err.into()),
    }
    let clients = api.list_clients()?;
    debug!(count = clients.len(), "client list fetched");
    cache.write(CLIENT_LIST_QUERY, clients)?;
    Ok(cache.read(CLIENT_LIST_QUERY)?)
}

/// Drops the cached listing and fetches it again.
pub fn refresh_client_list(
    api: &dyn ClientApi,
    cache: &dyn ClientListCache,
) -> Result<Arc<Vec<ClientRecord>>, ListError> {
    cache.evict(CLIENT_LIST_QUERY)?;
    load_client_list(api, cache)
}
