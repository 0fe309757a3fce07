use std::{
    path::PathBuf,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use clients_domain::{ClientFields, ClientId, ClientRecord};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    errors::{ApiError, ApiResult},
    utils::persistence::{load_clients_from_file, save_clients_to_file},
};

use super::ClientApi;

/// In-process stand-in for the remote client service.
///
/// Keeps records in memory and, when opened on a path, mirrors every write to
/// a JSON file. Like the real service it refuses a second client with an
/// already-registered email.
#[derive(Debug, Default)]
pub struct LocalClientStore {
    clients: RwLock<Vec<ClientRecord>>,
    path: Option<PathBuf>,
}

impl LocalClientStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn with_clients(clients: Vec<ClientRecord>) -> Self {
        Self {
            clients: RwLock::new(clients),
            path: None,
        }
    }

    /// Opens a file-backed store, starting empty when the file does not exist yet.
    pub fn open(path: PathBuf) -> ApiResult<Self> {
        let clients = if path.exists() {
            load_clients_from_file(&path)?
        } else {
            Vec::new()
        };
        info!(path = %path.display(), count = clients.len(), "opened client store");
        Ok(Self {
            clients: RwLock::new(clients),
            path: Some(path),
        })
    }

    pub fn len(&self) -> usize {
        self.read().map(|clients| clients.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> ApiResult<RwLockReadGuard<'_, Vec<ClientRecord>>> {
        self.clients
            .read()
            .map_err(|_| ApiError::Storage("client store lock poisoned".into()))
    }

    fn write(&self) -> ApiResult<RwLockWriteGuard<'_, Vec<ClientRecord>>> {
        self.clients
            .write()
            .map_err(|_| ApiError::Storage("client store lock poisoned".into()))
    }

    fn persist(&self, clients: &[ClientRecord]) -> ApiResult<()> {
        match &self.path {
            Some(path) => save_clients_to_file(clients, path),
            None => Ok(()),
        }
    }
}

impl ClientApi for LocalClientStore {
    fn fetch_client(&self, id: &ClientId) -> ApiResult<ClientFields> {
        self.read()?
            .iter()
            .find(|client| &client.id == id)
            .map(ClientRecord::fields)
            .ok_or_else(|| ApiError::NotFound(id.clone()))
    }

    fn list_clients(&self) -> ApiResult<Vec<ClientRecord>> {
        Ok(self
            .read()?
            .iter()
            .map(|client| ClientRecord {
                phone: None,
                ..client.clone()
            })
            .collect())
    }

    fn create_client(&self, input: &ClientFields) -> ApiResult<ClientRecord> {
        let mut clients = self.write()?;
        if clients.iter().any(|client| client.email == input.email) {
            return Err(ApiError::Rejected("Client already registered".into()));
        }
        let record = ClientRecord::from_fields(
            ClientId::new(Uuid::new_v4().to_string()),
            input.clone(),
        );
        let mut next = clients.clone();
        next.push(record.clone());
        self.persist(&next)?;
        *clients = next;
        debug!(client = %record.id, "created client");
        Ok(record)
    }

    fn update_client(&self, id: &ClientId, input: &ClientFields) -> ApiResult<ClientFields> {
        let mut clients = self.write()?;
        let mut next = clients.clone();
        let client = next
            .iter_mut()
            .find(|client| &client.id == id)
            .ok_or_else(|| ApiError::NotFound(id.clone()))?;
        client.apply(input.clone());
        let updated = client.fields();
        self.persist(&next)?;
        *clients = next;
        debug!(client = %id, "updated client");
        Ok(updated)
    }
}
