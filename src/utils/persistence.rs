use std::{fs, path::Path};

use clients_domain::ClientRecord;

use crate::errors::ApiError;

/// Writes the client list to disk atomically by staging to a temporary file.
pub fn save_clients_to_file(clients: &[ClientRecord], path: &Path) -> Result<(), ApiError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(clients)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a client list snapshot from disk, returning structured errors on failure.
pub fn load_clients_from_file(path: &Path) -> Result<Vec<ClientRecord>, ApiError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
