mod rank_file;

pub use rank_file::{RankList, read_rank_file};

use crate::error::ProcessError;
use crate::systems::PlayerStore;
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ProcessError> {
    let path = path.as_ref();
    let json_str = std::fs::read_to_string(path).map_err(|e| ProcessError::io(path, e))?;
    serde_json::from_str(&json_str).map_err(|source| ProcessError::Json {
        path: path.to_owned(),
        source,
    })
}

pub fn write_json<T: Serialize + ?Sized>(
    value: &T,
    path: impl AsRef<Path>,
) -> Result<(), ProcessError> {
    let path = path.as_ref();
    let json_str = serde_json::to_string_pretty(value).map_err(|source| ProcessError::Json {
        path: path.to_owned(),
        source,
    })?;
    std::fs::write(path, json_str).map_err(|e| ProcessError::io(path, e))
}

pub fn write_csv<T: Serialize>(values: &[T], path: impl AsRef<Path>) -> Result<(), ProcessError> {
    let path = path.as_ref();
    let csv_err = |source| ProcessError::Csv {
        path: path.to_owned(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    values
        .iter()
        .try_for_each(|val| writer.serialize(val))
        .map_err(csv_err)?;
    writer.flush().map_err(|e| ProcessError::io(path, e))
}

pub fn read_store(path: impl AsRef<Path>) -> Result<PlayerStore, ProcessError> {
    let store: PlayerStore = read_json(&path)?;
    tracing::info!("Loaded {} players from {:?}", store.len(), path.as_ref());
    Ok(store)
}

pub fn write_store(store: &PlayerStore, path: impl AsRef<Path>) -> Result<(), ProcessError> {
    write_json(store, &path)?;
    tracing::info!("Successfully wrote {} players to {:?}", store.len(), path.as_ref());
    Ok(())
}
