pub mod json_backend;
pub mod memory;

use crate::{domain::RecordCollection, errors::PersistenceError};

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// A single key-addressed blob slot the record list is persisted in.
pub trait PersistenceBackend: Send + Sync {
    /// Returns the stored blob, or `None` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>>;
    fn write(&self, blob: &str) -> Result<()>;
}

/// Encodes the collection as a JSON array of record objects.
pub fn encode_collection(collection: &RecordCollection) -> Result<String> {
    Ok(serde_json::to_string(collection)?)
}

pub fn decode_collection(blob: &str) -> std::result::Result<RecordCollection, serde_json::Error> {
    serde_json::from_str(blob)
}

pub use json_backend::JsonFileBackend;
pub use memory::MemoryBackend;
