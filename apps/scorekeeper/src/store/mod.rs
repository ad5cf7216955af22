//! Key-value blob stores backing the completed-games collection.
//!
//! Stores hold whole JSON values under string keys. There are no partial
//! updates and no transactions: callers replace a key's value wholesale.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
use serde_json::Value;

use crate::errors::domain::DomainError;

pub trait KeyValueStore {
    /// Value under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<Value>, DomainError>;

    /// Replace the value under `key` and make it durable.
    fn set(&mut self, key: &str, value: Value) -> Result<(), DomainError>;
}
