use std::collections::HashMap;

use serde_json::Value;

use super::KeyValueStore;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// In-process store for tests and embedding. Can be switched into a failing
/// mode to exercise persistence-failure handling.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: impl Into<String>, value: Value) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value);
        store
    }

    /// Make every subsequent `set` fail.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, DomainError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::infra(
                InfraErrorKind::Persistence,
                format!("memory store refused write to '{key}'"),
            ));
        }
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
