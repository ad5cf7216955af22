use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use super::KeyValueStore;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// A single JSON object file holding every key.
///
/// Reads go to disk each time; writes rewrite the whole file through a
/// sibling temp file and a rename.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_object(&self) -> Result<Map<String, Value>, DomainError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(persistence(&self.path, "read", e)),
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("{} does not hold a JSON object", self.path.display()),
            )),
            Err(e) => Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("{}: {e}", self.path.display()),
            )),
        }
    }

    fn write_object(&self, map: Map<String, Value>) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| persistence(parent, "create", e))?;
        }
        let text = serde_json::to_string_pretty(&Value::Object(map)).map_err(|e| {
            DomainError::infra(InfraErrorKind::Persistence, format!("encode: {e}"))
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|e| persistence(&tmp, "write", e))?;
        fs::rename(&tmp, &self.path).map_err(|e| persistence(&self.path, "rename", e))?;
        debug!(path = %self.path.display(), "Store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, DomainError> {
        Ok(self.read_object()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), DomainError> {
        // A corrupt file is replaced rather than blocking every future save.
        let mut map = match self.read_object() {
            Ok(map) => map,
            Err(DomainError::Infra(InfraErrorKind::DataCorruption, _)) => Map::new(),
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), value);
        self.write_object(map)
    }
}

fn persistence(path: &Path, op: &str, e: std::io::Error) -> DomainError {
    DomainError::infra(
        InfraErrorKind::Persistence,
        format!("{op} {}: {e}", path.display()),
    )
}
