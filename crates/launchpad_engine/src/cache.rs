use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

use crate::graphql::Operation;

/// In-memory store of successful `data` payloads, keyed by operation and variables.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: Mutex<HashMap<String, Value>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for `operation` with `variables`; `None` if the variables do not serialize.
    pub fn key<V: Serialize>(operation: Operation, variables: &V) -> Option<String> {
        let variables = serde_json::to_string(variables).ok()?;
        Some(format!("{}:{}", operation.name, variables))
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    pub fn insert(&self, key: String, data: Value) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key, data);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}
