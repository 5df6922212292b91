use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Persistent key-value store seam.
///
/// Keys are scoped by a namespace path so each provider's settings stay
/// isolated. Setters persist immediately and synchronously; single-key
/// writes are atomic, cross-key consistency is not promised.
pub trait SettingsStore: Send + Sync {
    fn get_string(&self, path: &str, key: &str) -> Option<String>;
    fn set_string(&self, path: &str, key: &str, value: &str);
    fn get_list(&self, path: &str, key: &str) -> Option<Vec<String>>;
    fn set_list(&self, path: &str, key: &str, value: &[String]);
}

#[derive(Debug, Clone)]
enum Value {
    Str(String),
    List(Vec<String>),
}

/// In-process store backing tests and sessions without a persistent backend.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<(String, String), Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> MutexGuard<'_, HashMap<(String, String), Value>> {
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SettingsStore for MemoryStore {
    fn get_string(&self, path: &str, key: &str) -> Option<String> {
        match self.values().get(&(path.to_string(), key.to_string())) {
            Some(Value::Str(value)) => Some(value.clone()),
            _ => None,
        }
    }

    fn set_string(&self, path: &str, key: &str, value: &str) {
        self.values()
            .insert((path.to_string(), key.to_string()), Value::Str(value.to_string()));
    }

    fn get_list(&self, path: &str, key: &str) -> Option<Vec<String>> {
        match self.values().get(&(path.to_string(), key.to_string())) {
            Some(Value::List(value)) => Some(value.clone()),
            _ => None,
        }
    }

    fn set_list(&self, path: &str, key: &str, value: &[String]) {
        self.values()
            .insert((path.to_string(), key.to_string()), Value::List(value.to_vec()));
    }
}
