// EN: src/core/env.rs

use std::collections::HashMap;

/// An explicit, read-only environment passed into every dispatch call.
///
/// Windows variable names are case-insensitive while Rust maps are not, so lookups
/// prefer an exact key match and then fall back to an ASCII-case-insensitive one.
/// This lets `Path`, `PATH` and `pAtH` all satisfy a lookup for `PATH`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    vars: Vec<(String, String)>,
}

impl EnvMap {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots the current process environment. Non-UTF-8 entries are converted lossily.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    /// Sets `key` to `value`, replacing an entry with exactly the same name.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.vars.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.vars.push((key, value)),
        }
    }

    /// Builder form of [`EnvMap::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Looks up `key`, ignoring ASCII case when no exact match exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(existing, _)| existing == key)
            .or_else(|| {
                self.vars
                    .iter()
                    .find(|(existing, _)| existing.eq_ignore_ascii_case(key))
            })
            .map(|(_, value)| value.as_str())
    }

    /// Like [`EnvMap::get`], but treats an empty value as unset.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.trim().is_empty())
    }

    /// Returns `true` if no variables are defined.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates over the variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (key, value) in iter {
            env.insert(key, value);
        }
        env
    }
}

impl From<HashMap<String, String>> for EnvMap {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}
