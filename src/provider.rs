//! Environment providers.
//!
//! The loader reads DOTENV_KEY and writes decrypted entries through this
//! abstraction rather than touching process globals directly, so embedders
//! and tests can substitute an in-memory map.

use std::collections::BTreeMap;

/// Key-value backend the loader reads credentials from and merges entries
/// into.
pub trait EnvProvider {
    /// Current value of a variable, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Set a variable.
    fn set(&mut self, name: &str, value: &str);
}

/// Provider backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&mut self, name: &str, value: &str) {
        std::env::set_var(name, value);
    }
}

/// In-memory provider for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a variable, builder-style.
    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// All variables as name-value pairs, sorted by name.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl EnvProvider for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }
}
