//! Vault entry lookup.
//!
//! Maps an environment name to its ciphertext entry: the entry for
//! environment `production` is named `DOTENV_VAULT_PRODUCTION`.

use crate::core::types::EncryptedBlob;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};

/// Prefix shared by every vault entry name.
pub const ENTRY_PREFIX: &str = "DOTENV_VAULT_";

/// Read-only source of vault entries by name.
///
/// Implemented by the parsed vault snapshot (`domain::Env`) and by plain
/// maps for embedding and tests.
pub trait VaultSource {
    /// Raw value of a named entry, if present.
    fn entry(&self, name: &str) -> Option<String>;
}

impl VaultSource for BTreeMap<String, String> {
    fn entry(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl VaultSource for HashMap<String, String> {
    fn entry(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Vault entry name for an environment (e.g., `DOTENV_VAULT_PRODUCTION`).
pub fn entry_name(environment: &str) -> String {
    format!("{}{}", ENTRY_PREFIX, environment.to_uppercase())
}

/// Fetch the ciphertext blob for an environment from a vault source.
///
/// An entry stored with an empty value counts as absent.
///
/// # Errors
///
/// Returns `EnvironmentNotFound` carrying the derived entry name if the
/// source has no non-empty entry under it.
pub fn lookup<S: VaultSource + ?Sized>(environment: &str, source: &S) -> Result<EncryptedBlob> {
    let name = entry_name(environment);

    match source.entry(&name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::EnvironmentNotFound(name)),
    }
}
