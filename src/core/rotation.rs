//! Candidate key rotation.
//!
//! A DOTENV_KEY may carry several keys at once while a deployment migrates
//! from an old key to a new one. Candidates are tried in order against the
//! vault; the first successful decryption wins and later candidates are
//! never attempted.

use crate::core::types::Plaintext;
use crate::core::{cipher, key, lookup, VaultSource};
use crate::error::{Error, Result};
use tracing::debug;

/// Decrypt a vault entry with a raw DOTENV_KEY credential.
///
/// Parses the credential once, then tries each candidate in order: look up
/// the ciphertext for its environment, attempt decryption, and return the
/// first plaintext. A candidate rejected by the cipher is skipped; every
/// other failure aborts immediately. In particular a missing vault entry is
/// a configuration problem, not a stale key, so rotation does not skip past
/// it.
///
/// # Errors
///
/// * `InvalidKeyFormat` if the credential parses to no candidates or any
///   entry is malformed.
/// * `EnvironmentNotFound` as soon as any candidate's environment has no
///   vault entry.
/// * `InvalidKey` once every candidate has been rejected by the cipher.
pub fn resolve<S: VaultSource + ?Sized>(dotenv_key: &str, source: &S) -> Result<Plaintext> {
    let candidates = key::parse_dotenv_key(dotenv_key)?;
    if candidates.is_empty() {
        return Err(Error::InvalidKeyFormat("no key supplied".into()));
    }

    let total = candidates.len();

    for (index, candidate) in candidates.iter().enumerate() {
        let encrypted = lookup::lookup(candidate.environment(), source)?;

        match cipher::decrypt(&encrypted, candidate.secret()) {
            Ok(plaintext) => {
                debug!(
                    environment = %candidate.environment(),
                    attempt = index + 1,
                    total,
                    "vault entry decrypted"
                );
                return Ok(plaintext);
            }
            // Expected mid-rotation: this key no longer (or does not yet)
            // match the vault entry. Try the next one.
            Err(Error::DecryptionFailed) => {
                debug!(
                    environment = %candidate.environment(),
                    attempt = index + 1,
                    total,
                    "candidate key rejected"
                );
            }
            Err(other) => return Err(other),
        }
    }

    Err(Error::InvalidKey)
}
