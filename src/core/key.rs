//! DOTENV_KEY credential parsing.
//!
//! A DOTENV_KEY holds one or more key URIs, comma-separated when keys are
//! being rotated:
//!
//! ```text
//! dotenv://:key_1fc1d…c3dc@dotenv.org/vault/.env.vault?environment=production
//! ```
//!
//! The password part of the URI carries the decryption secret; the
//! `environment` query parameter names the vault entry it decrypts.

use crate::core::types::EnvironmentName;
use crate::error::{Error, Result};
use url::Url;
use zeroize::Zeroizing;

/// One decryption candidate parsed from a DOTENV_KEY entry.
///
/// The secret is zeroized on drop and redacted from debug output.
pub struct KeyCandidate {
    secret: Zeroizing<String>,
    environment: EnvironmentName,
}

impl KeyCandidate {
    /// The key material as written in the URI, prefix included.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The environment this key decrypts.
    pub fn environment(&self) -> &str {
        &self.environment
    }
}

impl std::fmt::Debug for KeyCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyCandidate")
            .field("secret", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}

/// Parse a raw DOTENV_KEY string into ordered decryption candidates.
///
/// Entries are split on commas and trimmed; entries left empty by trimming
/// are skipped, so an empty or whitespace-only string parses to an empty
/// list. Candidate order is exactly entry order. Pure, no I/O.
///
/// # Errors
///
/// Returns `InvalidKeyFormat` if any entry is not a well-formed URI, has no
/// password part, or has no `environment` query parameter.
pub fn parse_dotenv_key(raw: &str) -> Result<Vec<KeyCandidate>> {
    let mut candidates = Vec::new();

    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        candidates.push(parse_entry(entry)?);
    }

    Ok(candidates)
}

fn parse_entry(entry: &str) -> Result<KeyCandidate> {
    // Reason strings stay fixed literals: the entry itself embeds the secret.
    let uri =
        Url::parse(entry).map_err(|_| Error::InvalidKeyFormat("must be a valid uri".into()))?;

    let secret = match uri.password() {
        Some(password) if !password.is_empty() => password.to_string(),
        _ => return Err(Error::InvalidKeyFormat("missing key part".into())),
    };

    let environment = uri
        .query_pairs()
        .find(|(name, _)| name == "environment")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::InvalidKeyFormat("missing environment part".into()))?;

    Ok(KeyCandidate {
        secret: Zeroizing::new(secret),
        environment,
    })
}
