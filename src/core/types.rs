//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// An environment name as written in a key URI (e.g., development, production).
///
/// Case-insensitive for vault lookups; upper-cased when deriving entry names.
pub type EnvironmentName = String;

/// A base64-encoded encrypted payload as stored in a vault entry.
///
/// Decodes to `[12-byte nonce][ciphertext][16-byte GCM tag]`.
pub type EncryptedBlob = String;

/// Decrypted payload bytes.
///
/// Interpreted as UTF-8 dotenv text by the loader.
pub type Plaintext = Vec<u8>;
