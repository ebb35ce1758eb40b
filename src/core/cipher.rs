//! AES-256-GCM decryption of vault payloads.
//!
//! A payload is base64 over `[12-byte nonce][ciphertext][16-byte tag]`. The
//! decryption key is the trailing 64 hex characters of the credential
//! secret, decoded to 32 bytes; anything before them is an opaque prefix
//! (`key_`, `vlt_`, ...).

use crate::core::types::Plaintext;
use crate::error::{Error, Result};
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroizing;

/// Key material length in hex characters (32 bytes, AES-256).
const KEY_HEX_LEN: usize = 64;
/// GCM nonce length in bytes.
const NONCE_LEN: usize = 12;
/// GCM authentication tag length in bytes.
const TAG_LEN: usize = 16;

/// Decrypt a base64-encoded vault payload with a credential secret.
///
/// # Arguments
///
/// * `encrypted` - Base64 payload as stored in the vault entry
/// * `key_str` - Credential secret; only its trailing 64 hex characters are
///   key material
///
/// # Returns
///
/// The decrypted plaintext bytes.
///
/// # Errors
///
/// * `MissingCiphertext` if `encrypted` is empty.
/// * `InvalidKeyLength` if fewer than 64 trailing hex characters are
///   available; no cryptographic primitive runs in that case.
/// * `InvalidCiphertextEncoding` if `encrypted` is not valid standard
///   base64.
/// * `DecryptionFailed` for every cipher-level failure: truncated payloads,
///   wrong keys, and authentication-tag mismatches are indistinguishable.
pub fn decrypt(encrypted: &str, key_str: &str) -> Result<Plaintext> {
    if encrypted.is_empty() {
        return Err(Error::MissingCiphertext);
    }

    let key = decode_key(key_str)?;

    let blob = STANDARD.decode(encrypted)?;
    if blob.len() < NONCE_LEN + TAG_LEN {
        return Err(Error::DecryptionFailed);
    }

    // The remainder after the nonce is ciphertext with the tag appended,
    // which is the combined form Aead::decrypt takes.
    let (nonce, payload) = blob.split_at(NONCE_LEN);

    let cipher = Aes256Gcm::new_from_slice(key.as_slice()).map_err(|_| Error::DecryptionFailed)?;
    cipher
        .decrypt(Nonce::from_slice(nonce), payload)
        .map_err(|_| Error::DecryptionFailed)
}

/// Decode the trailing 64 hex characters of a secret into a 32-byte key.
///
/// The buffer is zeroized on drop. The tail is taken bytewise, so a
/// non-ASCII secret can never panic a slice; stray non-hex bytes fail the
/// decode instead.
fn decode_key(key_str: &str) -> Result<Zeroizing<[u8; 32]>> {
    let bytes = key_str.as_bytes();
    if bytes.len() < KEY_HEX_LEN {
        return Err(Error::InvalidKeyLength);
    }

    let tail = &bytes[bytes.len() - KEY_HEX_LEN..];
    let mut key = Zeroizing::new([0u8; 32]);
    hex::decode_to_slice(tail, key.as_mut_slice()).map_err(|_| Error::InvalidKeyLength)?;

    Ok(key)
}
