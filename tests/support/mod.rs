//! Test support utilities for dotvault integration tests.
//!
//! Provides the encryption half the library deliberately does not ship,
//! plus fixture writers and credential builders.

#![allow(dead_code)]

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dotvault::core::entry_name;
use rand::RngCore;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

/// Install a test-writer subscriber once per test binary.
///
/// Filtering follows RUST_LOG, so `RUST_LOG=dotvault=debug cargo test`
/// shows the loader's decisions.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Fresh 64-hex-char secret (32 random key bytes).
pub fn random_secret() -> String {
    let mut key = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut key);
    hex::encode(key)
}

/// Encrypt a payload the way vault entries are built: random 12-byte nonce,
/// AES-256-GCM with the secret's trailing 64 hex chars as key, tag appended,
/// the whole blob base64-encoded.
pub fn encrypt_blob(plaintext: &[u8], secret: &str) -> String {
    let bytes = secret.as_bytes();
    assert!(bytes.len() >= 64, "test secret must end in 64 hex chars");

    let mut key = [0u8; 32];
    hex::decode_to_slice(&bytes[bytes.len() - 64..], &mut key)
        .expect("test secret must end in 64 hex chars");

    let mut nonce = [0u8; 12];
    rand::thread_rng().fill_bytes(&mut nonce);

    let cipher = Aes256Gcm::new_from_slice(&key).expect("32-byte key");
    let sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .expect("encryption cannot fail");

    let mut blob = nonce.to_vec();
    blob.extend_from_slice(&sealed);
    STANDARD.encode(blob)
}

/// Credential URI for one secret/environment pair.
pub fn key_uri(secret: &str, environment: &str) -> String {
    format!("dotenv://:key_{secret}@dotenv.org/vault/.env.vault?environment={environment}")
}

/// Write a `.env.vault` fixture with one entry per (environment, blob) pair.
pub fn write_vault_file(dir: &Path, entries: &[(&str, &str)]) -> PathBuf {
    let mut contents = String::from("#/ encrypted env fixture\n");
    for (environment, blob) in entries {
        contents.push_str(&format!("{}=\"{}\"\n", entry_name(environment), blob));
    }

    let path = dir.join(".env.vault");
    fs::write(&path, contents).expect("failed to write vault fixture");
    path
}

/// Write a plain `.env` fixture.
pub fn write_env_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(".env");
    fs::write(&path, contents).expect("failed to write env fixture");
    path
}

/// Encrypt `plaintext` for `environment` into a fresh `.env.vault` in `dir`,
/// returning the DOTENV_KEY credential that decrypts it.
pub fn setup_vault(dir: &Path, environment: &str, plaintext: &str) -> String {
    let secret = random_secret();
    let blob = encrypt_blob(plaintext.as_bytes(), &secret);
    write_vault_file(dir, &[(environment, &blob)]);
    key_uri(&secret, environment)
}
