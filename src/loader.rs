//! Boot-time loading of plain and encrypted env files.
//!
//! The conventional dotenv boot sequence: when the provider carries a
//! DOTENV_KEY, decrypt `.env.vault` and merge its entries; otherwise load
//! the plain `.env` file. Decrypted content stays in memory and is never
//! written anywhere.

use crate::core;
use crate::domain::Env;
use crate::error::{Error, Result};
use crate::provider::EnvProvider;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use zeroize::{Zeroize, Zeroizing};

/// Name of the credential variable consulted on every load.
pub const DOTENV_KEY_VAR: &str = "DOTENV_KEY";

const ENV_FILE: &str = ".env";
const VAULT_FILE: &str = ".env.vault";

/// Loads environment entries from `.env` / `.env.vault` into a provider.
///
/// By default the loader searches the current directory and never
/// overwrites variables the provider already has (existing values win, as
/// conventional for dotenv loading).
#[derive(Debug, Clone)]
pub struct Loader {
    paths: Vec<PathBuf>,
    override_existing: bool,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    /// Loader searching the current directory.
    pub fn new() -> Self {
        Self {
            paths: vec![PathBuf::from(".")],
            override_existing: false,
        }
    }

    /// Replace the directories probed for `.env` / `.env.vault`.
    ///
    /// Directories are probed in order; the first hit wins.
    pub fn with_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Let loaded entries replace variables the provider already has.
    pub fn override_existing(mut self, value: bool) -> Self {
        self.override_existing = value;
        self
    }

    /// Load entries into the provider, returning the entries applied in
    /// file order.
    ///
    /// With a DOTENV_KEY in the provider the `.env.vault` file is decrypted
    /// and merged; without one the plain `.env` file is loaded. A set key
    /// with no vault file on disk logs a warning and falls back to the
    /// plain file.
    ///
    /// # Errors
    ///
    /// * `EnvFileNotFound` if the plain-load path finds no `.env` file.
    /// * `InvalidKeyFormat`, `EnvironmentNotFound`, `InvalidKey` and the
    ///   rest of the decryption errors, unchanged from [`core::resolve`].
    /// * `InvalidPlaintext` if the decrypted payload is not UTF-8.
    /// * `Io` if a discovered file cannot be read.
    pub fn load<P: EnvProvider>(&self, provider: &mut P) -> Result<Vec<(String, String)>> {
        let mut raw = provider.get(DOTENV_KEY_VAR).unwrap_or_default();
        let dotenv_key = Zeroizing::new(raw.trim().to_string());
        raw.zeroize();

        if dotenv_key.is_empty() {
            return self.load_plain(provider);
        }

        match self.find_file(VAULT_FILE) {
            Some(path) => self.load_vault(provider, &dotenv_key, &path),
            None => {
                warn!(
                    "DOTENV_KEY is set but no .env.vault file was found; \
                     falling back to the plain .env file"
                );
                self.load_plain(provider)
            }
        }
    }

    /// Like [`Loader::load`], but a missing `.env` file yields an empty
    /// result instead of an error. Every other error still propagates.
    pub fn safe_load<P: EnvProvider>(&self, provider: &mut P) -> Result<Vec<(String, String)>> {
        match self.load(provider) {
            Err(Error::EnvFileNotFound(_)) => Ok(Vec::new()),
            other => other,
        }
    }

    fn load_plain<P: EnvProvider>(&self, provider: &mut P) -> Result<Vec<(String, String)>> {
        let path = self
            .find_file(ENV_FILE)
            .ok_or_else(|| Error::EnvFileNotFound(self.searched_paths()))?;

        debug!(path = %path.display(), "loading plain env file");
        let env = Env::from_file(&path)?;

        Ok(self.merge(provider, &env))
    }

    fn load_vault<P: EnvProvider>(
        &self,
        provider: &mut P,
        dotenv_key: &str,
        path: &Path,
    ) -> Result<Vec<(String, String)>> {
        debug!(path = %path.display(), "loading encrypted vault file");
        let vault = Env::from_file(path)?;

        let plaintext = core::resolve(dotenv_key, &vault)?;
        let decrypted = String::from_utf8(plaintext).map_err(|_| Error::InvalidPlaintext)?;
        let env = Env::parse(&decrypted);

        let applied = self.merge(provider, &env);
        info!(
            path = %path.display(),
            entries = applied.len(),
            "loaded env from encrypted vault"
        );

        Ok(applied)
    }

    fn merge<P: EnvProvider>(&self, provider: &mut P, env: &Env) -> Vec<(String, String)> {
        let mut applied = Vec::new();

        for (name, value) in env.entries() {
            if !self.override_existing && provider.get(name).is_some() {
                debug!(name = %name, "keeping existing variable");
                continue;
            }
            provider.set(name, value);
            applied.push((name.clone(), value.clone()));
        }

        applied
    }

    fn find_file(&self, file_name: &str) -> Option<PathBuf> {
        self.paths
            .iter()
            .map(|dir| dir.join(file_name))
            .find(|path| path.is_file())
    }

    fn searched_paths(&self) -> String {
        self.paths
            .iter()
            .map(|dir| dir.join(ENV_FILE).display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
