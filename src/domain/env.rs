//! Env type.
//!
//! Represents a parsed block of dotenv text with typed access. Used for two
//! things: the vault snapshot (whose entries are ciphertext blobs) and the
//! decrypted plaintext block, which never touches disk — hence parsing from
//! memory is the primary constructor.

use crate::core::VaultSource;
use crate::error::Result;
use std::path::Path;

/// Ordered KEY=VALUE entries parsed from dotenv-format text.
#[derive(Debug, Clone, Default)]
pub struct Env {
    entries: Vec<(String, String)>,
}

impl Env {
    /// Parse dotenv-format text.
    ///
    /// Skips empty lines and comments (lines starting with #). Supports
    /// values with or without quotes; double-quoted values unescape
    /// `\n`, `\r`, `\"` and `\\`. Lines without an `=` are ignored.
    pub fn parse(contents: &str) -> Self {
        let mut entries = Vec::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((name, value)) = line.split_once('=') {
                let name = name.trim().to_string();
                let value = parse_env_value(value.trim());
                entries.push((name, value));
            }
        }

        Self { entries }
    }

    /// Parse a dotenv file from disk.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::parse(&contents))
    }

    /// Get a value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All entries as name-value pairs
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl VaultSource for Env {
    fn entry(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}

fn parse_env_value(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unescape_double_quoted(&raw[1..raw.len() - 1]);
    }

    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }

    raw.to_string()
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
