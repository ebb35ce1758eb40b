//! Dotvault - Decrypt and load encrypted .env.vault files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── core/             # Decryption core (pure, no I/O)
//! │   ├── key           # DOTENV_KEY credential parsing
//! │   ├── lookup        # DOTENV_VAULT_* entry lookup
//! │   ├── cipher        # AES-256-GCM payload decryption
//! │   ├── rotation      # First-success-wins key rotation
//! │   └── types         # Semantic type aliases
//! ├── domain/           # Domain types
//! │   └── env           # Parsed dotenv text with typed access
//! ├── provider          # Process / in-memory environment abstraction
//! ├── loader            # .env / .env.vault boot sequence
//! └── error             # Error enum and Result alias
//! ```
//!
//! # Features
//!
//! - AES-256-GCM authenticated decryption of vault payloads
//! - Multi-key DOTENV_KEY credentials tried in order (key rotation)
//! - Plain .env fallback when no key is configured
//! - Injected vault and environment sources, no hidden global state
//! - Key material zeroized on drop, redacted from debug output

pub mod core;
pub mod domain;
pub mod error;
pub mod loader;
pub mod provider;

pub use crate::core::{decrypt, parse_dotenv_key, resolve, KeyCandidate, VaultSource};
pub use crate::domain::Env;
pub use crate::error::{Error, Result};
pub use crate::loader::Loader;
pub use crate::provider::{EnvProvider, MemoryEnv, ProcessEnv};
