//! Core decryption components.
//!
//! Everything needed to turn a DOTENV_KEY credential and a vault snapshot
//! into plaintext: credential parsing, entry lookup, AEAD decryption, and
//! the rotation loop tying them together. No I/O happens here; vault
//! entries arrive through the injected [`VaultSource`].

pub mod cipher;
pub mod key;
pub mod lookup;
pub mod rotation;
pub mod types;

pub use cipher::decrypt;
pub use key::{parse_dotenv_key, KeyCandidate};
pub use lookup::{entry_name, lookup, VaultSource};
pub use rotation::resolve;
