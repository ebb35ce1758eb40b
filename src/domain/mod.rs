//! Domain types.

mod env;

pub use env::Env;
