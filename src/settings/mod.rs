//! Configuration loading and resolution.
//!
//! `load` is the entry point: it layers configuration files, `MSEL__*`
//! environment variables and CLI flags, then returns a validated
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
