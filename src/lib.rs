//! app-smoke - boot smoke test for the app.
//!
//! Runs a fixed, fail-fast sequence of checks ending with "the server module
//! loads and exports a keyed record", and reports the result on the console
//! and through the process exit status.

pub mod config;
pub mod error;
pub mod modules;
pub mod runner;
pub mod suite;
pub mod utils;

pub use error::{ModuleLoadError, Result, SmokeError};
pub use runner::{Outcome, Reporter, Runner};
