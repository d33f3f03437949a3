//! Command implementations for the fio CLI
//!
//! Each command has its own module with an `Args` struct and a `run` entry.

pub mod batch;
pub mod config;
pub mod extract;

// Re-export argument types for parser
pub use batch::BatchArgs;
pub use config::{ConfigAction, ConfigArgs};
pub use extract::ExtractArgs;
