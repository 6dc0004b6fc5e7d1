// Passforge - randomized password generator with a per-platform record store
//
// This is the library crate containing the password core and its supporting
// layers. The binary crate (main.rs) provides the line-prompt entry point.

pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use models::{AppConfig, GenerationRequest, Record, StrengthRating, UpsertOutcome};
pub use services::{
    GenerationError, RecordStore, StoreError, evaluate, generate, generate_password,
};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
