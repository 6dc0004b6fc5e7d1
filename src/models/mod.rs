//! Data models for Passforge.
//!
//! - [`GenerationRequest`] / [`CharacterClass`]: what the generator is asked to produce
//! - [`StrengthRating`]: three-tier verdict of the strength evaluator
//! - [`Record`] / [`RecordTable`] / [`UpsertOutcome`]: the platform -> password table
//! - [`AppConfig`]: settings loaded from `passforge.yaml`
//!
//! All types are plain values. Config and record types derive
//! `Serialize`/`Deserialize` for YAML and CSV persistence.

pub mod config;
pub mod rating;
pub mod record;
pub mod request;

pub use config::{AppConfig, GeneratorDefaults, LoggingSettings, StoreSettings};
pub use rating::StrengthRating;
pub use record::{Record, RecordTable, UpsertOutcome};
pub use request::{CharacterClass, GenerationRequest};
