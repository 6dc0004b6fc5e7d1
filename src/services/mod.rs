//! Services module - the password core.
//!
//! Everything here is framework-agnostic: no prompts, no terminal output. The
//! presentation layer calls the generator, optionally the evaluator, then the
//! store, in that order.
//!
//! # Components
//!
//! - [`generate`] / [`PasswordGenerator`]: builds one password from a
//!   [`GenerationRequest`](crate::models::GenerationRequest). One seed
//!   character per selected class, uniform fill from the combined alphabet,
//!   optional Fisher-Yates shuffle.
//! - [`evaluate`] / [`score`]: rates a password 0-7 and maps the score to a
//!   [`StrengthRating`](crate::models::StrengthRating).
//! - [`RecordStore`]: upserts platform/password pairs through a
//!   [`StoreBackend`]; [`CsvFileBackend`] for the `Platform,Senha` file and
//!   [`MemoryBackend`] for tests.
//! - [`RandomSource`]: the randomness capability the generator draws from.
//!
//! # Usage Example
//!
//! ```no_run
//! use passforge::models::GenerationRequest;
//! use passforge::services::{evaluate, generate_password, RecordStore};
//!
//! let request = GenerationRequest::new(16).symbols(false);
//! let password = generate_password(&request)?;
//! println!("{} ({})", password, evaluate(&password));
//!
//! let mut store = RecordStore::open("senhas.csv");
//! store.upsert("GitHub", &password)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod generator;
pub mod random;
pub mod store;
pub mod strength;

pub use generator::{GenerationError, PasswordGenerator, generate, generate_password};
pub use random::{RandomSource, RngSource};
pub use store::{CsvFileBackend, MemoryBackend, RecordStore, StoreBackend, StoreError};
pub use strength::{evaluate, score};
