// User-facing text for the prompt session
//
// Kept free of I/O so the wording can be tested directly.

use crate::models::{StrengthRating, UpsertOutcome};
use crate::services::{GenerationError, StoreError};

pub fn generated(platform: &str, password: &str) -> String {
    format!("Your password for '{}' is: {}", platform, password)
}

pub fn strength(rating: StrengthRating) -> String {
    format!("Strength: {}", rating)
}

pub fn saved(platform: &str, outcome: UpsertOutcome, store: &str) -> String {
    match outcome {
        UpsertOutcome::Inserted => format!("New password for '{}' saved to '{}'.", platform, store),
        UpsertOutcome::Updated => format!("Password for '{}' updated in '{}'.", platform, store),
    }
}

pub fn generation_failed(error: &GenerationError) -> String {
    match error {
        GenerationError::InvalidLength(_) => {
            "The password length must be a positive number.".to_string()
        }
        GenerationError::NoCharacterClassSelected => {
            "Error: no character type selected.".to_string()
        }
    }
}

pub fn store_failed(error: &StoreError) -> String {
    format!("Error saving password: {}", error)
}

pub fn empty_platform() -> String {
    "The platform name cannot be empty.".to_string()
}
