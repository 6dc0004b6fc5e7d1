// Prompt Controller - line-prompt session over the password core
//
// Asks for a platform and generation options, then runs
// generator -> evaluator -> store and prints the result.

use crate::metrics::Metrics;
use crate::models::{GenerationRequest, GeneratorDefaults, StrengthRating, UpsertOutcome};
use crate::services::{
    GenerationError, PasswordGenerator, RandomSource, RecordStore, StoreBackend, StoreError,
    evaluate,
};
use crate::ui::messages;
use anyhow::Result;
use inquire::{Confirm, CustomType, InquireError, Text};

/// What one generate-and-save round produced
#[derive(Debug)]
pub enum RoundOutcome {
    /// Password generated and stored
    Saved {
        password: String,
        rating: Option<StrengthRating>,
        outcome: UpsertOutcome,
    },

    /// Generation rejected the request; nothing was stored
    Rejected(GenerationError),

    /// Password generated but the store could not be written
    StoreFailed {
        password: String,
        rating: Option<StrengthRating>,
        error: StoreError,
    },

    /// Platform was blank after trimming
    EmptyPlatform,
}

/// Interactive session controller
///
/// Owns the store, the generator and the session metrics. The prompting
/// itself lives in [`run`](Self::run); [`process`](Self::process) does the
/// work for one round and is what tests drive.
pub struct PromptController<B, R> {
    store: RecordStore<B>,
    generator: PasswordGenerator<R>,
    defaults: GeneratorDefaults,
    store_label: String,
    metrics: Metrics,
}

impl<B: StoreBackend, R: RandomSource> PromptController<B, R> {
    /// Create a new prompt controller
    ///
    /// # Arguments
    /// * `store` - Record store that receives every generated password
    /// * `generator` - Password generator with its random source
    /// * `defaults` - Default answers offered for each prompt
    /// * `store_label` - How the store is named in messages (usually its path)
    pub fn new(
        store: RecordStore<B>,
        generator: PasswordGenerator<R>,
        defaults: GeneratorDefaults,
        store_label: impl Into<String>,
    ) -> Self {
        Self {
            store,
            generator,
            defaults,
            store_label: store_label.into(),
            metrics: Metrics::new(),
        }
    }

    /// Run one round: generate, optionally rate, then upsert under `platform`
    pub fn process(&mut self, platform: &str, request: &GenerationRequest) -> RoundOutcome {
        let platform = platform.trim();
        if platform.is_empty() {
            return RoundOutcome::EmptyPlatform;
        }

        let password = match self.generator.generate(request) {
            Ok(password) => password,
            Err(error) => {
                tracing::warn!("Generation rejected for '{}': {}", platform, error);
                self.metrics.record_generation_failure();
                return RoundOutcome::Rejected(error);
            }
        };
        self.metrics.record_generated();

        let rating = self.defaults.evaluate.then(|| evaluate(&password));
        if let Some(rating) = rating {
            tracing::info!("Password for '{}' rated {}", platform, rating);
            self.metrics.record_rating(rating);
        }

        match self.store.upsert(platform, &password) {
            Ok(outcome) => {
                self.metrics.record_upsert(outcome);
                RoundOutcome::Saved {
                    password,
                    rating,
                    outcome,
                }
            }
            Err(error) => {
                self.metrics.record_store_failure();
                RoundOutcome::StoreFailed {
                    password,
                    rating,
                    error,
                }
            }
        }
    }

    /// Text to show the user for a round
    pub fn render(&self, platform: &str, outcome: &RoundOutcome) -> Vec<String> {
        let platform = platform.trim();
        match outcome {
            RoundOutcome::Saved {
                password,
                rating,
                outcome,
            } => {
                let mut lines = vec![messages::generated(platform, password)];
                lines.extend(rating.map(messages::strength));
                lines.push(messages::saved(platform, *outcome, &self.store_label));
                lines
            }
            RoundOutcome::StoreFailed {
                password,
                rating,
                error,
            } => {
                let mut lines = vec![messages::generated(platform, password)];
                lines.extend(rating.map(messages::strength));
                lines.push(messages::store_failed(error));
                lines
            }
            RoundOutcome::Rejected(error) => vec![messages::generation_failed(error)],
            RoundOutcome::EmptyPlatform => vec![messages::empty_platform()],
        }
    }

    /// Run the interactive session until the user declines another round
    /// or cancels a prompt (Esc / Ctrl-C).
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Starting prompt session");

        loop {
            match self.prompt_round() {
                Ok(lines) => {
                    for line in lines {
                        println!("{}", line);
                    }
                }
                Err(err) if is_cancellation(&err) => break,
                Err(err) => return Err(err.into()),
            }

            match Confirm::new("Generate another password?")
                .with_default(false)
                .prompt()
            {
                Ok(true) => continue,
                Ok(false) => break,
                Err(err) if is_cancellation(&err) => break,
                Err(err) => return Err(err.into()),
            }
        }

        tracing::info!("Prompt session finished");
        Ok(())
    }

    /// Ask the questions for one round and process the answers
    fn prompt_round(&mut self) -> Result<Vec<String>, InquireError> {
        let platform = Text::new("Which platform is the password for?").prompt()?;

        let length = CustomType::<i64>::new("Password length:")
            .with_default(self.defaults.length as i64)
            .with_error_message("Invalid input. Please enter a whole number for the length.")
            .prompt()?;

        let request = match GenerationRequest::with_signed_length(length) {
            Ok(request) => request,
            Err(error) => {
                tracing::warn!("Rejected length {}", length);
                self.metrics.record_generation_failure();
                return Ok(vec![messages::generation_failed(&error)]);
            }
        };

        let request = request
            .uppercase(ask("Include uppercase letters?", self.defaults.uppercase)?)
            .lowercase(ask("Include lowercase letters?", self.defaults.lowercase)?)
            .digits(ask("Include digits?", self.defaults.digits)?)
            .symbols(ask("Include special characters?", self.defaults.symbols)?)
            .shuffle(ask("Shuffle the password?", self.defaults.shuffle)?);

        let outcome = self.process(&platform, &request);
        Ok(self.render(&platform, &outcome))
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn store_mut(&mut self) -> &mut RecordStore<B> {
        &mut self.store
    }
}

fn ask(question: &str, default: bool) -> Result<bool, InquireError> {
    Confirm::new(question).with_default(default).prompt()
}

fn is_cancellation(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MemoryBackend, RngSource};
    use rand::rngs::StdRng;

    fn controller(evaluate: bool) -> PromptController<MemoryBackend, RngSource<StdRng>> {
        let defaults = GeneratorDefaults {
            evaluate,
            ..GeneratorDefaults::default()
        };
        PromptController::new(
            RecordStore::in_memory(),
            PasswordGenerator::with_source(RngSource::seeded(1)),
            defaults,
            "memory",
        )
    }

    #[test]
    fn test_round_saves_and_rates() {
        let mut controller = controller(true);
        let outcome = controller.process("GitHub", &GenerationRequest::new(16));

        let RoundOutcome::Saved {
            password,
            rating,
            outcome,
        } = outcome
        else {
            panic!("expected a saved round");
        };
        assert_eq!(password.len(), 16);
        assert_eq!(rating, Some(StrengthRating::Strong));
        assert_eq!(outcome, UpsertOutcome::Inserted);

        let stored = controller.store_mut().get("GitHub").unwrap();
        assert_eq!(stored.as_deref(), Some(password.as_str()));
    }

    #[test]
    fn test_second_round_updates() {
        let mut controller = controller(false);
        controller.process("GitHub", &GenerationRequest::new(8));
        let outcome = controller.process("GitHub", &GenerationRequest::new(8));

        assert!(matches!(
            outcome,
            RoundOutcome::Saved {
                rating: None,
                outcome: UpsertOutcome::Updated,
                ..
            }
        ));
        assert_eq!(controller.metrics().records_saved(), 2);
    }

    #[test]
    fn test_platform_is_trimmed() {
        let mut controller = controller(false);
        controller.process("  Mail  ", &GenerationRequest::new(8));

        let records = controller.store_mut().records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].platform, "Mail");
    }

    #[test]
    fn test_rejected_request_is_not_stored() {
        let mut controller = controller(true);
        let request = GenerationRequest::new(8)
            .uppercase(false)
            .lowercase(false)
            .digits(false)
            .symbols(false);

        let outcome = controller.process("GitHub", &request);
        assert!(matches!(
            outcome,
            RoundOutcome::Rejected(GenerationError::NoCharacterClassSelected)
        ));
        assert!(controller.store_mut().records().unwrap().is_empty());

        let lines = controller.render("GitHub", &outcome);
        assert_eq!(lines, vec![messages::generation_failed(&GenerationError::NoCharacterClassSelected)]);
    }

    #[test]
    fn test_empty_platform() {
        let mut controller = controller(true);
        let outcome = controller.process("   ", &GenerationRequest::new(8));

        assert!(matches!(outcome, RoundOutcome::EmptyPlatform));
        assert_eq!(controller.metrics().records_saved(), 0);
    }

    #[test]
    fn test_render_saved_round() {
        let mut controller = controller(true);
        let outcome = controller.process("GitHub", &GenerationRequest::new(4));
        let lines = controller.render("GitHub", &outcome);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Your password for 'GitHub' is: "));
        assert_eq!(lines[1], "Strength: Medium");
        assert!(lines[2].contains("'memory'"));
    }
}
