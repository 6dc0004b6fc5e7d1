// UI module - line-prompt presentation shell
//
// This module contains:
// - PromptController: asks the questions and drives generator -> evaluator -> store
// - messages: the text shown for each result

pub mod messages;
pub mod prompt;

pub use prompt::{PromptController, RoundOutcome};
