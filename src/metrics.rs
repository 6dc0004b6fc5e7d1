// Session metrics module
//
// Counts what a prompt session did so it can be summarized in the log on exit

use crate::models::{StrengthRating, UpsertOutcome};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Per-session counters
///
/// Uses atomic counters so a shared reference is enough to record events.
#[derive(Debug)]
pub struct Metrics {
    /// Passwords successfully generated
    pub passwords_generated: AtomicU64,

    /// Generation requests rejected (bad length, no class selected)
    pub generation_failures: AtomicU64,

    /// Ratings handed out, per tier
    pub rated_weak: AtomicU64,
    pub rated_medium: AtomicU64,
    pub rated_strong: AtomicU64,

    /// New platforms added to the store
    pub records_inserted: AtomicU64,

    /// Existing platforms whose password was replaced
    pub records_updated: AtomicU64,

    /// Store reads or writes that failed
    pub store_failures: AtomicU64,

    /// Session start time
    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            passwords_generated: AtomicU64::new(0),
            generation_failures: AtomicU64::new(0),
            rated_weak: AtomicU64::new(0),
            rated_medium: AtomicU64::new(0),
            rated_strong: AtomicU64::new(0),
            records_inserted: AtomicU64::new(0),
            records_updated: AtomicU64::new(0),
            store_failures: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_generated(&self) {
        self.passwords_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_generation_failure(&self) {
        self.generation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rating(&self, rating: StrengthRating) {
        let counter = match rating {
            StrengthRating::Weak => &self.rated_weak,
            StrengthRating::Medium => &self.rated_medium,
            StrengthRating::Strong => &self.rated_strong,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upsert(&self, outcome: UpsertOutcome) {
        let counter = match outcome {
            UpsertOutcome::Inserted => &self.records_inserted,
            UpsertOutcome::Updated => &self.records_updated,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_failure(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Records written this session, inserted or updated
    pub fn records_saved(&self) -> u64 {
        self.records_inserted.load(Ordering::Relaxed) + self.records_updated.load(Ordering::Relaxed)
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Session Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Passwords: {} generated, {} rejected",
            self.passwords_generated.load(Ordering::Relaxed),
            self.generation_failures.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Ratings: {} weak, {} medium, {} strong",
            self.rated_weak.load(Ordering::Relaxed),
            self.rated_medium.load(Ordering::Relaxed),
            self.rated_strong.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Records: {} inserted, {} updated, {} store failures",
            self.records_inserted.load(Ordering::Relaxed),
            self.records_updated.load(Ordering::Relaxed),
            self.store_failures.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
