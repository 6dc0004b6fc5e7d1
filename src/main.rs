//! Passforge - randomized password generator with a per-platform record store
//!
//! Main entry point for the line-prompt application.
//!
//! # Execution Flow
//!
//! 1. Load settings from `passforge-data/passforge.yaml` (defaults if absent)
//! 2. Initialize logging → `<log_dir>/passforge.<date>`
//! 3. Open the record store (CSV, created on first save)
//! 4. Run the prompt session until the user stops
//! 5. Log the session summary
//!
//! # Configuration Files
//!
//! Expected in `passforge-data/`:
//! - `passforge.yaml`: store path, default prompt answers, logging options

use anyhow::Result;
use passforge::services::PasswordGenerator;
use passforge::ui::PromptController;
use passforge::{APP_NAME, ConfigManager, RecordStore, VERSION};

/// Directory holding `passforge.yaml`, relative to the working directory
const CONFIG_DIR: &str = "passforge-data";

fn main() -> Result<()> {
    let config_manager = ConfigManager::new(CONFIG_DIR)?;
    let config = config_manager.load_config()?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = passforge::logging::setup_logging(&config.logging, APP_NAME)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let store_path = config_manager.store_path(&config);
    let store = RecordStore::open(&store_path);
    tracing::info!("Record store: {}", store_path);

    let mut controller = PromptController::new(
        store,
        PasswordGenerator::new(),
        config.generator.clone(),
        store_path.as_str(),
    );

    let result = controller.run();

    controller.metrics().log_summary();
    tracing::info!("Application shutdown complete");

    result.map_err(|e| {
        tracing::error!("Session error: {}", e);
        e
    })
}
