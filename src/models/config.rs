use crate::models::GenerationRequest;
use serde::{Deserialize, Serialize};

/// Application settings from passforge.yaml
///
/// Every section falls back to its defaults when absent from the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreSettings,
    pub generator: GeneratorDefaults,
    pub logging: LoggingSettings,
}

/// Where the record store lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: "senhas.csv".to_string(),
        }
    }
}

/// Default answers offered by the prompt session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorDefaults {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub shuffle: bool,

    /// Rate each generated password before saving it
    pub evaluate: bool,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            length: default_length(),
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            shuffle: true,
            evaluate: true,
        }
    }
}

impl GeneratorDefaults {
    /// Request built purely from these defaults
    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length)
            .uppercase(self.uppercase)
            .lowercase(self.lowercase)
            .digits(self.digits)
            .symbols(self.symbols)
            .shuffle(self.shuffle)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub log_dir: String,
    pub debug_mode: bool,
    pub console_output: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            debug_mode: false,
            console_output: false,
        }
    }
}

fn default_length() -> usize {
    16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.store.path, "senhas.csv");
        assert_eq!(config.generator.length, 16);
        assert!(config.generator.evaluate);
        assert_eq!(config.logging.log_dir, "logs");
        assert!(!config.logging.debug_mode);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "generator:\n  length: 24\n  symbols: false\n";
        let config: AppConfig = serde_yaml_ng::from_str(yaml).unwrap();

        assert_eq!(config.generator.length, 24);
        assert!(!config.generator.symbols);
        assert!(config.generator.uppercase);
        assert_eq!(config.store.path, "senhas.csv");
    }

    #[test]
    fn test_defaults_to_request() {
        let defaults = GeneratorDefaults {
            digits: false,
            shuffle: false,
            ..GeneratorDefaults::default()
        };
        let request = defaults.to_request();

        assert_eq!(request.length, 16);
        assert!(!request.digits);
        assert!(!request.shuffle);
        assert!(request.symbols);
    }
}
