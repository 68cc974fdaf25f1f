use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/settings.json";

/// Tunables for a run. Fields missing from the settings file keep their
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub user_agent: String,
    /// Request timeout in seconds.
    pub timeout: u64,
    pub concurrent_requests: usize,
    pub output_file: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/120.0 Safari/537.36"
                .to_string(),
            timeout: 15,
            concurrent_requests: 1,
            output_file: "data/sample_output.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Load settings from a JSON file, file values overriding defaults.
pub fn load(path: &Path) -> Result<Settings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Settings file not found at {}", path.display()))?;
    let settings = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let settings: Settings =
            serde_json::from_str(r#"{"timeout": 30, "log_level": "debug"}"#).unwrap();
        assert_eq!(settings.timeout, 30);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.concurrent_requests, 1);
        assert_eq!(settings.output_file, "data/sample_output.json");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load(Path::new("config/definitely-not-here.json")).is_err());
    }
}
