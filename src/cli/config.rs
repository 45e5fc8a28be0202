// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Run settings
    pub iterations: Option<usize>,

    // Input files, consulted only when none are given on the command line
    pub input_files: Option<Vec<String>>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self {
            iterations: None,
            input_files: None,
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# seqrun.toml - Configuration file for seqrun
# Command line arguments will override these settings

# Number of processing iterations
iterations = 1

# Input files, used when none are given on the command line
# input_files = ["a.fa", "b.fa"]
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = Config::new();
        assert!(config.iterations.is_none());
        assert!(config.input_files.is_none());
    }

    #[test]
    fn test_sample_config_parses() {
        let sample = Config::generate_sample();
        let config: Config = toml::from_str(&sample).unwrap();
        assert_eq!(config.iterations, Some(1));
        // input_files is commented out in the sample
        assert!(config.input_files.is_none());
    }

    #[test]
    fn test_config_from_toml() {
        let config: Config = toml::from_str(
            r#"
            iterations = 8
            input_files = ["x.fa", "y.fa"]
            "#,
        )
        .unwrap();
        assert_eq!(config.iterations, Some(8));
        assert_eq!(
            config.input_files,
            Some(vec!["x.fa".to_string(), "y.fa".to_string()])
        );
    }

    #[test]
    fn test_config_from_missing_file() {
        let result = Config::from_file("/nonexistent/seqrun.toml");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to read config file"));
    }
}
