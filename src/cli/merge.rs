// merge.rs - Merge configuration file with CLI arguments

use crate::cli::args::DEFAULT_ITERATIONS;
use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Run settings (only override the default, not an explicit CLI value)
        if self.iterations == DEFAULT_ITERATIONS {
            if let Some(iterations) = config.iterations {
                self.iterations = iterations;
            }
        }

        // Input files from the config are consulted only when the command
        // line named none
        if self.input_files.is_empty() {
            if let Some(files) = config.input_files {
                self.input_files = files;
            }
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_fills_defaults() {
        let args = Args::parse(&["a.fa"]);
        let config = Config {
            iterations: Some(4),
            input_files: None,
        };

        let merged = args.merge_with_config(config);
        assert_eq!(merged.iterations, 4);
        assert_eq!(merged.input_files, vec!["a.fa"]);
    }

    #[test]
    fn test_cli_beats_config() {
        let args = Args::parse(&["-i", "9"]);
        let config = Config {
            iterations: Some(4),
            input_files: Some(vec!["c.fa".to_string()]),
        };

        let merged = args.merge_with_config(config);
        assert_eq!(merged.iterations, 9);
        // No CLI files, so the config list applies
        assert_eq!(merged.input_files, vec!["c.fa"]);
        assert_eq!(merged.file_count(), 1);
    }

    #[test]
    fn test_cli_files_beat_config_files() {
        let args = Args::parse(&["a.fa", "b.fa"]);
        let config = Config {
            iterations: None,
            input_files: Some(vec!["c.fa".to_string()]),
        };

        let merged = args.merge_with_config(config);
        assert_eq!(merged.input_files, vec!["a.fa", "b.fa"]);
    }

    #[test]
    fn test_empty_config_changes_nothing() {
        let args = Args::parse(&["-i", "5", "a.fa"]);
        let merged = args.clone().merge_with_config(Config::new());
        assert_eq!(merged, args);
    }
}
