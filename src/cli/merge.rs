// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::error::Result;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.input_directory.is_none() {
            self.input_directory = config.input_directory;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Format
        if self.input_delimiter.is_none() {
            self.input_delimiter = config.input_delimiter;
        }
        if self.output_delimiter.is_none() {
            self.output_delimiter = config.output_delimiter;
        }
        if self.suffix.is_none() {
            self.suffix = config.suffix;
        }

        // Flags (CLI switches win, config only turns them on)
        if !self.validate_only && config.validate_only.unwrap_or(false) {
            self.validate_only = true;
        }
        if !self.strict && config.strict.unwrap_or(false) {
            self.strict = true;
        }
        if !self.quiet && config.quiet.unwrap_or(false) {
            self.quiet = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
