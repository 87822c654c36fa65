// config.rs - Configuration file support

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Run settings loadable from TOML. Validation constants are not configurable here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Input/Output
    pub input_directory: Option<String>,
    pub output: Option<String>,

    // Format
    pub input_delimiter: Option<String>,
    pub output_delimiter: Option<String>,
    pub suffix: Option<String>,

    // Flags
    pub validate_only: Option<bool>,
    pub strict: Option<bool>,
    pub quiet: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("'{}': {}", path.display(), msg)),
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# iptcconcat.toml - Configuration file for iptcconcat
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Directory containing the colon-delimited CSV exports
input_directory = "/path/to/exports"

# Merged output file
output = "concatenated_output.csv"

# =============================================================================
# FORMAT
# =============================================================================

# Field delimiter of the input files
input_delimiter = ":"

# Field delimiter of the merged file
output_delimiter = ","

# File name suffix selecting input files (case-sensitive)
suffix = ".csv"

# =============================================================================
# FLAGS
# =============================================================================

# Validate an existing merged file without merging
validate_only = false

# Exit with status 2 when any row fails validation
strict = false

# Suppress progress messages
quiet = false
"#
        .to_string()
    }
}
