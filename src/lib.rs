// lib.rs - iptcconcat library root

//! # iptcconcat - Merge and validate IPTC metadata exports
//!
//! Photo-archive exports arrive as many colon-delimited CSV files sharing one
//! header. This library concatenates them into a single comma-delimited file
//! and checks every merged row against the archive's business rules.
//!
//! ## Pipeline
//!
//! - **Merge**: every `.csv` entry of a directory, first header only
//! - **Validate**: six checks per row (missing data, size range, resolution
//!   label, filename/object name, category, source)
//! - **Report**: one block per failing row, nothing for clean rows
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use iptcconcat::prelude::*;
//! use std::path::Path;
//!
//! let output = Path::new("concatenated_output.csv");
//! let merged = merge(Path::new("exports"), output)?;
//! println!("{} rows merged", merged.rows_written);
//!
//! let summary = validate(output)?;
//! println!("{} rows with errors", summary.rows_with_errors);
//! # Ok::<(), iptcconcat::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;
pub mod rules;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, Config, RunSettings};
    pub use crate::core::{merge, merge_with_options, validate, MergeOptions, MergeSummary};
    pub use crate::core::{RowReport, ValidationSummary, Validator};
    pub use crate::data::{MergedRecord, MergedTable};
    pub use crate::error::{Error, Result};
    pub use crate::rules::{RuleSet, ValidationConfig, ValidationRule};
}

// Re-export main types at the root level for convenience
pub use crate::core::{merge, validate, MergeSummary, ValidationSummary, Validator};
pub use crate::error::{Error, Result};
pub use crate::rules::{RuleSet, ValidationConfig, ValidationRule};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "iptcconcat v{} - IPTC export concatenation and validation",
        VERSION
    )
}
