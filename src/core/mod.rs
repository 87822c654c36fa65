// mod.rs - Core pipeline module

pub mod merger;
pub mod validator;

// Re-export main types for convenience
pub use merger::{list_input_files, merge, merge_with_options, MergeOptions, MergeSummary};
pub use validator::{validate, RowReport, ValidationSummary, Validator};
