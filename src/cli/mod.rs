// mod.rs - CLI module

pub mod args;
pub mod config;
pub mod merge;
pub mod validation;

// Re-export main types for convenience
pub use args::{Args, DEFAULT_OUTPUT};
pub use config::Config;
pub use validation::{resolve_display_path, validate_args, RunSettings};
