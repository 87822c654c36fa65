// mod.rs - Data structures module

pub mod loaders;
pub mod record;

// Re-export main types for convenience
pub use record::{MergedRecord, MergedTable, EXTRA_FIELDS_KEY};
