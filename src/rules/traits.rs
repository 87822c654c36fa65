// traits.rs - Core trait for row validation rules

use crate::data::MergedRecord;
use std::fmt::Debug;

/// A single check applied to every merged row.
///
/// Rules only observe the record. Each returns the error messages it found,
/// usually zero or one.
pub trait ValidationRule: Send + Sync + Debug {
    /// Short identifier, unique within a rule set
    fn name(&self) -> &str;

    /// Human-readable summary including the expected values
    fn description(&self) -> String;

    /// Check one record
    fn check(&self, record: &MergedRecord) -> Vec<String>;
}
