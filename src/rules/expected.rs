// expected.rs - Exact-match column check

use super::traits::ValidationRule;
use crate::data::MergedRecord;

/// Requires the trimmed value of a column to equal a fixed label
#[derive(Debug, Clone)]
pub struct ExpectedValueRule {
    name: String,
    column: String,
    expected: String,
}

impl ExpectedValueRule {
    pub fn new(name: &str, column: &str, expected: &str) -> Self {
        Self {
            name: name.to_string(),
            column: column.to_string(),
            expected: expected.to_string(),
        }
    }
}

impl ValidationRule for ExpectedValueRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        format!("{} must be '{}'", self.column, self.expected)
    }

    fn check(&self, record: &MergedRecord) -> Vec<String> {
        let actual = record.get_or_empty(&self.column).trim();
        if actual == self.expected {
            Vec::new()
        } else {
            vec![format!(
                "Invalid {}: expected '{}', got '{}'",
                self.column, self.expected, actual
            )]
        }
    }
}
