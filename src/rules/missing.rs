// missing.rs - Empty field detection

use super::traits::ValidationRule;
use crate::data::MergedRecord;

pub const MISSING_DATA: &str = "Missing data";

/// Flags every empty or absent field of the row, one message each
#[derive(Debug, Clone, Default)]
pub struct MissingDataRule;

impl ValidationRule for MissingDataRule {
    fn name(&self) -> &str {
        "missing-data"
    }

    fn description(&self) -> String {
        "Every field must be non-empty".to_string()
    }

    fn check(&self, record: &MergedRecord) -> Vec<String> {
        record
            .fields()
            .filter(|(_, value)| value.map_or(true, str::is_empty))
            .map(|_| MISSING_DATA.to_string())
            .collect()
    }
}
