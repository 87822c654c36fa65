// size_range.rs - File size bounds check

use super::traits::ValidationRule;
use crate::data::MergedRecord;

pub const INVALID_SIZE: &str = "Invalid Size value";

/// Parses the size column (e.g. `"3.2 Mio"`) and checks it against inclusive bounds
#[derive(Debug, Clone)]
pub struct SizeRangeRule {
    column: String,
    unit: String,
    min: f64,
    max: f64,
}

impl SizeRangeRule {
    pub fn new(column: &str, unit: &str, min: f64, max: f64) -> Self {
        Self {
            column: column.to_string(),
            unit: unit.to_string(),
            min,
            max,
        }
    }

    /// Strip the unit suffix and surrounding whitespace, then parse
    pub fn parse_size(&self, raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        let number = trimmed.strip_suffix(self.unit.as_str()).unwrap_or(trimmed);
        number.trim().parse::<f64>().ok()
    }
}

impl ValidationRule for SizeRangeRule {
    fn name(&self) -> &str {
        "size-range"
    }

    fn description(&self) -> String {
        format!(
            "{} must be between {} and {}{} inclusive",
            self.column, self.min, self.max, self.unit
        )
    }

    fn check(&self, record: &MergedRecord) -> Vec<String> {
        let raw = record.get_or_empty(&self.column);

        match self.parse_size(raw) {
            None => vec![INVALID_SIZE.to_string()],
            // NaN fails the range test as well
            Some(size) if !(self.min..=self.max).contains(&size) => vec![format!(
                "{} {}{} is out of range ({} - {}{})",
                self.column, size, self.unit, self.min, self.max, self.unit
            )],
            Some(_) => Vec::new(),
        }
    }
}
