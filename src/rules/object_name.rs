// object_name.rs - Filename / object name correspondence

use super::traits::ValidationRule;
use crate::data::MergedRecord;

/// Requires the filename to equal the object name up to its first separator
#[derive(Debug, Clone)]
pub struct ObjectNameRule {
    filename_column: String,
    object_name_column: String,
    separator: char,
}

impl ObjectNameRule {
    pub fn new(filename_column: &str, object_name_column: &str, separator: char) -> Self {
        Self {
            filename_column: filename_column.to_string(),
            object_name_column: object_name_column.to_string(),
            separator,
        }
    }

    /// Portion of the object name before the first separator (all of it when absent)
    pub fn prefix<'a>(&self, object_name: &'a str) -> &'a str {
        object_name
            .split(self.separator)
            .next()
            .unwrap_or(object_name)
    }
}

impl ValidationRule for ObjectNameRule {
    fn name(&self) -> &str {
        "object-name"
    }

    fn description(&self) -> String {
        format!(
            "{} must equal the part of {} before the first '{}'",
            self.filename_column, self.object_name_column, self.separator
        )
    }

    fn check(&self, record: &MergedRecord) -> Vec<String> {
        let filename = record.get_or_empty(&self.filename_column).trim();
        let object_name = record.get_or_empty(&self.object_name_column).trim();
        let prefix = self.prefix(object_name);

        if filename == prefix {
            Vec::new()
        } else {
            vec![format!(
                "{} '{}' does not match {} prefix '{}'",
                self.filename_column, filename, self.object_name_column, prefix
            )]
        }
    }
}
