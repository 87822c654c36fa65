// record.rs - Merged row and table data structures

use std::fmt;

/// Key under which fields beyond the header length are shown
pub const EXTRA_FIELDS_KEY: &str = "_extra";

/// One data row of the merged file, keyed by the merged header.
///
/// Keys keep header order. A key whose column was missing from a short row
/// maps to `None`. Duplicate header names collapse onto the first position
/// with the last value, the way a name→value mapping would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedRecord {
    pub row_number: usize,
    fields: Vec<(String, Option<String>)>,
    extra: Vec<String>,
}

impl MergedRecord {
    /// Build a record from a header and the raw values of one row
    pub fn from_values<S: AsRef<str>>(row_number: usize, headers: &[String], values: &[S]) -> Self {
        let mut fields: Vec<(String, Option<String>)> = Vec::with_capacity(headers.len());

        for (i, name) in headers.iter().enumerate() {
            let value = values.get(i).map(|v| v.as_ref().to_string());
            match fields.iter_mut().find(|(key, _)| key == name) {
                Some(slot) => slot.1 = value,
                None => fields.push((name.clone(), value)),
            }
        }

        let extra = values
            .iter()
            .skip(headers.len())
            .map(|v| v.as_ref().to_string())
            .collect();

        Self {
            row_number,
            fields,
            extra,
        }
    }

    /// Value of a column; `None` when the column is unknown or absent from this row
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Value of a column, with unknown/absent columns read as the empty string
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// All header-keyed fields in header order
    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Values found past the end of the header
    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for MergedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                Some(v) => write!(f, "{:?}: {:?}", key, v)?,
                None => write!(f, "{:?}: None", key)?,
            }
        }
        if !self.extra.is_empty() {
            if !self.fields.is_empty() {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", EXTRA_FIELDS_KEY, self.extra)?;
        }
        write!(f, "}}")
    }
}

/// Parsed merged file: header plus data rows numbered from 1
#[derive(Debug, Clone, Default)]
pub struct MergedTable {
    pub headers: Vec<String>,
    pub records: Vec<MergedRecord>,
}

impl MergedTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            records: Vec::new(),
        }
    }

    /// Append a row, numbering it after the rows already present
    pub fn push_row<S: AsRef<str>>(&mut self, values: &[S]) {
        let row_number = self.records.len() + 1;
        self.records
            .push(MergedRecord::from_values(row_number, &self.headers, values));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_row_reads_as_absent() {
        let record = MergedRecord::from_values(1, &headers(&["Filename", "Size", "Width"]), &["IMG001"]);

        assert_eq!(record.get("Filename"), Some("IMG001"));
        assert_eq!(record.get("Size"), None);
        assert_eq!(record.get_or_empty("Width"), "");
        assert_eq!(record.get("Unknown"), None);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_long_row_keeps_extras() {
        let record = MergedRecord::from_values(4, &headers(&["A", "B"]), &["1", "2", "3"]);

        assert_eq!(record.extra(), &["3".to_string()]);
        assert_eq!(record.to_string(), r#"{"A": "1", "B": "2", "_extra": ["3"]}"#);
    }

    #[test]
    fn test_duplicate_header_last_value_wins() {
        let record = MergedRecord::from_values(1, &headers(&["A", "B", "A"]), &["first", "b", "last"]);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("A"), Some("last"));
        let keys: Vec<&str> = record.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "B"]);
    }

    #[test]
    fn test_display_marks_absent_values() {
        let record = MergedRecord::from_values(1, &headers(&["A", "B"]), &["x"]);
        assert_eq!(record.to_string(), r#"{"A": "x", "B": None}"#);
    }

    #[test]
    fn test_table_numbers_rows_from_one() {
        let mut table = MergedTable::new(headers(&["A"]));
        table.push_row(&["x"]);
        table.push_row(&["y"]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].row_number, 1);
        assert_eq!(table.records[1].row_number, 2);
    }
}
