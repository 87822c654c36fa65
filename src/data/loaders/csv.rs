// csv.rs - Loader for the merged delimited file

use crate::data::record::MergedTable;
use crate::error::Result;
use ::csv::ReaderBuilder;
use std::path::Path;

impl MergedTable {
    /// Load a delimited file whose first row is the header.
    ///
    /// Rows may be shorter or longer than the header; they are kept as-is
    /// and resolved by [`crate::data::MergedRecord`].
    pub fn from_csv(file_path: &Path, delimiter: u8) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_path(file_path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut table = MergedTable::new(headers);

        for result in reader.records() {
            let record = result?;
            let values: Vec<&str> = record.iter().collect();
            table.push_row(&values);
        }

        Ok(table)
    }
}
