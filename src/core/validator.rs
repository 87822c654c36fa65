// validator.rs - Apply the rule set to every row of a merged file

use crate::data::{MergedRecord, MergedTable};
use crate::error::Result;
use crate::output::write_report;
use crate::rules::{RuleSet, ValidationConfig};
use std::io::Write;
use std::path::Path;

/// Errors found on one row
#[derive(Debug, Clone, PartialEq)]
pub struct RowReport<'a> {
    pub record: &'a MergedRecord,
    pub errors: Vec<String>,
}

impl RowReport<'_> {
    pub fn row_number(&self) -> usize {
        self.record.row_number
    }
}

/// Counters for one validation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub rows_checked: usize,
    pub rows_with_errors: usize,
    pub total_errors: usize,
}

impl ValidationSummary {
    pub fn is_clean(&self) -> bool {
        self.rows_with_errors == 0
    }
}

#[derive(Debug)]
pub struct Validator {
    rules: RuleSet,
    delimiter: u8,
}

impl Validator {
    /// Standard rules built from `config`, reading `,`-delimited files
    pub fn new(config: &ValidationConfig) -> Self {
        Self::with_rules(RuleSet::from_config(config))
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluate every rule on one record
    pub fn check_record<'a>(&self, record: &'a MergedRecord) -> RowReport<'a> {
        RowReport {
            record,
            errors: self.rules.evaluate(record),
        }
    }

    /// Reports for the rows that have at least one error, in row order
    pub fn check_table<'a>(&self, table: &'a MergedTable) -> Vec<RowReport<'a>> {
        table
            .records
            .iter()
            .map(|record| self.check_record(record))
            .filter(|report| !report.errors.is_empty())
            .collect()
    }

    /// Load `file`, validate it and render the report to `out`.
    ///
    /// Only I/O and CSV failures are returned as errors; rule violations are
    /// written to `out` and counted in the summary.
    pub fn validate_file<W: Write>(&self, file: &Path, out: &mut W) -> Result<ValidationSummary> {
        let table = MergedTable::from_csv(file, self.delimiter)?;
        let reports = self.check_table(&table);

        write_report(out, &reports)?;
        out.flush()?;

        Ok(ValidationSummary {
            rows_checked: table.len(),
            rows_with_errors: reports.len(),
            total_errors: reports.iter().map(|r| r.errors.len()).sum(),
        })
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

/// Validate `file` with the standard rules and print the report to stdout
pub fn validate(file: &Path) -> Result<ValidationSummary> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    Validator::default().validate_file(file, &mut handle)
}
