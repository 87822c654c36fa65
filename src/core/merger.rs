// merger.rs - Concatenate a directory of delimited files into one

use crate::error::{Error, Result};
use crate::output::ensure_parent_dir;
use ::csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Delimiters and file selection used by [`merge_with_options`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub input_delimiter: u8,
    pub output_delimiter: u8,
    /// Case-sensitive file name suffix, including the dot
    pub suffix: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            input_delimiter: b':',
            output_delimiter: b',',
            suffix: ".csv".to_string(),
        }
    }
}

/// What a merge produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Header captured from the first file, empty when no file matched
    pub header: Vec<String>,
    /// Files merged, in processing order
    pub files: Vec<PathBuf>,
    /// Data rows written (headers excluded)
    pub rows_written: usize,
    /// Files whose header differs from the captured one; their rows are still merged
    pub header_mismatches: Vec<PathBuf>,
    /// Matching entries skipped because they are the output file itself
    pub skipped: Vec<PathBuf>,
}

/// Entries directly inside `input_directory` whose name ends with `suffix`,
/// in directory listing order
pub fn list_input_files(input_directory: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(input_directory)? {
        let entry = entry?;
        if has_suffix(&entry.file_name().to_string_lossy(), suffix) {
            files.push(entry.path());
        }
    }

    Ok(files)
}

/// A name equal to the suffix (the dotfile `.csv`) has no stem and does not match
fn has_suffix(name: &str, suffix: &str) -> bool {
    name.len() > suffix.len() && name.ends_with(suffix)
}

/// Merge every `.csv` file of `input_directory` from `:` to `,` delimiters
pub fn merge(input_directory: &Path, output_file: &Path) -> Result<MergeSummary> {
    merge_with_options(input_directory, output_file, &MergeOptions::default())
}

/// Merge with explicit delimiters.
///
/// Only the first file's header is written; every other header row is
/// consumed and dropped. The output file is truncated before writing. A file
/// with no header row aborts the merge with [`Error::EmptyInput`].
pub fn merge_with_options(
    input_directory: &Path,
    output_file: &Path,
    options: &MergeOptions,
) -> Result<MergeSummary> {
    let mut summary = MergeSummary::default();

    // Listing happens before the output is created
    let output_identity = fs::canonicalize(output_file).ok();
    let mut files = Vec::new();
    for path in list_input_files(input_directory, &options.suffix)? {
        if output_identity.is_some() && fs::canonicalize(&path).ok() == output_identity {
            summary.skipped.push(path);
        } else {
            files.push(path);
        }
    }

    ensure_parent_dir(output_file)?;
    let mut writer = WriterBuilder::new()
        .delimiter(options.output_delimiter)
        .terminator(Terminator::CRLF)
        .flexible(true)
        .from_path(output_file)?;

    let mut header: Option<StringRecord> = None;

    for path in files {
        let mut reader = ReaderBuilder::new()
            .delimiter(options.input_delimiter)
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;
        let mut records = reader.records();

        let file_header = match records.next() {
            Some(record) => record?,
            None => return Err(Error::EmptyInput(path)),
        };

        match &header {
            None => {
                writer.write_record(&file_header)?;
                header = Some(file_header);
            }
            Some(captured) if *captured != file_header => {
                summary.header_mismatches.push(path.clone());
            }
            Some(_) => {}
        }

        for record in records {
            writer.write_record(&record?)?;
            summary.rows_written += 1;
        }

        summary.files.push(path);
    }

    writer.flush()?;

    summary.header = header
        .map(|h| h.iter().map(str::to_string).collect())
        .unwrap_or_default();

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Filename:Size:Width";

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_single_header_and_all_rows() {
        let input = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        write(input.path(), "a.csv", &format!("{HEADER}\nIMG001:3 Mio:3200 DPI\nIMG002:2 Mio:3200 DPI\n"));
        write(input.path(), "b.csv", &format!("{HEADER}\nIMG003:4 Mio:3200 DPI\n"));
        let output = out_dir.path().join("out.csv");

        let summary = merge(input.path(), &output).unwrap();

        assert_eq!(summary.files.len(), 2);
        assert_eq!(summary.rows_written, 3);
        assert_eq!(summary.header, vec!["Filename", "Size", "Width"]);
        assert!(summary.header_mismatches.is_empty());

        let merged = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = merged.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Filename,Size,Width");
        assert_eq!(lines.iter().filter(|l| l.starts_with("Filename")).count(), 1);
        assert!(merged.ends_with("\r\n"));
    }

    #[test]
    fn test_only_suffix_matches_are_selected() {
        let input = tempfile::tempdir().unwrap();
        write(input.path(), "a.csv", &format!("{HEADER}\nIMG001:3 Mio:3200 DPI\n"));
        write(input.path(), "b.CSV", &format!("{HEADER}\nIMG002:3 Mio:3200 DPI\n"));
        write(input.path(), "notes.txt", "not a csv");
        fs::create_dir(input.path().join("nested")).unwrap();
        write(&input.path().join("nested"), "c.csv", &format!("{HEADER}\nIMG003:3 Mio:3200 DPI\n"));

        let files = list_input_files(input.path(), ".csv").unwrap();
        assert_eq!(files, vec![input.path().join("a.csv")]);
    }

    #[test]
    fn test_bare_suffix_dotfile_is_not_selected() {
        let input = tempfile::tempdir().unwrap();
        write(input.path(), ".csv", &format!("{HEADER}\nIMG000:3 Mio:3200 DPI\n"));
        write(input.path(), "x.csv", &format!("{HEADER}\nIMG001:3 Mio:3200 DPI\n"));
        write(input.path(), "..csv", &format!("{HEADER}\nIMG002:3 Mio:3200 DPI\n"));

        let mut files = list_input_files(input.path(), ".csv").unwrap();
        files.sort();

        assert_eq!(files, vec![input.path().join("..csv"), input.path().join("x.csv")]);
        assert!(!has_suffix(".csv", ".csv"));
        assert!(has_suffix("a.csv", ".csv"));
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let input = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        write(input.path(), "a.csv", "Filename:\"IPTC:Sup.\"\nIMG001:Paris, France\n");
        let output = out_dir.path().join("out.csv");

        merge(input.path(), &output).unwrap();

        let merged = fs::read_to_string(&output).unwrap();
        assert_eq!(merged, "Filename,IPTC:Sup.\r\nIMG001,\"Paris, France\"\r\n");
    }

    #[test]
    fn test_empty_input_file_aborts() {
        let input = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let empty = write(input.path(), "empty.csv", "");

        let result = merge(input.path(), &out_dir.path().join("out.csv"));

        match result {
            Err(Error::EmptyInput(path)) => assert_eq!(path, empty),
            other => panic!("expected EmptyInput, got {:?}", other),
        }
    }

    #[test]
    fn test_header_mismatch_is_reported_not_rejected() {
        let input = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        write(input.path(), "a.csv", "A:B\n1:2\n");
        write(input.path(), "b.csv", "B:A\n3:4\n");

        let summary = merge(input.path(), &out_dir.path().join("out.csv")).unwrap();

        assert_eq!(summary.rows_written, 2);
        assert_eq!(summary.header_mismatches.len(), 1);
    }

    #[test]
    fn test_existing_output_is_overwritten() {
        let input = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        write(input.path(), "a.csv", "A:B\n1:2\n");
        let output = write(out_dir.path(), "out.csv", "stale,content\nx,y\nz,w\n");

        merge(input.path(), &output).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "A,B\r\n1,2\r\n");
    }

    #[test]
    fn test_output_inside_input_directory_is_skipped() {
        let input = tempfile::tempdir().unwrap();
        write(input.path(), "a.csv", "A:B\n1:2\n");
        let output = write(input.path(), "merged.csv", "A,B\r\n1,2\r\n");

        let summary = merge(input.path(), &output).unwrap();

        assert_eq!(summary.skipped, vec![output.clone()]);
        assert_eq!(summary.files, vec![input.path().join("a.csv")]);
        assert_eq!(fs::read_to_string(&output).unwrap(), "A,B\r\n1,2\r\n");
    }

    #[test]
    fn test_no_matching_files_writes_empty_output() {
        let input = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let output = out_dir.path().join("out.csv");

        let summary = merge(input.path(), &output).unwrap();

        assert!(summary.header.is_empty());
        assert_eq!(summary.rows_written, 0);
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let out_dir = tempfile::tempdir().unwrap();
        let result = merge(&out_dir.path().join("absent"), &out_dir.path().join("out.csv"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
