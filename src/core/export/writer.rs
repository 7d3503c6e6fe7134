//! CSV output
//!
//! Projects records onto the selected columns and writes them with a header
//! row. Missing attributes become empty fields.

use crate::core::attributes::AttributeSelection;
use crate::domain::record::DirectoryRecord;
use crate::domain::Result;
use csv::Writer;
use std::fs::File;
use std::path::Path;

/// Resolves the output columns for a set of records
///
/// Explicit columns are used as given (order and duplicates kept). The
/// wildcard expands to the sorted union of attribute names across all
/// records. Names differing only in ASCII case are one column, spelled as
/// first seen.
pub fn resolve_columns(selection: &AttributeSelection, records: &[DirectoryRecord]) -> Vec<String> {
    match selection {
        AttributeSelection::Columns(columns) => columns.clone(),
        AttributeSelection::Wildcard => {
            let mut columns: Vec<String> = Vec::new();
            for name in records.iter().flat_map(|record| record.names()) {
                if !columns.iter().any(|c| c.eq_ignore_ascii_case(name)) {
                    columns.push(name.to_string());
                }
            }
            columns.sort();
            columns
        }
    }
}

/// Projects a record onto `columns`
pub fn project(record: &DirectoryRecord, columns: &[String]) -> Vec<String> {
    columns.iter().map(|column| record.field(column)).collect()
}

/// Writes export rows to a CSV file
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExportWriter;

impl CsvExportWriter {
    /// Creates a writer
    pub fn new() -> Self {
        Self
    }

    /// Writes `records` projected onto `columns` to `path`
    ///
    /// An existing file is truncated. With no columns the file is created
    /// empty. Returns the number of data rows written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written
    pub fn write(
        &self,
        path: &Path,
        records: &[DirectoryRecord],
        columns: &[String],
    ) -> Result<usize> {
        let file = File::create(path)?;
        let mut csv_writer = Writer::from_writer(file);

        if columns.is_empty() {
            csv_writer.flush()?;
            return Ok(0);
        }

        csv_writer.write_record(columns)?;
        for record in records {
            csv_writer.write_record(project(record, columns))?;
        }
        csv_writer.flush()?;

        tracing::debug!(path = %path.display(), rows = records.len(), "CSV written");
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn records() -> Vec<DirectoryRecord> {
        vec![
            DirectoryRecord::new()
                .with("SAMAccountName", "jdoe")
                .with("Description", "Head of sales, EMEA")
                .with("Enabled", true),
            DirectoryRecord::new()
                .with("sAMAccountName", "asmith")
                .with("mail", "asmith@corp.local"),
        ]
    }

    #[test]
    fn test_resolve_explicit_columns() {
        let selection = AttributeSelection::Columns(vec!["Name".into(), "Name".into()]);
        assert_eq!(resolve_columns(&selection, &records()), vec!["Name", "Name"]);
    }

    #[test]
    fn test_resolve_wildcard_columns() {
        let columns = resolve_columns(&AttributeSelection::Wildcard, &records());
        assert_eq!(
            columns,
            vec!["Description", "Enabled", "SAMAccountName", "mail"]
        );
    }

    #[test]
    fn test_wildcard_merges_case_variants_into_one_column() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.csv");
        let columns = resolve_columns(&AttributeSelection::Wildcard, &records());

        CsvExportWriter::new()
            .write(&path, &records(), &columns)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Description,Enabled,SAMAccountName,mail\n\
             \"Head of sales, EMEA\",True,jdoe,\n\
             ,,asmith,asmith@corp.local\n"
        );
    }

    #[test]
    fn test_project_fills_missing_with_empty() {
        let columns = vec!["SAMAccountName".to_string(), "mail".to_string()];
        assert_eq!(project(&records()[0], &columns), vec!["jdoe", ""]);
        assert_eq!(
            project(&records()[1], &columns),
            vec!["asmith", "asmith@corp.local"]
        );
    }

    #[test]
    fn test_write_csv() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.csv");
        let columns = vec![
            "SAMAccountName".to_string(),
            "Description".to_string(),
            "Enabled".to_string(),
        ];

        let written = CsvExportWriter::new()
            .write(&path, &records(), &columns)
            .unwrap();

        assert_eq!(written, 2);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "SAMAccountName,Description,Enabled\njdoe,\"Head of sales, EMEA\",True\nasmith,,\n"
        );
    }

    #[test]
    fn test_write_without_columns_creates_empty_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.csv");

        let written = CsvExportWriter::new().write(&path, &[], &[]).unwrap();

        assert_eq!(written, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("out.csv");
        assert!(CsvExportWriter::new()
            .write(&path, &records(), &["Name".to_string()])
            .is_err());
    }
}
