use csv::{ReaderBuilder, Trim};

use crate::application::DatasetReader;
use crate::domain::{Dataset, DomainError};

/// [`DatasetReader`] for comma-separated files whose first record is the header.
pub struct CsvDatasetReader {
    delimiter: u8,
}

impl CsvDatasetReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for CsvDatasetReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetReader for CsvDatasetReader {
    fn read(&self, name: &str, data: &[u8]) -> Result<Dataset, DomainError> {
        if data.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(DomainError::dataset(format!("{name} is empty")));
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .trim(Trim::Headers)
            .from_reader(data);

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| DomainError::dataset(format!("{name}: invalid header: {e}")))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            // The csv reader rejects ragged records itself and reports the line.
            let record = record.map_err(|e| DomainError::dataset(format!("{name}: {e}")))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Dataset::new(name, columns, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_header_and_rows() {
        let reader = CsvDatasetReader::new();
        let dataset = reader
            .read("cities.csv", b" city , population\nParis,2100000\n\"Rio, BR\",6700000\n")
            .unwrap();

        assert_eq!(dataset.name(), "cities.csv");
        assert_eq!(dataset.columns(), ["city", "population"]);
        assert_eq!(dataset.row_count(), 2);
        assert_eq!(dataset.rows()[1][0], "Rio, BR");
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let dataset = CsvDatasetReader::new().read("h.csv", b"a,b\n").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.column_count(), 2);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = CsvDatasetReader::new().read("e.csv", b"  \n").unwrap_err();
        assert!(err.is_dataset_error());
        assert!(err.to_string().contains("e.csv is empty"));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = CsvDatasetReader::new()
            .read("r.csv", b"a,b\n1,2\n3\n")
            .unwrap_err();
        assert!(err.is_dataset_error());
    }

    #[test]
    fn custom_delimiter() {
        let dataset = CsvDatasetReader::new()
            .with_delimiter(b';')
            .read("semi.csv", b"a;b\n1;2\n")
            .unwrap();
        assert_eq!(dataset.rows()[0], ["1", "2"]);
    }

    #[test]
    fn read_path_uses_file_name() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "x,y\n1,2").unwrap();

        let dataset = CsvDatasetReader::new().read_path(file.path()).unwrap();

        let expected = file.path().file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(dataset.name(), expected);
        assert_eq!(dataset.row_count(), 1);
    }

    #[test]
    fn read_path_reports_missing_file() {
        let err = CsvDatasetReader::new()
            .read_path(std::path::Path::new("/definitely/not/here.csv"))
            .unwrap_err();
        assert!(matches!(err, DomainError::IoError(_)));
    }
}
