use csv::{QuoteStyle, WriterBuilder};

use crate::domain::DomainError;

/// Tabular data loaded from a CSV upload.
///
/// Cells are kept as raw strings; the model receives them verbatim and no
/// type inference is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset, rejecting a header-less table and ragged rows.
    pub fn new(
        name: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    ) -> Result<Self, DomainError> {
        if columns.is_empty() {
            return Err(DomainError::dataset("dataset has no columns"));
        }

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(DomainError::dataset(format!(
                "row {} has {} fields, expected {}",
                index + 1,
                row.len(),
                columns.len()
            )));
        }

        Ok(Self {
            name: name.into(),
            columns,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` rows (fewer when the dataset is shorter).
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Header plus the first `n` rows rendered back to CSV text.
    ///
    /// Fields are quoted only when needed, so a lone empty cell is written as
    /// `""` and still counts as a row when read back.
    pub fn to_csv_preview(&self, n: usize) -> Result<String, DomainError> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .from_writer(Vec::new());

        writer
            .write_record(&self.columns)
            .map_err(|e| DomainError::dataset(format!("{}: {e}", self.name)))?;
        for row in self.head(n) {
            writer
                .write_record(row)
                .map_err(|e| DomainError::dataset(format!("{}: {e}", self.name)))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| DomainError::internal(format!("flushing CSV excerpt: {e}")))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| DomainError::internal(format!("CSV excerpt is not UTF-8: {e}")))?;

        Ok(text.strip_suffix('\n').unwrap_or(&text).to_string())
    }

    pub fn shape_line(&self) -> String {
        format!("{} rows x {} columns", self.row_count(), self.column_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn sample() -> Dataset {
        Dataset::new(
            "sales.csv",
            strings(&["region", "revenue"]),
            vec![
                strings(&["north", "100"]),
                strings(&["south", "250"]),
                strings(&["east", "75"]),
                strings(&["west", "180"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_header() {
        let err = Dataset::new("empty.csv", vec![], vec![]).unwrap_err();
        assert!(err.is_dataset_error());
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Dataset::new(
            "bad.csv",
            strings(&["a", "b"]),
            vec![strings(&["1", "2"]), strings(&["3"])],
        )
        .unwrap_err();
        assert!(err.to_string().contains("row 2 has 1 fields, expected 2"));
    }

    #[test]
    fn head_is_clamped_to_row_count() {
        let dataset = sample();
        assert_eq!(dataset.head(3).len(), 3);
        assert_eq!(dataset.head(10).len(), 4);
        assert_eq!(dataset.head(0).len(), 0);
    }

    #[test]
    fn csv_preview_includes_header_and_requested_rows() {
        let preview = sample().to_csv_preview(2).unwrap();
        assert_eq!(preview, "region,revenue\nnorth,100\nsouth,250");
    }

    #[test]
    fn csv_preview_quotes_special_characters() {
        let dataset = Dataset::new(
            "quotes.csv",
            strings(&["name", "note"]),
            vec![strings(&["Smith, J", "said \"hi\""])],
        )
        .unwrap();
        assert_eq!(
            dataset.to_csv_preview(1).unwrap(),
            "name,note\n\"Smith, J\",\"said \"\"hi\"\"\""
        );
    }

    #[test]
    fn csv_preview_keeps_empty_cells_as_rows() {
        use crate::application::DatasetReader;
        use crate::connector::CsvDatasetReader;

        let dataset = Dataset::new(
            "single.csv",
            strings(&["a"]),
            vec![strings(&[""]), strings(&["1"])],
        )
        .unwrap();

        let preview = dataset.to_csv_preview(2).unwrap();
        assert_eq!(preview, "a\n\"\"\n1");

        let reread = CsvDatasetReader::new()
            .read("single.csv", preview.as_bytes())
            .unwrap();
        assert_eq!(reread.row_count(), 2);
        assert_eq!(reread, dataset);
    }

    #[test]
    fn shape_line_reports_dimensions() {
        assert_eq!(sample().shape_line(), "4 rows x 2 columns");
    }
}
