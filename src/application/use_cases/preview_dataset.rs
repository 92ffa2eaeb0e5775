use std::sync::Arc;

use crate::application::DatasetReader;
use crate::domain::{Dataset, DomainError};

/// Rows shown right after an upload.
pub const PREVIEW_ROWS: usize = 3;

/// A short look at a freshly uploaded dataset.
#[derive(Debug, Clone)]
pub struct DatasetPreview {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub row_count: usize,
}

impl DatasetPreview {
    pub fn of(dataset: &Dataset, rows: usize) -> Self {
        Self {
            name: dataset.name().to_string(),
            columns: dataset.columns().to_vec(),
            rows: dataset.head(rows).to_vec(),
            row_count: dataset.row_count(),
        }
    }
}

/// Use case for parsing an upload and returning its first rows.
pub struct PreviewDatasetUseCase {
    reader: Arc<dyn DatasetReader>,
}

impl PreviewDatasetUseCase {
    pub fn new(reader: Arc<dyn DatasetReader>) -> Self {
        Self { reader }
    }

    pub fn execute(&self, name: &str, data: &[u8]) -> Result<DatasetPreview, DomainError> {
        let dataset = self.reader.read(name, data)?;
        Ok(DatasetPreview::of(&dataset, PREVIEW_ROWS))
    }
}
