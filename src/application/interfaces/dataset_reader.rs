use std::path::Path;

use crate::domain::{Dataset, DomainError};

/// Turns uploaded bytes into a [`Dataset`].
pub trait DatasetReader: Send + Sync {
    /// Parse `data` into a dataset labelled `name`.
    fn read(&self, name: &str, data: &[u8]) -> Result<Dataset, DomainError>;

    /// Read and parse a file, using its file name as the dataset name.
    fn read_path(&self, path: &Path) -> Result<Dataset, DomainError> {
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        self.read(&name, &data)
    }
}
