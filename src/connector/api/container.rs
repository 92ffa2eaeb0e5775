use std::sync::Arc;

use tracing::debug;

use crate::application::{
    AskDatasetUseCase, DatasetReader, PreviewDatasetUseCase, QueryConfig, DEFAULT_PROMPT_ROWS,
};
use crate::connector::adapter::{CsvDatasetReader, LlmBackend};

pub struct ContainerConfig {
    pub backend: LlmBackend,
    /// Dataset rows embedded in each prompt.
    pub prompt_rows: usize,
    /// Field separator for uploaded CSV files.
    pub delimiter: u8,
}

impl ContainerConfig {
    pub fn new(backend: LlmBackend) -> Self {
        Self {
            backend,
            prompt_rows: DEFAULT_PROMPT_ROWS,
            delimiter: b',',
        }
    }
}

pub struct Container {
    reader: Arc<dyn DatasetReader>,
    query_config: QueryConfig,
    backend_description: String,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let backend_description = config.backend.describe();
        debug!("Using {backend_description}");
        let llm = config.backend.build();
        let query_config = QueryConfig::new(llm).with_prompt_rows(config.prompt_rows);

        Self {
            reader: Arc::new(CsvDatasetReader::new().with_delimiter(config.delimiter)),
            query_config,
            backend_description,
        }
    }

    /// Wire a container around an already-built query configuration,
    /// reading comma-separated uploads.
    pub fn from_query_config(query_config: QueryConfig) -> Self {
        let backend_description = format!("{} model", query_config.llm().backend_type());
        Self {
            reader: Arc::new(CsvDatasetReader::new()),
            query_config,
            backend_description,
        }
    }

    pub fn reader(&self) -> Arc<dyn DatasetReader> {
        self.reader.clone()
    }

    pub fn ask_use_case(&self) -> AskDatasetUseCase {
        AskDatasetUseCase::new(self.query_config.clone())
    }

    pub fn preview_use_case(&self) -> PreviewDatasetUseCase {
        PreviewDatasetUseCase::new(self.reader.clone())
    }

    /// Human-readable description of the language model in use.
    pub fn backend_description(&self) -> &str {
        &self.backend_description
    }

    pub fn backend_type(&self) -> &str {
        self.query_config.llm().backend_type()
    }
}
