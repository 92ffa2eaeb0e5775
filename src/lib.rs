pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    AskDatasetUseCase, DatasetPreview, DatasetReader, LanguageModel, PreviewDatasetUseCase,
    QueryConfig,
};

pub use cli::Commands;

pub use connector::{
    Container, ContainerConfig, CsvDatasetReader, LlmBackend, MockLanguageModel, OllamaClient,
    OllamaConfig,
};

pub use domain::{
    Answer, Dataset, DatasetQueryPrompt, DomainError, Prompt, QueryContext, TextPrompt,
};
