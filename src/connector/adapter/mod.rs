mod csv_dataset_reader;
mod llm_backend;
mod mock_language_model;
mod ollama_client;

pub use csv_dataset_reader::*;
pub use llm_backend::*;
pub use mock_language_model::*;
pub use ollama_client::*;
