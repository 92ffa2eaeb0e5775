use super::Dataset;

/// Per-query session data handed to a language model alongside the prompt.
///
/// Backends may ignore it; the Ollama adapter does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    dataset_name: String,
    row_count: usize,
    column_count: usize,
}

impl QueryContext {
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self {
            dataset_name: dataset.name().to_string(),
            row_count: dataset.row_count(),
            column_count: dataset.column_count(),
        }
    }

    pub fn dataset_name(&self) -> &str {
        &self.dataset_name
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }
}

/// The model's reply to a question about a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    question: String,
    text: String,
    backend: String,
}

impl Answer {
    pub fn new(
        question: impl Into<String>,
        text: impl Into<String>,
        backend: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            text: text.into(),
            backend: backend.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
