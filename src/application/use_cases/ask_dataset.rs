use std::sync::Arc;

use tracing::{debug, info};

use crate::application::LanguageModel;
use crate::domain::{Answer, Dataset, DatasetQueryPrompt, DomainError, QueryContext};

/// Rows of the dataset embedded in the prompt unless configured otherwise.
pub const DEFAULT_PROMPT_ROWS: usize = 50;

/// Query settings shared by every question in a session.
///
/// Built once at startup and passed explicitly to whoever runs queries.
#[derive(Clone)]
pub struct QueryConfig {
    llm: Arc<dyn LanguageModel>,
    prompt_rows: usize,
}

impl QueryConfig {
    pub fn new(llm: Arc<dyn LanguageModel>) -> Self {
        Self {
            llm,
            prompt_rows: DEFAULT_PROMPT_ROWS,
        }
    }

    pub fn with_prompt_rows(mut self, rows: usize) -> Self {
        // Always show the model at least one row
        self.prompt_rows = rows.max(1);
        self
    }

    pub fn llm(&self) -> &Arc<dyn LanguageModel> {
        &self.llm
    }

    pub fn prompt_rows(&self) -> usize {
        self.prompt_rows
    }
}

/// Use case for answering a natural-language question about a dataset.
pub struct AskDatasetUseCase {
    config: QueryConfig,
}

impl AskDatasetUseCase {
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    pub async fn execute(&self, dataset: &Dataset, question: &str) -> Result<Answer, DomainError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::invalid_input("question must not be empty"));
        }

        let llm = self.config.llm();
        let prompt = DatasetQueryPrompt::new(dataset, question, self.config.prompt_rows())?;
        let context = QueryContext::for_dataset(dataset);

        info!(
            "Asking {} about {} ({})",
            llm.backend_type(),
            dataset.name(),
            dataset.shape_line()
        );
        if prompt.is_truncated() {
            debug!(
                "Prompt includes the first {} of {} rows",
                self.config.prompt_rows(),
                dataset.row_count()
            );
        }

        let text = llm.generate(&prompt, Some(&context)).await?;

        Ok(Answer::new(question, text, llm.backend_type()))
    }
}
