use super::Dataset;
use crate::domain::DomainError;

/// Anything that can be turned into the plain-text instruction sent to a model.
///
/// Language model backends depend only on this capability, never on a concrete
/// prompt type.
pub trait Prompt: Send + Sync {
    fn render(&self) -> String;
}

impl Prompt for String {
    fn render(&self) -> String {
        self.clone()
    }
}

/// A prompt that is already fully rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPrompt(String);

impl TextPrompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Prompt for TextPrompt {
    fn render(&self) -> String {
        self.0.clone()
    }
}

/// A question about a dataset, rendered together with a CSV excerpt of the data.
#[derive(Debug, Clone)]
pub struct DatasetQueryPrompt {
    dataset_name: String,
    row_count: usize,
    column_count: usize,
    columns: Vec<String>,
    shown_rows: usize,
    excerpt: String,
    question: String,
}

impl DatasetQueryPrompt {
    pub fn new(
        dataset: &Dataset,
        question: impl Into<String>,
        max_rows: usize,
    ) -> Result<Self, DomainError> {
        let shown_rows = max_rows.min(dataset.row_count());
        Ok(Self {
            dataset_name: dataset.name().to_string(),
            row_count: dataset.row_count(),
            column_count: dataset.column_count(),
            columns: dataset.columns().to_vec(),
            shown_rows,
            excerpt: dataset.to_csv_preview(shown_rows)?,
            question: question.into(),
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn is_truncated(&self) -> bool {
        self.shown_rows < self.row_count
    }
}

impl Prompt for DatasetQueryPrompt {
    fn render(&self) -> String {
        let coverage = if self.is_truncated() {
            format!("The first {} of {} rows", self.shown_rows, self.row_count)
        } else {
            format!("All {} rows", self.row_count)
        };

        format!(
            "You are a data analyst. You are given a table named \"{name}\" \
with {rows} rows and {cols} columns.\n\
Columns: {columns}\n\n\
{coverage}, as CSV:\n\
{excerpt}\n\n\
Answer the question below using only this data. Be concise. \
If the rows shown are not enough to answer with certainty, say so.\n\n\
Question: {question}",
            name = self.dataset_name,
            rows = self.row_count,
            cols = self.column_count,
            columns = self.columns.join(", "),
            excerpt = self.excerpt,
            question = self.question.trim(),
        )
    }
}
