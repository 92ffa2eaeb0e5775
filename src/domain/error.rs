use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_generation_error(&self) -> bool {
        matches!(self, Self::Generation(_))
    }

    pub fn is_dataset_error(&self) -> bool {
        matches!(self, Self::Dataset(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_error_display_embeds_cause() {
        let err = DomainError::generation("Ollama call failed: connection refused");
        assert_eq!(
            err.to_string(),
            "Generation failed: Ollama call failed: connection refused"
        );
        assert!(err.is_generation_error());
        assert!(!err.is_dataset_error());
    }
}
