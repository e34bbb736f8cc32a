use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Empty container: nothing to take from the {container}")]
    EmptyContainer { container: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClinicError {
    pub fn empty(container: &'static str) -> Self {
        tracing::trace!("Attempted removal from empty {}", container);
        ClinicError::EmptyContainer { container }
    }

    pub fn is_empty_container(&self) -> bool {
        matches!(self, ClinicError::EmptyContainer { .. })
    }
}
