use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("{operation} failed: {message}")]
    Provider { operation: String, message: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AuditError {
    /// Wrap a provider API failure. Provider errors are fatal to the run;
    /// there is no partial audit.
    pub fn provider(operation: &str, source: impl std::fmt::Display) -> Self {
        AuditError::Provider {
            operation: operation.to_string(),
            message: source.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
