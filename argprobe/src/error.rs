use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("bad query '{query}': {message}")]
    Query { query: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Args(#[from] getarg::Error),
}

impl ProbeError {
    pub fn query(query: &str, message: impl Into<String>) -> Self {
        ProbeError::Query {
            query: query.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
