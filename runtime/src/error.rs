use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DslError {
    #[error("Index {index} out of bounds for repeated field of length {len}")]
    Index {
        index: usize,
        len:   usize,
    },

    #[error("Builder for {message} was already finalized")]
    Finalized {
        message: &'static str,
    },
}
