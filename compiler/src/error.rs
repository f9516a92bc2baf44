use thiserror::Error;

#[derive(Debug, Error)]
pub enum DslGenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}, column {column}: {msg}")]
    ParseError {
        msg:    String,
        line:   usize,
        column: usize,
    },

    #[error("JSON schema error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("Unsupported kind \"{kind}\" for field \"{field}\" of message \"{message}\"")]
    UnsupportedFieldKind {
        message: String,
        field:   String,
        kind:    String,
    },
}
