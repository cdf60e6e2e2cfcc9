use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtowrapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in {file} at line {line}: {msg}")]
    Parse {
        file: String,
        line: usize,
        msg:  String,
    },

    #[error("Invalid schema pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read schema path: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}
