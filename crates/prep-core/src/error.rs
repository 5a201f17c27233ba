/// Error types shared by the interview-prep crates.
///
/// The browsing core itself (filtering, disclosure, tab selection) is total and
/// never fails; these cover loading content and talking to the clipboard.
/// Server crates wrap `CoreError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("failed to read content file {path}: {source}")]
    ContentRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("content parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("failed to launch clipboard command '{program}': {source}")]
    ClipboardSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard io error: {0}")]
    ClipboardIo(#[from] std::io::Error),

    #[error("clipboard command '{program}' exited with {status}")]
    ClipboardExit { program: String, status: String },

    #[error("clipboard command '{program}' did not finish within {timeout_ms}ms")]
    ClipboardTimeout { program: String, timeout_ms: u128 },
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Parse {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}
