use thiserror::Error;

/// Why a single check case did not pass
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    #[error("'{input}' evaluates to {actual}, should be {expected}")]
    WrongValue {
        input: String,
        expected: i64,
        actual: i64,
    },
    #[error("'{input}' renders as '{rendered}'")]
    WrongRendering { input: String, rendered: String },
    #[error("'{input}' failed unexpectedly: {error}")]
    UnexpectedError { input: String, error: String },
    #[error("'{input}' should have failed but evaluated to {value}")]
    UnexpectedSuccess { input: String, value: i64 },
}
