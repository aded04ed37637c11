use crate::checks::errors::CheckFailure;

/// Outcome a check case is expected to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Value(i64),
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCase {
    pub input: String,
    pub expected: Expected,
}

impl CheckCase {
    /// A case that must evaluate to `value` and render back to `input`
    pub fn value(input: impl Into<String>, value: i64) -> Self {
        Self {
            input: input.into(),
            expected: Expected::Value(value),
        }
    }

    /// A case that must fail to tokenize, build or evaluate
    pub fn failure(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected: Expected::Failure,
        }
    }
}

/// Result of running a batch of cases
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub total: usize,
    pub failures: Vec<CheckFailure>,
}

impl CheckReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn passed(&self) -> usize {
        self.total - self.failed()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
