//! Table-driven self checks run against the whole pipeline

mod cases;
mod errors;
mod runner;
mod types;

pub use cases::builtin_cases;
pub use errors::CheckFailure;
pub use runner::{run_case, run_checks};
pub use types::{CheckCase, CheckReport, Expected};

#[cfg(test)]
mod tests;
