//! Token-to-tree reduction

pub mod constants;
mod engine;
mod errors;

pub use engine::build;
pub use errors::ReductionError;
