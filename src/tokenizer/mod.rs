//! Splits raw text into the token strings the reduction engine consumes

mod errors;
mod scan;

pub use errors::TokenizeError;
pub use scan::{SYMBOLS, is_symbol, tokenize};

#[cfg(test)]
mod tests;
