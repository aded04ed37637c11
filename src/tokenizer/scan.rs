use log::{debug, trace, warn};

use crate::tokenizer::errors::TokenizeError;

/// Characters that always form a token on their own
pub const SYMBOLS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(&c)
}

/// Split an arithmetic expression into literal and symbol tokens.
///
/// A literal is a maximal run of ASCII digits; every symbol is a
/// one-character token whether or not it is surrounded by spaces.
///
/// # Errors
///
/// Returns an error on the first character that is neither whitespace,
/// an ASCII digit nor one of [`SYMBOLS`].
pub fn tokenize(input: &str) -> Result<Vec<String>, TokenizeError> {
    debug!("Tokenizing '{}'", input);

    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        if c.is_ascii_whitespace() {
            continue;
        }

        if c.is_ascii_digit() {
            let mut literal = String::from(c);
            while let Some(&(_, next)) = chars.peek()
                && next.is_ascii_digit()
            {
                literal.push(next);
                chars.next();
            }
            trace!("Literal token '{}' at {}", literal, position);
            tokens.push(literal);
            continue;
        }

        if is_symbol(c) {
            trace!("Symbol token '{}' at {}", c, position);
            tokens.push(c.to_string());
            continue;
        }

        warn!("Unexpected character '{}' at position {}", c, position);
        return Err(TokenizeError::UnexpectedCharacter {
            character: c,
            position,
        });
    }

    debug!("Produced {} tokens", tokens.len());
    Ok(tokens)
}
