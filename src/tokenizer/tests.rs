use crate::tokenizer::{TokenizeError, is_symbol, tokenize};

#[test]
fn test_tokenize_spaced_expression() {
    let result = tokenize("2 + 5 - 1 * 5 / 2");
    assert!(result.is_ok());
    if let Ok(tokens) = result {
        assert_eq!(tokens, vec!["2", "+", "5", "-", "1", "*", "5", "/", "2"]);
    }
}

#[test]
fn test_tokenize_multi_digit_literals() {
    assert_eq!(tokenize("12 / 600"), Ok(vec!["12".into(), "/".into(), "600".into()]));
}

#[test]
fn test_tokenize_unspaced_symbols() {
    let spaced = tokenize("1 + ( 2 * 3 )");
    let packed = tokenize("1+(2*3)");
    assert!(spaced.is_ok());
    assert_eq!(spaced, packed);
    if let Ok(tokens) = packed {
        assert_eq!(tokens, vec!["1", "+", "(", "2", "*", "3", ")"]);
    }
}

#[test]
fn test_tokenize_mixed_whitespace() {
    assert_eq!(
        tokenize("\t7\n/  2 "),
        Ok(vec!["7".into(), "/".into(), "2".into()])
    );
}

#[test]
fn test_tokenize_empty_input() {
    assert_eq!(tokenize(""), Ok(Vec::new()));
    assert_eq!(tokenize("   "), Ok(Vec::new()));
}

#[test]
fn test_tokenize_rejects_unknown_characters() {
    assert_eq!(
        tokenize("1 % 2"),
        Err(TokenizeError::UnexpectedCharacter {
            character: '%',
            position: 2,
        })
    );
    assert!(tokenize("1.5").is_err());
    assert!(tokenize("x + 1").is_err());
}

#[test]
fn test_tokenize_reports_byte_offset() {
    let result = tokenize("12 + é");
    assert_eq!(
        result,
        Err(TokenizeError::UnexpectedCharacter {
            character: 'é',
            position: 5,
        })
    );
}

#[test]
fn test_is_symbol() {
    for c in ['+', '-', '*', '/', '(', ')'] {
        assert!(is_symbol(c));
    }
    assert!(!is_symbol('^'));
    assert!(!is_symbol('1'));
}
