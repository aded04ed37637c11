use crate::checks::types::CheckCase;

/// The built-in self-check table: operator examples, the left-to-right
/// folding example, grouping, and inputs that must be rejected.
pub fn builtin_cases() -> Vec<CheckCase> {
    vec![
        CheckCase::value("1", 1),
        CheckCase::value("1 + 2", 3),
        CheckCase::value("1 + 2 + 3", 6),
        CheckCase::value("3 - 2", 1),
        CheckCase::value("9 * 8", 72),
        CheckCase::value("12 / 6", 2),
        CheckCase::value("7 / 2", 3),
        CheckCase::value("2 + 5 - 1 * 5 / 2", 15),
        CheckCase::value("1 + ( 2 * 3 )", 7),
        CheckCase::value("( 1 * 2 ) + 3", 5),
        CheckCase::value("2 * ( 3 + 4 )", 14),
        CheckCase::value("( ( 8 ) )", 8),
        CheckCase::failure("1 2"),
        CheckCase::failure("1 + + 2"),
        CheckCase::failure("+"),
        CheckCase::failure("+ 1"),
        CheckCase::failure("1 + "),
        CheckCase::failure("1 + 2 +"),
        CheckCase::failure("1 + 2 + 3 +"),
        CheckCase::failure(""),
        CheckCase::failure("5 / 0"),
        CheckCase::failure("( 1 + 2"),
        CheckCase::failure("1 + 2 )"),
        CheckCase::failure("1 % 2"),
    ]
}
