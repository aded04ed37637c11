//! Property-based tests for reduction, evaluation and rendering.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::expression::Expression;
    use crate::reduction::build;
    use crate::tokenizer::tokenize;

    fn operator() -> impl Strategy<Value = char> {
        prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
    }

    fn join(first: Vec<String>, rest: Vec<(char, Vec<String>)>) -> Vec<String> {
        let mut tokens = first;
        for (op, operand) in rest {
            tokens.push(op.to_string());
            tokens.extend(operand);
        }
        tokens
    }

    // Tokens of one operand: a literal or a parenthesized sequence
    fn operand() -> impl Strategy<Value = Vec<String>> {
        let leaf = (0u32..1000).prop_map(|n| vec![n.to_string()]);
        leaf.prop_recursive(3, 32, 4, |inner| {
            (
                inner.clone(),
                proptest::collection::vec((operator(), inner), 0..3),
            )
                .prop_map(|(first, rest)| {
                    let mut tokens = vec!["(".to_string()];
                    tokens.extend(join(first, rest));
                    tokens.push(")".to_string());
                    tokens
                })
        })
    }

    // A well-formed token sequence
    fn sequence() -> impl Strategy<Value = Vec<String>> {
        (
            operand(),
            proptest::collection::vec((operator(), operand()), 0..5),
        )
            .prop_map(|(first, rest)| join(first, rest))
    }

    fn fold(first: i64, rest: &[(char, i64)]) -> i64 {
        rest.iter().fold(first, |acc, &(op, n)| match op {
            '+' => acc + n,
            '-' => acc - n,
            '*' => acc * n,
            _ => acc / n,
        })
    }

    proptest! {
        #[test]
        fn literal_evaluates_and_renders_as_itself(n in 0i64..=i64::MAX) {
            let expr = Expression::literal(n);
            prop_assert_eq!(expr.evaluate(), Ok(n));
            prop_assert_eq!(expr.render(), n.to_string());
        }

        #[test]
        fn literal_token_builds_literal(n in 0i64..=i64::MAX) {
            let token = n.to_string();
            prop_assert_eq!(build(&[token]), Ok(Expression::literal(n)));
        }

        #[test]
        fn render_reproduces_canonical_text(tokens in sequence()) {
            let text = tokens.join(" ");
            let built = build(&tokens);
            prop_assert!(built.is_ok(), "failed to build {}", text);
            if let Ok(expr) = built {
                prop_assert_eq!(expr.render(), text.clone());
            }
            prop_assert_eq!(tokenize(&text), Ok(tokens));
        }

        #[test]
        fn render_is_idempotent(tokens in sequence()) {
            if let Ok(expr) = build(&tokens) {
                prop_assert_eq!(expr.render(), expr.render());
            }
        }

        #[test]
        fn operators_fold_left_to_right(
            first in 1i64..100,
            rest in proptest::collection::vec((operator(), 1i64..100), 0..6),
        ) {
            let mut tokens = vec![first.to_string()];
            for (op, n) in &rest {
                tokens.push(op.to_string());
                tokens.push(n.to_string());
            }
            let built = build(&tokens);
            prop_assert!(built.is_ok());
            if let Ok(expr) = built {
                prop_assert_eq!(expr.evaluate(), Ok(fold(first, &rest)));
            }
        }

        #[test]
        fn group_evaluates_like_its_contents(tokens in sequence()) {
            let mut grouped = vec!["(".to_string()];
            grouped.extend(tokens.iter().cloned());
            grouped.push(")".to_string());
            if let (Ok(plain), Ok(wrapped)) = (build(&tokens), build(&grouped)) {
                prop_assert_eq!(plain.evaluate(), wrapped.evaluate());
            }
        }
    }
}
