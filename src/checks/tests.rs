use crate::checks::{CheckCase, CheckFailure, builtin_cases, run_case, run_checks};

#[test]
fn test_builtin_cases_all_pass() {
    let report = run_checks(&builtin_cases());
    assert!(report.is_success(), "failures: {:?}", report.failures);
    assert_eq!(report.passed(), builtin_cases().len());
}

#[test]
fn test_wrong_value_is_reported() {
    let case = CheckCase::value("2 + 2", 5);
    assert_eq!(
        run_case(&case),
        Err(CheckFailure::WrongValue {
            input: "2 + 2".to_string(),
            expected: 5,
            actual: 4,
        })
    );
}

#[test]
fn test_non_canonical_spacing_is_a_rendering_failure() {
    let case = CheckCase::value("1+(2*3)", 7);
    assert_eq!(
        run_case(&case),
        Err(CheckFailure::WrongRendering {
            input: "1+(2*3)".to_string(),
            rendered: "1 + ( 2 * 3 )".to_string(),
        })
    );
}

#[test]
fn test_unexpected_error_is_reported() {
    let result = run_case(&CheckCase::value("1 +", 1));
    assert!(matches!(result, Err(CheckFailure::UnexpectedError { .. })));
}

#[test]
fn test_unexpected_success_is_reported() {
    let result = run_case(&CheckCase::failure("1 + 1"));
    assert_eq!(
        result,
        Err(CheckFailure::UnexpectedSuccess {
            input: "1 + 1".to_string(),
            value: 2,
        })
    );
}

#[test]
fn test_report_counts_and_order() {
    let cases = vec![
        CheckCase::value("1", 1),
        CheckCase::value("2", 3),
        CheckCase::failure("4 / 2"),
        CheckCase::failure("4 / 0"),
    ];
    let report = run_checks(&cases);
    assert_eq!(report.total, 4);
    assert_eq!(report.failed(), 2);
    assert_eq!(report.passed(), 2);
    assert!(!report.is_success());
    assert!(matches!(
        report.failures.first(),
        Some(CheckFailure::WrongValue { .. })
    ));
    assert!(matches!(
        report.failures.get(1),
        Some(CheckFailure::UnexpectedSuccess { .. })
    ));
}

#[test]
fn test_empty_batch_succeeds() {
    let report = run_checks(&[]);
    assert!(report.is_success());
    assert_eq!(report.passed(), 0);
}
