use log::{debug, info, warn};
use rayon::prelude::*;

use crate::checks::errors::CheckFailure;
use crate::checks::types::{CheckCase, CheckReport, Expected};
use crate::parse;

/// Run one case: evaluate it and, for value cases, require the rendered
/// tree to reproduce the input text exactly.
///
/// # Errors
///
/// Returns the [`CheckFailure`] describing how the outcome differed.
pub fn run_case(case: &CheckCase) -> Result<(), CheckFailure> {
    debug!("Checking '{}'", case.input);

    let outcome = parse(&case.input).and_then(|expr| {
        let value = expr.evaluate()?;
        Ok((expr.render(), value))
    });

    match (case.expected, outcome) {
        (Expected::Value(expected), Ok((rendered, actual))) => {
            if actual != expected {
                Err(CheckFailure::WrongValue {
                    input: case.input.clone(),
                    expected,
                    actual,
                })
            } else if rendered != case.input {
                Err(CheckFailure::WrongRendering {
                    input: case.input.clone(),
                    rendered,
                })
            } else {
                Ok(())
            }
        }
        (Expected::Value(_), Err(error)) => Err(CheckFailure::UnexpectedError {
            input: case.input.clone(),
            error: error.to_string(),
        }),
        (Expected::Failure, Ok((_, value))) => Err(CheckFailure::UnexpectedSuccess {
            input: case.input.clone(),
            value,
        }),
        (Expected::Failure, Err(error)) => {
            debug!("'{}' failed as expected: {}", case.input, error);
            Ok(())
        }
    }
}

/// Run every case on the rayon pool. Failures keep the order of `cases`.
pub fn run_checks(cases: &[CheckCase]) -> CheckReport {
    info!("Running {} checks", cases.len());

    let failures: Vec<CheckFailure> = cases
        .par_iter()
        .filter_map(|case| run_case(case).err())
        .collect();

    for failure in &failures {
        warn!("{}", failure);
    }

    let report = CheckReport {
        total: cases.len(),
        failures,
    };
    info!("{} passed, {} failed", report.passed(), report.failed());
    report
}
