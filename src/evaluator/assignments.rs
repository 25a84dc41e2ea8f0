//! Assignments average and its pass check.

use serde::Serialize;
use tracing::info;

use crate::error::GradeError;
use crate::evaluator::utility::{mean, round2};
use crate::record::GradeRecord;

/// Result of a passed assignments check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssignmentsOutcome {
    pub final_grade: f64,
    pub passing_grade: f64,
}

/// Averages the assignment grades, rounded to two decimals, and checks the
/// average against `assignments.passing_grade`.
///
/// # Errors
///
/// [`GradeError::NotPassing`] when the average is below the passing grade.
/// Callers must not go on to the exam calculation in that case.
#[tracing::instrument(skip(record), fields(grade_count = record.assignments.grades.len()))]
pub fn check_assignments(record: &GradeRecord) -> Result<AssignmentsOutcome, GradeError> {
    let final_grade = round2(mean(&record.assignments.grades));
    let passing_grade = record.assignments.passing_grade;

    if final_grade < passing_grade {
        info!(final_grade, passing_grade, "Assignments not passed");
        return Err(GradeError::NotPassing {
            final_grade,
            passing_grade,
        });
    }

    info!(final_grade, passing_grade, "Assignments passed");
    Ok(AssignmentsOutcome {
        final_grade,
        passing_grade,
    })
}
