//! Minimum exam grade needed to reach the course passing grade.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::evaluator::utility::round2;
use crate::record::GradeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExamRequirement {
    /// Grade to aim for, rounded to two decimals, never below the exam minimum.
    pub needed_grade: f64,
    /// Grade the course formula alone asks for, before clamping and rounding.
    pub raw_needed_grade: f64,
    /// `assignments final grade * assignments weight`.
    pub weighted_assignments: f64,
    /// Whether the exam's own passing grade lifted the requirement.
    pub clamped_to_exam_minimum: bool,
}

/// Computes `max((course.passing_grade - final_grade * assignments.weight)
/// / exam.weight, exam.passing_grade)`, rounded to two decimals.
///
/// # Errors
///
/// [`ConfigError::ZeroExamWeight`] if `exam.weight` is zero.
#[tracing::instrument(skip(record))]
pub fn required_exam_grade(
    record: &GradeRecord,
    final_grade: f64,
) -> Result<ExamRequirement, ConfigError> {
    let exam_weight = record.exam.weight;
    if exam_weight == 0.0 {
        return Err(ConfigError::ZeroExamWeight);
    }

    let weighted_assignments = final_grade * record.assignments.weight;
    let raw_needed_grade = (record.course.passing_grade - weighted_assignments) / exam_weight;
    let exam_minimum = record.exam.passing_grade;
    debug!(weighted_assignments, raw_needed_grade, exam_minimum, "Exam requirement computed");

    let clamped_to_exam_minimum = raw_needed_grade < exam_minimum;
    let needed_grade = round2(raw_needed_grade.max(exam_minimum));

    info!(needed_grade, clamped_to_exam_minimum, "Exam requirement");
    Ok(ExamRequirement {
        needed_grade,
        raw_needed_grade,
        weighted_assignments,
        clamped_to_exam_minimum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Assignments, Course, Exam};

    fn record(course_passing: f64, assignments_weight: f64, exam_weight: f64) -> GradeRecord {
        GradeRecord {
            assignments: Assignments {
                grades: vec![80.0],
                passing_grade: 50.0,
                weight: assignments_weight,
            },
            exam: Exam {
                weight: exam_weight,
                passing_grade: 50.0,
            },
            course: Course {
                passing_grade: course_passing,
            },
        }
    }

    #[test]
    fn test_requirement_above_exam_minimum() {
        let req = required_exam_grade(&record(70.0, 0.4, 0.6), 80.0).unwrap();
        assert_eq!(req.weighted_assignments, 32.0);
        assert_eq!(req.needed_grade, 63.33);
        assert!(!req.clamped_to_exam_minimum);
    }

    #[test]
    fn test_requirement_clamped_to_exam_minimum() {
        let req = required_exam_grade(&record(40.0, 0.4, 0.6), 80.0).unwrap();
        assert_eq!(req.needed_grade, 50.0);
        assert!(req.clamped_to_exam_minimum);
        assert!(req.raw_needed_grade < 14.0);
    }

    #[test]
    fn test_zero_exam_weight_is_config_error() {
        let result = required_exam_grade(&record(70.0, 1.0, 0.0), 80.0);
        assert_eq!(result, Err(ConfigError::ZeroExamWeight));
    }

    #[test]
    fn test_full_exam_weight_ignores_assignments() {
        let req = required_exam_grade(&record(70.0, 0.0, 1.0), 80.0).unwrap();
        assert_eq!(req.needed_grade, 70.0);
    }
}
