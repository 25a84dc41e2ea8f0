//! Structural and invariant checks that turn a [`RawGradeRecord`] into a
//! [`GradeRecord`].
//!
//! A field holding `0` counts as present. Only absent or `null` fields, and
//! an empty `grades` list, are reported as missing. A section is missing only
//! when it is absent or blank; a non-empty object with misspelled keys is a
//! section with missing fields.

use tracing::debug;

use crate::error::{Section, ValidationError};
use crate::record::{Assignments, Course, Exam, GradeRecord, RawGradeRecord, RawSection};

/// Default allowed distance between the summed weights and 1.
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1e-9;

/// Validates `raw`, returning the first failing check.
///
/// `tolerance` bounds `|assignments.weight + exam.weight - 1|`; pass `0.0`
/// for an exact comparison.
pub fn validate(raw: &RawGradeRecord, tolerance: f64) -> Result<GradeRecord, ValidationError> {
    let assignments = section(&raw.assignments, Section::Assignments)?;
    let exam = section(&raw.exam, Section::Exam)?;
    let course = section(&raw.course, Section::Course)?;

    let grades = assignments
        .grades
        .clone()
        .filter(|g| !g.is_empty())
        .ok_or_else(|| missing(Section::Assignments, "grades"))?;
    let assignments_passing = assignments
        .passing_grade
        .ok_or_else(|| missing(Section::Assignments, "passing_grade"))?;
    let assignments_weight = assignments
        .weight
        .ok_or_else(|| missing(Section::Assignments, "weight"))?;

    let exam_weight = exam.weight.ok_or_else(|| missing(Section::Exam, "weight"))?;
    let exam_passing = exam
        .passing_grade
        .ok_or_else(|| missing(Section::Exam, "passing_grade"))?;

    let course_passing = course
        .passing_grade
        .ok_or_else(|| missing(Section::Course, "passing_grade"))?;

    check_weight_range(Section::Assignments, assignments_weight)?;
    check_weight_range(Section::Exam, exam_weight)?;

    let sum = assignments_weight + exam_weight;
    if (sum - 1.0).abs() > tolerance {
        return Err(ValidationError::WeightMismatch {
            assignments: assignments_weight,
            exam: exam_weight,
            sum,
        });
    }

    debug!(grade_count = grades.len(), weight_sum = sum, "Record validated");

    Ok(GradeRecord {
        assignments: Assignments {
            grades,
            passing_grade: assignments_passing,
            weight: assignments_weight,
        },
        exam: Exam {
            weight: exam_weight,
            passing_grade: exam_passing,
        },
        course: Course {
            passing_grade: course_passing,
        },
    })
}

fn section<T>(raw: &RawSection<T>, name: Section) -> Result<&T, ValidationError> {
    match raw {
        RawSection::Present(section) => Ok(section),
        RawSection::Missing => Err(ValidationError::MissingSection(name)),
        RawSection::NotObject(found) => Err(ValidationError::MalformedSection {
            section: name,
            found: *found,
        }),
    }
}

fn check_weight_range(section: Section, weight: f64) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&weight) {
        Ok(())
    } else {
        Err(ValidationError::WeightOutOfRange { section, weight })
    }
}

fn missing(section: Section, field: &'static str) -> ValidationError {
    ValidationError::MissingField { section, field }
}
