//! Error taxonomy for a grade evaluation run.
//!
//! Every variant ends the run. [`GradeError::NotPassing`] is the controlled
//! early stop; the rest are failures of the input or configuration.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The record could not be read or decoded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read grades file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("grades file `{}` is not a valid grade record", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level sections of a grade record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Assignments,
    Exam,
    Course,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Section::Assignments => "assignments",
            Section::Exam => "exam",
            Section::Course => "course",
        })
    }
}

/// Why a record failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("section `{0}` is missing or empty")]
    MissingSection(Section),
    #[error("section `{section}` must be an object, found {found}")]
    MalformedSection { section: Section, found: &'static str },
    #[error("field `{section}.{field}` is missing")]
    MissingField { section: Section, field: &'static str },
    #[error("weight `{section}.weight` is {weight}, expected a value between 0 and 1")]
    WeightOutOfRange { section: Section, weight: f64 },
    #[error("weights do not add to 1 (assignments {assignments} + exam {exam} = {sum})")]
    WeightMismatch { assignments: f64, exam: f64, sum: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("exam weight is 0, no exam grade can reach the course passing grade")]
    ZeroExamWeight,
    #[error("weight tolerance `{0}` must be a finite, non-negative number")]
    InvalidTolerance(String),
}

#[derive(Debug, Error)]
pub enum GradeError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("assignments not passed: {final_grade} < {passing_grade}")]
    NotPassing { final_grade: f64, passing_grade: f64 },
}

impl GradeError {
    /// True for the assignments early stop, false for real failures.
    pub fn is_early_stop(&self) -> bool {
        matches!(self, GradeError::NotPassing { .. })
    }
}
