//! The grade evaluation pipeline.
//!
//! [`GradeEvaluator`] loads a record, validates it, checks the assignments
//! average and then works out the exam grade needed to pass the course.
//! Each stage is callable on its own; [`GradeEvaluator::run`] chains them and
//! stops at the first failure.

pub mod assignments;
pub mod exam;
pub mod utility;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::config::Settings;
use crate::error::GradeError;
use crate::loader::load_record;
use crate::record::{GradeRecord, RawGradeRecord};
use crate::validator::{DEFAULT_WEIGHT_TOLERANCE, validate};

pub use assignments::{AssignmentsOutcome, check_assignments};
pub use exam::{ExamRequirement, required_exam_grade};

/// Everything a completed run reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub assignments: AssignmentsOutcome,
    pub exam: ExamRequirement,
    pub course_passing_grade: f64,
}

#[derive(Debug, Clone)]
pub struct GradeEvaluator {
    path: PathBuf,
    weight_tolerance: f64,
}

impl GradeEvaluator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            weight_tolerance: DEFAULT_WEIGHT_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, weight_tolerance: f64) -> Self {
        self.weight_tolerance = weight_tolerance;
        self
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.grades_path).with_tolerance(settings.weight_tolerance)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<RawGradeRecord, GradeError> {
        Ok(load_record(&self.path)?)
    }

    pub fn validate(&self, raw: &RawGradeRecord) -> Result<GradeRecord, GradeError> {
        Ok(validate(raw, self.weight_tolerance)?)
    }

    pub fn check_assignments(&self, record: &GradeRecord) -> Result<AssignmentsOutcome, GradeError> {
        check_assignments(record)
    }

    pub fn required_exam_grade(
        &self,
        record: &GradeRecord,
        final_grade: f64,
    ) -> Result<ExamRequirement, GradeError> {
        Ok(required_exam_grade(record, final_grade)?)
    }

    /// Runs every stage against an already loaded record.
    pub fn evaluate(&self, raw: &RawGradeRecord) -> Result<Evaluation, GradeError> {
        let record = self.validate(raw)?;
        let assignments = self.check_assignments(&record)?;
        let exam = self.required_exam_grade(&record, assignments.final_grade)?;

        Ok(Evaluation {
            assignments,
            exam,
            course_passing_grade: record.course.passing_grade,
        })
    }

    /// Loads the record from disk and runs every stage.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn run(&self) -> Result<Evaluation, GradeError> {
        let raw = self.load()?;
        let evaluation = self.evaluate(&raw)?;
        info!(
            final_grade = evaluation.assignments.final_grade,
            needed_exam_grade = evaluation.exam.needed_grade,
            "Evaluation complete"
        );
        Ok(evaluation)
    }
}
