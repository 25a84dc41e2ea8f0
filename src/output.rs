//! Console presentation of evaluation results and failures.
//!
//! Rendering returns lines instead of printing so the binary decides where
//! they go. [`Report`] bundles those lines with the process exit status.

use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use tracing::debug;

use crate::error::{ConfigError, GradeError, LoadError};
use crate::evaluator::Evaluation;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Output format for a completed evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// What the binary prints and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub status: u8,
}

impl Report {
    /// Maps a run to its console output. Results go to stdout with status 0;
    /// every failure, the assignments early stop included, goes to stderr
    /// with status 1.
    pub fn from_run(
        result: &Result<Evaluation, GradeError>,
        path: &Path,
        format: Format,
    ) -> Result<Self> {
        match result {
            Ok(evaluation) => {
                let stdout = match format {
                    Format::Text => render_text(evaluation),
                    Format::Json => vec![render_json(evaluation)?],
                };
                Ok(Self {
                    stdout,
                    stderr: Vec::new(),
                    status: EXIT_SUCCESS,
                })
            }
            Err(error) => Ok(Self {
                stdout: Vec::new(),
                stderr: render_failure(error, path),
                status: EXIT_FAILURE,
            }),
        }
    }

    /// Settings could not be resolved, so no run happened.
    pub fn config_failure(error: &ConfigError) -> Self {
        Self {
            stdout: Vec::new(),
            stderr: vec![format!("Invalid configuration: {error}")],
            status: EXIT_FAILURE,
        }
    }
}

/// Lines for a completed evaluation.
pub fn render_text(evaluation: &Evaluation) -> Vec<String> {
    debug!("{:#?}", evaluation);
    vec![
        "Assignments passed!".to_string(),
        format!("Your grade: {}", evaluation.assignments.final_grade),
        format!("Passing grade: {}", evaluation.assignments.passing_grade),
        String::new(),
        format!(
            "To pass the course (grade >= {}):",
            evaluation.course_passing_grade
        ),
        format!("You need >= {} on the exam", evaluation.exam.needed_grade),
    ]
}

/// Pretty-printed JSON for a completed evaluation.
pub fn render_json(evaluation: &Evaluation) -> Result<String> {
    Ok(serde_json::to_string_pretty(evaluation)?)
}

/// Lines explaining why a run stopped. `path` is the grades file in use.
pub fn render_failure(error: &GradeError, path: &Path) -> Vec<String> {
    match error {
        GradeError::Load(LoadError::Read { source, .. }) => vec![
            error.to_string(),
            format!("Reason: {source}"),
        ],
        GradeError::Load(LoadError::Parse { source, .. }) => vec![
            error.to_string(),
            format!("Reason: {source}"),
            format!("Edit the grades file! ({})", path.display()),
        ],
        GradeError::Validation(reason) => vec![
            format!("Invalid data: {reason}"),
            format!("Edit the grades file! ({})", path.display()),
        ],
        GradeError::Config(ConfigError::ZeroExamWeight) => vec![
            format!("Invalid configuration: {}", ConfigError::ZeroExamWeight),
            format!("Edit the grades file! ({})", path.display()),
        ],
        GradeError::Config(reason) => vec![format!("Invalid configuration: {reason}")],
        GradeError::NotPassing {
            final_grade,
            passing_grade,
        } => vec![
            "Assignments not passed!".to_string(),
            format!("Your grade: {final_grade}"),
            format!("Passing grade: {passing_grade}"),
        ],
    }
}
