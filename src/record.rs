//! Grade record data model.
//!
//! [`RawGradeRecord`] mirrors the JSON file as written, with every field
//! optional so the validator can tell an absent field from a zero one.
//! [`GradeRecord`] is the validated form the evaluator works on.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A top-level section as found on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSection<T> {
    /// Absent, `null`, or an empty/false-like value (`{}`, `[]`, `""`, `0`, `false`).
    Missing,
    /// Present and non-empty, but not a JSON object. Holds the JSON kind found.
    NotObject(&'static str),
    /// A non-empty object. Its known fields may still be absent.
    Present(T),
}

impl<T: DeserializeOwned> RawSection<T> {
    /// Classifies a section value, decoding it only when it is a non-empty object.
    ///
    /// # Errors
    ///
    /// Fails if an object field holds a value of the wrong type.
    pub fn decode(value: Option<Value>) -> Result<Self, serde_json::Error> {
        let Some(value) = value else {
            return Ok(RawSection::Missing);
        };
        if is_blank(&value) {
            return Ok(RawSection::Missing);
        }
        match value {
            Value::Object(_) => Ok(RawSection::Present(serde_json::from_value(value)?)),
            other => Ok(RawSection::NotObject(json_kind(&other))),
        }
    }
}

impl<T> RawSection<T> {
    pub fn present(&self) -> Option<&T> {
        match self {
            RawSection::Present(section) => Some(section),
            _ => None,
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Assignments section as found on disk.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawAssignments {
    pub grades: Option<Vec<f64>>,
    pub passing_grade: Option<f64>,
    pub weight: Option<f64>,
}

/// Exam section as found on disk.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawExam {
    pub weight: Option<f64>,
    pub passing_grade: Option<f64>,
}

/// Course section as found on disk.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCourse {
    pub passing_grade: Option<f64>,
}

/// Unvalidated record straight out of the loader.
#[derive(Debug, Clone, PartialEq)]
pub struct RawGradeRecord {
    pub assignments: RawSection<RawAssignments>,
    pub exam: RawSection<RawExam>,
    pub course: RawSection<RawCourse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignments {
    /// Non-empty, in file order.
    pub grades: Vec<f64>,
    pub passing_grade: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exam {
    pub weight: f64,
    pub passing_grade: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub passing_grade: f64,
}

/// A record that passed validation: all fields present, `grades` non-empty,
/// both weights within `[0, 1]` and summing to one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRecord {
    pub assignments: Assignments,
    pub exam: Exam,
    pub course: Course,
}
