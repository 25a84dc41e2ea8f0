use std::path::Path;

use exam_target::error::{GradeError, Section, ValidationError};
use exam_target::evaluator::GradeEvaluator;
use exam_target::output::{EXIT_FAILURE, EXIT_SUCCESS, Format, Report, render_failure, render_text};

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_full_pipeline() {
    let evaluation = GradeEvaluator::new(fixture("grades.json"))
        .run()
        .expect("Failed to evaluate fixture");

    assert_eq!(evaluation.assignments.final_grade, 80.0);
    assert_eq!(evaluation.exam.needed_grade, 63.33);
    assert_eq!(evaluation.course_passing_grade, 70.0);
}

#[test]
fn test_pipeline_is_deterministic() {
    let evaluator = GradeEvaluator::new(fixture("grades.json"));
    let first = render_text(&evaluator.run().unwrap());
    let second = render_text(&evaluator.run().unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_failing_assignments_stop_early() {
    let err = GradeEvaluator::new(fixture("failing_assignments.json"))
        .run()
        .unwrap_err();

    assert!(err.is_early_stop());
    let lines = render_failure(&err, Path::new("failing_assignments.json"));
    assert_eq!(lines[0], "Assignments not passed!");
    assert_eq!(lines[1], "Your grade: 45");
}

#[test]
fn test_missing_section_fixture() {
    let err = GradeEvaluator::new(fixture("missing_course.json"))
        .run()
        .unwrap_err();

    assert!(matches!(
        err,
        GradeError::Validation(ValidationError::MissingSection(Section::Course))
    ));
}

#[test]
fn test_exit_status_per_fixture() {
    for (name, status) in [
        ("grades.json", EXIT_SUCCESS),
        ("failing_assignments.json", EXIT_FAILURE),
        ("missing_course.json", EXIT_FAILURE),
    ] {
        let path = fixture(name);
        let result = GradeEvaluator::new(&path).run();
        let report = Report::from_run(&result, &path, Format::Text).unwrap();
        assert_eq!(report.status, status, "{name}");
    }
}
