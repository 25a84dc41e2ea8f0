//! CLI entry point for exam_target.
//!
//! Reads the grades file, checks the assignments average and prints the exam
//! grade needed to pass the course. Runs with no arguments; the flags only
//! override configuration.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use exam_target::config::Settings;
use exam_target::evaluator::GradeEvaluator;
use exam_target::output::{Format, Report};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "exam_target")]
#[command(about = "Computes the exam grade needed to pass a course", long_about = None)]
struct Cli {
    /// Grades file to read (overrides GRADES_PATH)
    #[arg(short, long, value_name = "PATH")]
    grades: Option<PathBuf>,

    /// Allowed distance between the summed weights and 1 (0 = exact)
    #[arg(short = 't', long)]
    weight_tolerance: Option<f64>,

    /// Output format for a completed evaluation
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_logging()?;

    let cli = Cli::parse();

    let report = match Settings::resolve(cli.grades, cli.weight_tolerance) {
        Ok(settings) => {
            info!(path = %settings.grades_path.display(), tolerance = settings.weight_tolerance, "Settings resolved");
            let evaluator = GradeEvaluator::from_settings(&settings);
            let result = evaluator.run();
            if let Err(e) = &result {
                // Failures are already rendered on stderr; keep the log record at info.
                info!(error = %e, early_stop = e.is_early_stop(), "Evaluation stopped");
            }
            Report::from_run(&result, evaluator.path(), cli.format)?
        }
        Err(e) => {
            info!(error = %e, "Invalid settings");
            Report::config_failure(&e)
        }
    };

    for line in &report.stdout {
        println!("{line}");
    }
    for line in &report.stderr {
        eprintln!("{line}");
    }
    Ok(ExitCode::from(report.status))
}

/// Logging setup: stderr for warnings and up, plus a JSON rolling log file
/// when `LOG_FILE_PATH` is set.
fn init_logging() -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let Ok(log_file_path) = std::env::var("LOG_FILE_PATH") else {
        tracing_subscriber::registry().with(stderr_layer).init();
        return Ok(None);
    };

    let log_dir = Path::new(&log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("exam_target.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(Some(guard))
}
