use super::CliError;
use anyhow::Context;
use cofactor_core::{ComputeReport, load_matrix, parallel_determinant};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

#[derive(clap::Args)]
pub(super) struct ComputeArgs {
    /// Matrix file: size N followed by N*N whitespace-separated integers
    #[arg(value_name = "MATRIX_FILE")]
    matrix_file: PathBuf,

    /// Number of worker threads (may exceed the matrix size)
    #[arg(value_name = "THREADS")]
    threads: NonZeroUsize,

    /// Suppress the matrix echo
    #[arg(long)]
    quiet: bool,

    /// Write a JSON compute report to this path
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
}

pub(super) fn run_compute(args: ComputeArgs) -> Result<i32, CliError> {
    let matrix = load_matrix(&args.matrix_file)?;
    debug!(size = matrix.size(), path = %args.matrix_file.display(), "matrix loaded");

    if !args.quiet {
        print!("{matrix}");
    }

    let started = Instant::now();
    let determinant = parallel_determinant(&matrix, args.threads)?;
    let elapsed = started.elapsed();
    debug!(determinant, elapsed_us = elapsed.as_micros() as u64, "computation finished");

    let report = ComputeReport {
        matrix_size: matrix.size(),
        thread_count: args.threads.get(),
        determinant,
        elapsed_seconds: elapsed.as_secs_f64(),
    };
    println!("{}", report.render_human_summary());

    if let Some(path) = &args.report {
        report
            .write_json(path)
            .with_context(|| format!("failed to write report to '{}'", path.display()))?;
        println!("JSON report: {}", path.display());
    }

    Ok(0)
}
