//! Paired-end trimming through an external tool.
//!
//! [`run_trimming`] makes the adapters path absolute, starts the tool once
//! with a fixed argument layout, checks its exit status and then removes the
//! two unpaired outputs. Nothing is retried and nothing is cleaned up when the
//! tool fails.

pub mod invocation;
pub mod job;

use std::io::Write;
use std::path::PathBuf;

pub use invocation::{Invocation, OutputPaths, ADAPTER_CLIP_SETTINGS};
pub use job::{Launcher, TrimJob, DEFAULT_JAVA_HEAP, DEFAULT_MIN_LEN, DEFAULT_THREADS};

use crate::context::ServiceContext;
use crate::error::TrimError;

/// The paired outputs left on disk after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedPair {
    /// `{prefix}_1.fq`
    pub reads1: PathBuf,
    /// `{prefix}_2.fq`
    pub reads2: PathBuf,
}

/// Runs the trimmer for `job`, printing the command to stdout when
/// `job.verbose` is set.
///
/// # Errors
///
/// See [`run_trimming_with_report`].
pub fn run_trimming(ctx: &ServiceContext, job: &TrimJob) -> Result<TrimmedPair, TrimError> {
    run_trimming_with_report(ctx, job, &mut std::io::stdout())
}

/// Runs the trimmer for `job`, writing the verbose command line to `out`.
///
/// # Errors
///
/// - [`TrimError::Filesystem`] if the adapters path cannot be made absolute,
///   or an unpaired output cannot be removed after the tool succeeded.
/// - [`TrimError::Spawn`] if the tool cannot be started.
/// - [`TrimError::ProcessExecution`] if the tool exits non-zero; its outputs
///   are left as they are.
/// - [`TrimError::Report`] if the verbose line cannot be written.
pub fn run_trimming_with_report<W: Write + ?Sized>(
    ctx: &ServiceContext,
    job: &TrimJob,
    out: &mut W,
) -> Result<TrimmedPair, TrimError> {
    let invocation = prepare_invocation(ctx, job)?;

    if job.verbose {
        writeln!(out, "Run trimmomatic: {invocation}").map_err(TrimError::Report)?;
        out.flush().map_err(TrimError::Report)?;
    }

    let program = invocation.program().to_string_lossy().into_owned();
    tracing::info!(
        program = %program,
        threads = job.threads.get(),
        min_len = job.min_len.get(),
        prefix = %job.output_prefix.display(),
        "starting trimming tool"
    );

    let output = ctx
        .command
        .run(invocation.program(), invocation.args())
        .map_err(|source| TrimError::Spawn { program: program.clone(), source })?;

    if !output.success() {
        tracing::debug!(
            exit_code = output.exit_code,
            stderr = %output.stderr,
            "trimming tool failed"
        );
        return Err(TrimError::ProcessExecution {
            program,
            exit_code: output.exit_code,
            stderr: output.stderr,
        });
    }

    let outputs = job.outputs();
    for path in outputs.unpaired() {
        ctx.fs.remove_file(path).map_err(|source| TrimError::Filesystem {
            action: "failed to remove",
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "removed unpaired output");
    }

    Ok(TrimmedPair { reads1: outputs.paired_1, reads2: outputs.paired_2 })
}

/// Builds the invocation `job` would run, resolving the adapters path through
/// the context's filesystem. Starts nothing.
///
/// # Errors
///
/// Returns [`TrimError::Filesystem`] if the adapters path cannot be made
/// absolute.
pub fn prepare_invocation(ctx: &ServiceContext, job: &TrimJob) -> Result<Invocation, TrimError> {
    let adapters = ctx.fs.absolute(&job.adapters).map_err(|source| TrimError::Filesystem {
        action: "failed to resolve",
        path: job.adapters.clone(),
        source,
    })?;
    Ok(Invocation::build(job, &adapters))
}
