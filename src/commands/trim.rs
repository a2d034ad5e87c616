//! `pairtrim trim` command.

use crate::cli::TrimArgs;
use crate::context::ServiceContext;
use crate::trim::{prepare_invocation, run_trimming};

/// Execute the `trim` command against the given context.
///
/// With `--dry-run` the assembled command is printed and nothing runs.
///
/// # Errors
///
/// Returns an error string if the command cannot be prepared, the tool fails,
/// or the unpaired outputs cannot be removed.
pub fn run_with_context(ctx: &ServiceContext, args: &TrimArgs) -> Result<(), String> {
    let job = args.to_job();

    if args.dry_run {
        let invocation = prepare_invocation(ctx, &job).map_err(|e| error_chain(&e))?;
        println!("{invocation}");
        return Ok(());
    }

    let pair = run_trimming(ctx, &job).map_err(|e| error_chain(&e))?;
    tracing::info!(
        reads1 = %pair.reads1.display(),
        reads2 = %pair.reads2.display(),
        "trimming finished"
    );
    Ok(())
}

/// Renders an error and its sources as `outer: inner: ...`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}
