//! CLI argument definitions.

use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::trim::{Launcher, TrimJob, DEFAULT_JAVA_HEAP};

/// Top-level CLI parser for `pairtrim`.
#[derive(Debug, Parser)]
#[command(name = "pairtrim", version, about = "Trim paired-end reads with an external trimmer")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Trim a pair of read files and drop the unpaired outputs.
    Trim(TrimArgs),
}

/// How to start the trimming tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LauncherKind {
    /// Java for `.jar` tools, direct execution otherwise.
    Auto,
    /// Execute the tool itself.
    Direct,
    /// Start the tool with `java -jar`.
    Java,
}

/// Arguments of `pairtrim trim`.
#[derive(Debug, Args)]
pub struct TrimArgs {
    /// Forward reads.
    #[arg(long)]
    pub reads1: PathBuf,
    /// Reverse reads.
    #[arg(long)]
    pub reads2: PathBuf,
    /// Output prefix; writes `<prefix>_1.fq` and `<prefix>_2.fq`.
    #[arg(long)]
    pub out_prefix: PathBuf,
    /// Trimming tool (executable or jar).
    #[arg(long, env = "PAIRTRIM_TOOL")]
    pub tool: PathBuf,
    /// Adapter sequences for ILLUMINACLIP.
    #[arg(long, env = "PAIRTRIM_ADAPTERS")]
    pub adapters: PathBuf,
    /// Drop reads shorter than this after trimming.
    #[arg(long, env = "PAIRTRIM_MIN_LEN", default_value = "50")]
    pub min_len: NonZeroU32,
    /// Threads for the trimming tool.
    #[arg(long, env = "PAIRTRIM_THREADS", default_value = "1")]
    pub threads: NonZeroU32,
    /// How to start the tool.
    #[arg(long, value_enum, default_value_t = LauncherKind::Auto)]
    pub launcher: LauncherKind,
    /// Java executable for jar tools.
    #[arg(long, env = "PAIRTRIM_JAVA", default_value = "java")]
    pub java: PathBuf,
    /// Maximum Java heap, passed as `-Xmx<value>`.
    #[arg(long, env = "PAIRTRIM_JAVA_HEAP", default_value = DEFAULT_JAVA_HEAP)]
    pub java_heap: String,
    /// Print the command before running it.
    #[arg(short, long)]
    pub verbose: bool,
    /// Print the command and exit without running it.
    #[arg(long)]
    pub dry_run: bool,
}

impl TrimArgs {
    /// Converts the parsed arguments into a [`TrimJob`].
    #[must_use]
    pub fn to_job(&self) -> TrimJob {
        let java = || Launcher::Java { java: self.java.clone(), max_heap: self.java_heap.clone() };
        let launcher = match self.launcher {
            LauncherKind::Direct => Launcher::Direct,
            LauncherKind::Java => java(),
            LauncherKind::Auto => match Launcher::Auto.resolve(&self.tool) {
                Launcher::Java { .. } => java(),
                other => other,
            },
        };

        TrimJob::new(&self.reads1, &self.reads2, &self.out_prefix, &self.tool, &self.adapters)
            .with_min_len(self.min_len)
            .with_threads(self.threads)
            .with_verbose(self.verbose)
            .with_launcher(launcher)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, LauncherKind};
    use crate::trim::Launcher;
    use clap::Parser;

    const BASE: [&str; 12] = [
        "pairtrim",
        "trim",
        "--reads1",
        "r1.fq",
        "--reads2",
        "r2.fq",
        "--out-prefix",
        "out/s",
        "--tool",
        "/bin/trimmer",
        "--adapters",
        "adapters.fa",
    ];

    fn parse(extra: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(BASE.iter().chain(extra))
    }

    #[test]
    fn parses_trim_with_defaults() {
        let Command::Trim(args) = parse(&[]).unwrap().command;
        assert_eq!(args.min_len.get(), 50);
        assert_eq!(args.threads.get(), 1);
        assert_eq!(args.launcher, LauncherKind::Auto);
        assert!(!args.verbose);
        assert!(!args.dry_run);

        let job = args.to_job();
        assert_eq!(job.launcher, Launcher::Direct);
        assert_eq!(job.output_prefix.to_str(), Some("out/s"));
    }

    #[test]
    fn parses_numeric_overrides() {
        let Command::Trim(args) =
            parse(&["--min-len", "36", "--threads", "4", "-v"]).unwrap().command;
        let job = args.to_job();
        assert_eq!(job.min_len.get(), 36);
        assert_eq!(job.threads.get(), 4);
        assert!(job.verbose);
    }

    #[test]
    fn rejects_zero_threads() {
        assert!(parse(&["--threads", "0"]).is_err());
        assert!(parse(&["--min-len", "0"]).is_err());
    }

    #[test]
    fn java_launcher_carries_heap() {
        let Command::Trim(args) =
            parse(&["--launcher", "java", "--java", "/jdk/java", "--java-heap", "2g"])
                .unwrap()
                .command;
        assert_eq!(
            args.to_job().launcher,
            Launcher::Java { java: "/jdk/java".into(), max_heap: "2g".into() }
        );
    }

    #[test]
    fn missing_reads_is_an_error() {
        assert!(Cli::try_parse_from(["pairtrim", "trim", "--reads1", "r1.fq"]).is_err());
    }
}
