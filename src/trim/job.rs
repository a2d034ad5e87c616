//! Parameters of a single trimming run.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use super::invocation::OutputPaths;

/// Reads shorter than this after trimming are dropped unless overridden.
pub const DEFAULT_MIN_LEN: NonZeroU32 = match NonZeroU32::new(50) {
    Some(n) => n,
    None => unreachable!(),
};

/// The tool runs single-threaded unless overridden.
pub const DEFAULT_THREADS: NonZeroU32 = NonZeroU32::MIN;

/// Maximum JVM heap handed to a jar-packaged trimmer.
pub const DEFAULT_JAVA_HEAP: &str = "1000m";

/// How the trimming artifact is started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Launcher {
    /// `Java` with defaults for `.jar` artifacts, `Direct` for anything else.
    #[default]
    Auto,
    /// Execute the artifact itself.
    Direct,
    /// Start the artifact as `<java> -Xmx<max_heap> -jar <tool>`.
    Java {
        /// Java executable.
        java: PathBuf,
        /// Value for `-Xmx`, e.g. `1000m`.
        max_heap: String,
    },
}

impl Launcher {
    /// A `Java` launcher using `java` from `PATH` and the default heap.
    #[must_use]
    pub fn java() -> Self {
        Self::Java { java: PathBuf::from("java"), max_heap: DEFAULT_JAVA_HEAP.to_string() }
    }

    /// Picks a concrete launcher for `tool`. Never returns `Auto`.
    #[must_use]
    pub fn resolve(&self, tool: &Path) -> Self {
        match self {
            Self::Auto if is_jar(tool) => Self::java(),
            Self::Auto => Self::Direct,
            other => other.clone(),
        }
    }
}

fn is_jar(tool: &Path) -> bool {
    tool.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("jar"))
}

/// Everything needed to trim one pair of read files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimJob {
    /// Forward reads.
    pub reads1: PathBuf,
    /// Reverse reads.
    pub reads2: PathBuf,
    /// Base path the four output files are derived from.
    pub output_prefix: PathBuf,
    /// Trimming tool artifact.
    pub tool: PathBuf,
    /// Adapter sequence file, made absolute before the tool sees it.
    pub adapters: PathBuf,
    /// Minimum read length kept after trimming.
    pub min_len: NonZeroU32,
    /// Worker threads for the tool.
    pub threads: NonZeroU32,
    /// Print the assembled command before running it.
    pub verbose: bool,
    /// How to start `tool`.
    pub launcher: Launcher,
}

impl TrimJob {
    /// Creates a job with default `min_len`, `threads`, launcher and no
    /// verbose output.
    pub fn new(
        reads1: impl Into<PathBuf>,
        reads2: impl Into<PathBuf>,
        output_prefix: impl Into<PathBuf>,
        tool: impl Into<PathBuf>,
        adapters: impl Into<PathBuf>,
    ) -> Self {
        Self {
            reads1: reads1.into(),
            reads2: reads2.into(),
            output_prefix: output_prefix.into(),
            tool: tool.into(),
            adapters: adapters.into(),
            min_len: DEFAULT_MIN_LEN,
            threads: DEFAULT_THREADS,
            verbose: false,
            launcher: Launcher::Auto,
        }
    }

    /// Sets the minimum read length.
    #[must_use]
    pub fn with_min_len(mut self, min_len: NonZeroU32) -> Self {
        self.min_len = min_len;
        self
    }

    /// Sets the tool's thread count.
    #[must_use]
    pub fn with_threads(mut self, threads: NonZeroU32) -> Self {
        self.threads = threads;
        self
    }

    /// Enables or disables printing the command before it runs.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets how the tool is started.
    #[must_use]
    pub fn with_launcher(mut self, launcher: Launcher) -> Self {
        self.launcher = launcher;
        self
    }

    /// The four output paths derived from `output_prefix`.
    #[must_use]
    pub fn outputs(&self) -> OutputPaths {
        OutputPaths::from_prefix(&self.output_prefix)
    }
}
