//! The argument vector handed to the trimming tool.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use super::job::{Launcher, TrimJob};

/// `seedMismatches:palindromeClipThreshold:simpleClipThreshold:minAdapterLength`
/// for the `ILLUMINACLIP` step.
pub const ADAPTER_CLIP_SETTINGS: &str = "2:10:7:1";

/// Output files the tool writes for a given prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `{prefix}_1.fq`, kept.
    pub paired_1: PathBuf,
    /// `{prefix}.unpaired_1.fq`, removed after a successful run.
    pub unpaired_1: PathBuf,
    /// `{prefix}_2.fq`, kept.
    pub paired_2: PathBuf,
    /// `{prefix}.unpaired_2.fq`, removed after a successful run.
    pub unpaired_2: PathBuf,
}

impl OutputPaths {
    /// Derives the four output paths from `prefix`.
    #[must_use]
    pub fn from_prefix(prefix: &Path) -> Self {
        Self {
            paired_1: suffixed(prefix, "_1.fq"),
            unpaired_1: suffixed(prefix, ".unpaired_1.fq"),
            paired_2: suffixed(prefix, "_2.fq"),
            unpaired_2: suffixed(prefix, ".unpaired_2.fq"),
        }
    }

    /// The two unpaired outputs, in deletion order.
    #[must_use]
    pub fn unpaired(&self) -> [&Path; 2] {
        [&self.unpaired_1, &self.unpaired_2]
    }
}

fn suffixed(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path = prefix.as_os_str().to_owned();
    path.push(suffix);
    PathBuf::from(path)
}

fn concat(parts: &[&OsStr]) -> OsString {
    let mut out = OsString::new();
    for part in parts {
        out.push(part);
    }
    out
}

/// A program plus its arguments, in the order the tool's parser expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<OsString>,
}

impl Invocation {
    /// Builds the paired-end invocation for `job`.
    ///
    /// `adapters` must already be absolute; the tool resolves it relative to
    /// its own working directory otherwise.
    #[must_use]
    pub fn build(job: &TrimJob, adapters: &Path) -> Self {
        let (program, mut args) = match job.launcher.resolve(&job.tool) {
            Launcher::Java { java, max_heap } => (
                java.into_os_string(),
                vec![
                    concat(&[OsStr::new("-Xmx"), OsStr::new(&max_heap)]),
                    "-jar".into(),
                    job.tool.clone().into_os_string(),
                ],
            ),
            Launcher::Direct | Launcher::Auto => (job.tool.clone().into_os_string(), Vec::new()),
        };

        let outputs = job.outputs();
        args.extend([
            "PE".into(),
            "-threads".into(),
            job.threads.to_string().into(),
            job.reads1.clone().into_os_string(),
            job.reads2.clone().into_os_string(),
            outputs.paired_1.into_os_string(),
            outputs.unpaired_1.into_os_string(),
            outputs.paired_2.into_os_string(),
            outputs.unpaired_2.into_os_string(),
            concat(&[
                OsStr::new("ILLUMINACLIP:"),
                adapters.as_os_str(),
                OsStr::new(":"),
                OsStr::new(ADAPTER_CLIP_SETTINGS),
            ]),
            format!("MINLEN:{}", job.min_len).into(),
        ]);

        Self { program, args }
    }

    /// The executable to start.
    #[must_use]
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Arguments after the program.
    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    fn sample_job() -> TrimJob {
        TrimJob::new("r1.fq", "r2.fq", "out/sample", "/bin/trimmer", "adapters.fa")
            .with_min_len(NonZeroU32::new(36).unwrap())
            .with_threads(NonZeroU32::new(4).unwrap())
    }

    fn strings(invocation: &Invocation) -> Vec<String> {
        invocation.args().iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn direct_invocation_matches_tool_layout() {
        let invocation = Invocation::build(&sample_job(), Path::new("/abs/path/adapters.fa"));

        assert_eq!(invocation.program(), OsStr::new("/bin/trimmer"));
        assert_eq!(
            strings(&invocation),
            [
                "PE",
                "-threads",
                "4",
                "r1.fq",
                "r2.fq",
                "out/sample_1.fq",
                "out/sample.unpaired_1.fq",
                "out/sample_2.fq",
                "out/sample.unpaired_2.fq",
                "ILLUMINACLIP:/abs/path/adapters.fa:2:10:7:1",
                "MINLEN:36",
            ]
        );
    }

    #[test]
    fn jar_tool_is_started_through_java() {
        let job = TrimJob::new("a.fq", "b.fq", "p", "/opt/trimmomatic.jar", "ad.fa");
        let invocation = Invocation::build(&job, Path::new("/x/ad.fa"));

        assert_eq!(invocation.program(), OsStr::new("java"));
        let args = strings(&invocation);
        assert_eq!(args[..4], ["-Xmx1000m", "-jar", "/opt/trimmomatic.jar", "PE"]);
        assert_eq!(args.last().map(String::as_str), Some("MINLEN:50"));
    }

    #[test]
    fn custom_java_launcher() {
        let job = TrimJob::new("a.fq", "b.fq", "p", "trim.jar", "ad.fa").with_launcher(
            Launcher::Java { java: "/jdk/bin/java".into(), max_heap: "4g".into() },
        );
        let invocation = Invocation::build(&job, Path::new("/x/ad.fa"));

        assert_eq!(invocation.program(), OsStr::new("/jdk/bin/java"));
        assert_eq!(strings(&invocation)[0], "-Xmx4g");
    }

    #[test]
    fn paths_with_spaces_stay_single_arguments() {
        let job = TrimJob::new("my reads/r1.fq", "my reads/r2.fq", "out dir/s", "/bin/t", "a.fa");
        let invocation = Invocation::build(&job, Path::new("/x y/a.fa"));
        let args = strings(&invocation);

        assert_eq!(args[3], "my reads/r1.fq");
        assert_eq!(args[5], "out dir/s_1.fq");
        assert_eq!(args[9], "ILLUMINACLIP:/x y/a.fa:2:10:7:1");
    }

    #[test]
    fn display_joins_program_and_args() {
        let invocation = Invocation::build(&sample_job(), Path::new("/abs/path/adapters.fa"));
        assert_eq!(
            invocation.to_string(),
            "/bin/trimmer PE -threads 4 r1.fq r2.fq out/sample_1.fq out/sample.unpaired_1.fq \
             out/sample_2.fq out/sample.unpaired_2.fq ILLUMINACLIP:/abs/path/adapters.fa:2:10:7:1 \
             MINLEN:36"
        );
    }

    #[test]
    fn output_paths_append_to_prefix() {
        let outputs = OutputPaths::from_prefix(Path::new("/tmp/run.v2"));
        assert_eq!(outputs.paired_1, PathBuf::from("/tmp/run.v2_1.fq"));
        assert_eq!(outputs.unpaired_2, PathBuf::from("/tmp/run.v2.unpaired_2.fq"));
        assert_eq!(
            outputs.unpaired(),
            [Path::new("/tmp/run.v2.unpaired_1.fq"), Path::new("/tmp/run.v2.unpaired_2.fq")]
        );
    }
}
