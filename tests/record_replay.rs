//! Record-replay integration tests.
//!
//! Cassettes stand in for the trimming tool and the filesystem, so these
//! tests cover the runner's call sequence without spawning anything.

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use serde_json::json;

use pairtrim::cassette::config::CassetteConfig;
use pairtrim::cassette::recorder::CassetteRecorder;
use pairtrim::context::ServiceContext;
use pairtrim::trim::{run_trimming, run_trimming_with_report, TrimJob};
use pairtrim::TrimError;

fn sample_job() -> TrimJob {
    TrimJob::new("r1.fq", "r2.fq", "out/sample", "/bin/trimmer", "adapters.fa")
        .with_min_len(NonZeroU32::new(36).unwrap())
        .with_threads(NonZeroU32::new(4).unwrap())
}

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pairtrim_record_replay_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn record_run(recorder: &mut CassetteRecorder, exit_code: i32, stderr: &str) {
    recorder.record(
        "fs",
        "absolute",
        json!({"path": "adapters.fa"}),
        json!({"ok": "/data/adapters.fa"}),
    );
    recorder.record(
        "command",
        "run",
        json!({"program": "/bin/trimmer", "args": []}),
        json!({"ok": {"exit_code": exit_code, "stdout": "", "stderr": stderr}}),
    );
}

#[test]
fn replayed_success_removes_both_unpaired_outputs() {
    let dir = test_dir("success");
    let cassette_path = dir.join("success.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&cassette_path, "success", "abc123");
    record_run(&mut recorder, 0, "TrimmomaticPE: Completed successfully\n");
    let unpaired = json!({"path": "out/sample.unpaired_1.fq"});
    recorder.record("fs", "remove_file", unpaired, json!({"ok": null}));
    let unpaired = json!({"path": "out/sample.unpaired_2.fq"});
    recorder.record("fs", "remove_file", unpaired, json!({"ok": null}));
    recorder.finish().unwrap();

    let ctx = ServiceContext::replaying(&cassette_path).unwrap();
    let mut out = Vec::new();
    let pair = run_trimming_with_report(&ctx, &sample_job().with_verbose(true), &mut out).unwrap();

    assert_eq!(pair.reads1, Path::new("out/sample_1.fq"));
    assert_eq!(pair.reads2, Path::new("out/sample_2.fq"));
    let printed = String::from_utf8(out).unwrap();
    assert_eq!(printed.lines().count(), 1);
    assert!(printed.contains("ILLUMINACLIP:/data/adapters.fa:2:10:7:1 MINLEN:36"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn replayed_failure_skips_cleanup() {
    let dir = test_dir("failure");
    let cassette_path = dir.join("failure.cassette.yaml");

    // No fs::remove_file interactions: a cleanup attempt would panic the replayer.
    let mut recorder = CassetteRecorder::new(&cassette_path, "failure", "abc123");
    record_run(&mut recorder, 1, "Exception: adapters.fa not found\n");
    recorder.finish().unwrap();

    let ctx = ServiceContext::replaying(&cassette_path).unwrap();
    let err = run_trimming(&ctx, &sample_job()).unwrap_err();

    assert_eq!(err.exit_code(), Some(1));
    assert!(matches!(
        err,
        TrimError::ProcessExecution { ref stderr, .. } if stderr.contains("not found")
    ));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn replayed_cleanup_failure_surfaces_filesystem_error() {
    let dir = test_dir("cleanup");
    let cassette_path = dir.join("cleanup.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&cassette_path, "cleanup", "abc123");
    record_run(&mut recorder, 0, "");
    recorder.record(
        "fs",
        "remove_file",
        json!({"path": "out/sample.unpaired_1.fq"}),
        json!({"err": "No such file or directory (os error 2)"}),
    );
    recorder.finish().unwrap();

    let ctx = ServiceContext::replaying(&cassette_path).unwrap();
    let err = run_trimming(&ctx, &sample_job()).unwrap_err();

    match err {
        TrimError::Filesystem { path, source, .. } => {
            assert_eq!(path, Path::new("out/sample.unpaired_1.fq"));
            assert!(source.to_string().contains("No such file"));
        }
        other => panic!("unexpected error: {other}"),
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[cfg(unix)]
#[test]
fn live_recording_replays_identically() {
    let root = test_dir("live");
    let work = root.join("work");
    std::fs::create_dir_all(&work).unwrap();
    for name in ["s.unpaired_1.fq", "s.unpaired_2.fq"] {
        std::fs::write(work.join(name), "").unwrap();
    }
    // `true` ignores its arguments and exits 0, standing in for the tool.
    let job = TrimJob::new("r1.fq", "r2.fq", work.join("s"), "true", root.join("adapters.fa"));

    let (ctx, session) = ServiceContext::recording_at(&root.join("cassettes")).unwrap();
    let recorded = run_trimming(&ctx, &job).unwrap();
    drop(ctx);
    let session_dir = session.finish().unwrap();

    assert!(!work.join("s.unpaired_1.fq").exists());
    assert!(!work.join("s.unpaired_2.fq").exists());

    let config = CassetteConfig::from_session_dir(&session_dir);
    let replay_ctx = ServiceContext::replaying_from(&config).unwrap();
    let replayed = run_trimming(&replay_ctx, &job).unwrap();
    assert_eq!(recorded, replayed);

    let _ = std::fs::remove_dir_all(&root);
}
