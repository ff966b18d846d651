//! End-to-end tests driving the `makeversionhdr` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A throwaway git repository plus a separate output directory.
struct TestContext {
    repo: TempDir,
    out: TempDir,
    git: PathBuf,
}

impl TestContext {
    /// `None` when git is not installed.
    fn new() -> Option<Self> {
        let git = which::which("git").ok()?;
        let ctx = Self {
            repo: TempDir::new().expect("failed to create repo dir"),
            out: TempDir::new().expect("failed to create out dir"),
            git,
        };
        ctx.git(&["init", "-q"]);
        ctx.git(&["commit", "-q", "--allow-empty", "-m", "initial"]);
        Some(ctx)
    }

    fn git(&self, args: &[&str]) -> String {
        let output = Command::new(&self.git)
            .args([
                "-c",
                "user.name=Test",
                "-c",
                "user.email=test@example.com",
                "-c",
                "commit.gpgsign=false",
                "-c",
                "tag.gpgsign=false",
            ])
            .args(args)
            .current_dir(self.repo.path())
            .output()
            .expect("failed to run git");
        assert!(output.status.success(), "git {args:?}: {output:?}");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    fn dest(&self) -> PathBuf {
        self.out.path().join("mpversion.h")
    }

    fn run(&self) -> Output {
        makeversionhdr(self.repo.path(), &self.dest())
    }
}

fn makeversionhdr(repo: &Path, dest: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_makeversionhdr"))
        .arg("--repo-path")
        .arg(repo)
        .arg(dest)
        .env("SOURCE_DATE_EPOCH", "0")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run makeversionhdr")
}

#[test]
fn test_help_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_makeversionhdr"))
        .arg("--help")
        .output()
        .expect("failed to run makeversionhdr");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("--repo-path"));
}

#[test]
fn test_version_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_makeversionhdr"))
        .arg("--version")
        .output()
        .expect("failed to run makeversionhdr");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        format!("makeversionhdr {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_missing_dest_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_makeversionhdr"))
        .output()
        .expect("failed to run makeversionhdr");
    assert!(!output.status.success());
}

#[test]
fn test_not_a_repository_prints_guidance() {
    let repo = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let dest = out.path().join("mpversion.h");
    std::fs::write(&dest, "untouched").unwrap();

    let output = makeversionhdr(repo.path(), &dest);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot determine version."), "{stderr}");
    assert!(stderr.contains("make fetch-tags"), "{stderr}");
    assert!(output.stdout.is_empty());
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "untouched");
}

#[test]
fn test_untagged_repository_prints_guidance() {
    let Some(ctx) = TestContext::new() else {
        return;
    };

    let output = ctx.run();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fetch the tags"), "{stderr}");
    assert!(!ctx.dest().exists());
}

#[test]
fn test_tagged_repository_generates_header() {
    let Some(ctx) = TestContext::new() else {
        return;
    };
    ctx.git(&["tag", "v1.2.3"]);
    let hash = ctx.git(&["rev-parse", "--short", "HEAD"]);

    let output = ctx.run();
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, format!("GEN {}\n", ctx.dest().display()));

    let expected = format!(
        r#"// This file was generated by makeversionhdr
#define MICROPY_GIT_TAG "v1.2.3"
#define MICROPY_GIT_HASH "{hash}"
#define MICROPY_BUILD_DATE "1970-01-01"
#define MICROPY_VERSION_MAJOR (1)
#define MICROPY_VERSION_MINOR (2)
#define MICROPY_VERSION_MICRO (3)
#define MICROPY_VERSION_PRERELEASE 0
#define MICROPY_VERSION_STRING "1.2.3"
#define MICROPY_VERSION (MICROPY_VERSION_MAJOR << 16 | MICROPY_VERSION_MINOR << 8 | MICROPY_VERSION_MICRO)
#define MICROPY_FULL_VERSION_INFO "Adafruit CircuitPython " MICROPY_GIT_TAG " on " MICROPY_BUILD_DATE "; " MICROPY_BANNER_MACHINE
"#
    );
    assert_eq!(std::fs::read_to_string(ctx.dest()).unwrap(), expected);
}

#[test]
fn test_second_run_writes_nothing() {
    let Some(ctx) = TestContext::new() else {
        return;
    };
    ctx.git(&["tag", "9.0.0"]);

    let first = ctx.run();
    assert!(first.status.success(), "{first:?}");
    assert!(String::from_utf8_lossy(&first.stdout).starts_with("GEN "));

    let second = ctx.run();
    assert!(second.status.success(), "{second:?}");
    assert!(second.stdout.is_empty());
}

#[test]
fn test_commits_past_tag_keep_release_numbers() {
    let Some(ctx) = TestContext::new() else {
        return;
    };
    ctx.git(&["tag", "9.1.0-beta.2"]);
    ctx.git(&["commit", "-q", "--allow-empty", "-m", "next"]);

    let output = ctx.run();
    assert!(output.status.success(), "{output:?}");

    let header = std::fs::read_to_string(ctx.dest()).unwrap();
    assert!(header.contains("#define MICROPY_GIT_TAG \"9.1.0-beta.2-1-g"));
    assert!(header.contains("#define MICROPY_VERSION_STRING \"9.1.0\"\n"));
}

#[test]
fn test_staged_change_marks_hash_dirty() {
    let Some(ctx) = TestContext::new() else {
        return;
    };
    ctx.git(&["tag", "1.0.0"]);
    std::fs::write(ctx.repo.path().join("new.txt"), "x").unwrap();
    ctx.git(&["add", "new.txt"]);

    let output = ctx.run();
    assert!(output.status.success(), "{output:?}");

    let header = std::fs::read_to_string(ctx.dest()).unwrap();
    assert!(header.contains("-dirty\"\n#define MICROPY_BUILD_DATE"), "{header}");
    assert!(header.contains("#define MICROPY_VERSION_STRING \"1.0.0\"\n"));
}

#[test]
fn test_unstaged_change_marks_hash_dirty() {
    let Some(ctx) = TestContext::new() else {
        return;
    };
    let tracked = ctx.repo.path().join("tracked.txt");
    std::fs::write(&tracked, "one").unwrap();
    ctx.git(&["add", "tracked.txt"]);
    ctx.git(&["commit", "-q", "-m", "add tracked file"]);
    ctx.git(&["tag", "2.0.0"]);
    let hash = ctx.git(&["rev-parse", "--short", "HEAD"]);
    std::fs::write(&tracked, "two").unwrap();

    let output = ctx.run();
    assert!(output.status.success(), "{output:?}");

    let header = std::fs::read_to_string(ctx.dest()).unwrap();
    let dirty_hash = format!("#define MICROPY_GIT_HASH \"{hash}-dirty\"\n");
    assert!(header.contains(&dirty_hash), "{header}");
    assert!(header.contains("#define MICROPY_VERSION_STRING \"2.0.0\"\n"));
}

#[test]
fn test_clean_checkout_hash_not_dirty() {
    let Some(ctx) = TestContext::new() else {
        return;
    };
    ctx.git(&["tag", "2.0.0"]);
    let hash = ctx.git(&["rev-parse", "--short", "HEAD"]);

    let output = ctx.run();
    assert!(output.status.success(), "{output:?}");

    let header = std::fs::read_to_string(ctx.dest()).unwrap();
    assert!(header.contains(&format!("#define MICROPY_GIT_HASH \"{hash}\"\n")));
}

#[test]
fn test_untagged_with_invalid_epoch_prints_guidance() {
    let Some(ctx) = TestContext::new() else {
        return;
    };

    let output = Command::new(env!("CARGO_BIN_EXE_makeversionhdr"))
        .arg("-r")
        .arg(ctx.repo.path())
        .arg(ctx.dest())
        .env("SOURCE_DATE_EPOCH", "not-a-number")
        .output()
        .expect("failed to run makeversionhdr");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot determine version."), "{stderr}");
    assert!(!stderr.contains("not an integer"), "{stderr}");
    assert!(!ctx.dest().exists());
}

#[test]
fn test_invalid_source_date_epoch_fails() {
    let Some(ctx) = TestContext::new() else {
        return;
    };
    ctx.git(&["tag", "1.0.0"]);

    let output = Command::new(env!("CARGO_BIN_EXE_makeversionhdr"))
        .arg("-r")
        .arg(ctx.repo.path())
        .arg(ctx.dest())
        .env("SOURCE_DATE_EPOCH", "not-a-number")
        .output()
        .expect("failed to run makeversionhdr");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SOURCE_DATE_EPOCH"), "{stderr}");
    assert!(!ctx.dest().exists());
}
