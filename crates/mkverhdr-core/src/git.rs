//! Version resolution by shelling out to `git`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::{debug, warn};

use crate::error::ResolveError;
use crate::version::{VersionInfo, VersionSource};

/// Hash reported when `git rev-parse` fails but the tag was found.
const UNKNOWN_HASH: &str = "unknown";

/// Queries a checkout with the `git` command line.
///
/// - tag: `git describe --tags --dirty --always`
/// - hash: `git rev-parse --short HEAD`, suffixed `-dirty` when the work tree
///   or index has changes
/// - components: the tag up to its first `-`, split on `.`
#[derive(Debug, Clone, Default)]
pub struct GitVersionSource {
    program: Option<PathBuf>,
}

impl GitVersionSource {
    /// Use the first `git` found on `PATH` at resolve time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific `git` executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: Some(program.into()),
        }
    }

    fn program(&self) -> Result<PathBuf, ResolveError> {
        match &self.program {
            Some(p) => Ok(p.clone()),
            None => Ok(which::which("git")?),
        }
    }

    fn command(git: &Path, repo: &Path, args: &[&str]) -> Command {
        debug!("running git {} in {}", args.join(" "), repo.display());
        let mut cmd = Command::new(git);
        cmd.args(args).current_dir(repo).stdin(Stdio::null());
        cmd
    }

    /// Run git and capture its output, failing only if it cannot be spawned.
    fn output(git: &Path, repo: &Path, args: &[&str]) -> Result<Output, ResolveError> {
        Self::command(git, repo, args)
            .output()
            .map_err(|source| ResolveError::Spawn {
                args: args.join(" "),
                source,
            })
    }

    /// Run git for its exit status alone.
    fn succeeds(git: &Path, repo: &Path, args: &[&str]) -> Result<bool, ResolveError> {
        let status = Self::command(git, repo, args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| ResolveError::Spawn {
                args: args.join(" "),
                source,
            })?;
        Ok(status.success())
    }

    fn stdout_line(args: &[&str], output: Output) -> Result<String, ResolveError> {
        String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .map_err(|_| ResolveError::Utf8 {
                args: args.join(" "),
            })
    }

    fn describe(git: &Path, repo: &Path) -> Result<String, ResolveError> {
        let args = ["describe", "--tags", "--dirty", "--always"];
        let output = Self::output(git, repo, &args)?;
        if !output.status.success() {
            return Err(ResolveError::Command {
                args: args.join(" "),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Self::stdout_line(&args, output)
    }

    fn short_hash(git: &Path, repo: &Path) -> Result<String, ResolveError> {
        let args = ["rev-parse", "--short", "HEAD"];
        let output = Self::output(git, repo, &args)?;
        if !output.status.success() {
            warn!(
                "git rev-parse failed ({}), using '{UNKNOWN_HASH}'",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Ok(UNKNOWN_HASH.to_string());
        }
        Self::stdout_line(&args, output)
    }

    fn is_dirty(git: &Path, repo: &Path) -> Result<bool, ResolveError> {
        // Unstaged changes first, then staged ones.
        let unstaged = ["diff", "--no-ext-diff", "--quiet", "--exit-code"];
        if !Self::succeeds(git, repo, &unstaged)? {
            return Ok(true);
        }
        let staged = ["diff-index", "--cached", "--quiet", "HEAD", "--"];
        Ok(!Self::succeeds(git, repo, &staged)?)
    }
}

impl VersionSource for GitVersionSource {
    fn resolve(&self, repo: &Path) -> Result<VersionInfo, ResolveError> {
        let git = self.program()?;

        let tag = Self::describe(&git, repo)?;
        let mut hash = Self::short_hash(&git, repo)?;
        if Self::is_dirty(&git, repo)? {
            hash.push_str("-dirty");
        }
        let components = tag_components(&tag);

        debug!(%tag, %hash, ?components, "resolved version from git");
        Ok(VersionInfo {
            tag,
            hash,
            components,
        })
    }
}

/// Split a `git describe` tag into its dotted release components.
///
/// Everything from the first `-` on (commits-ahead count, abbreviated hash,
/// `dirty` marker, pre-release label) is dropped.
///
/// # Example
///
/// ```
/// use mkverhdr_core::git::tag_components;
///
/// assert_eq!(tag_components("v1.2.3-4-gabcdef0-dirty"), ["v1", "2", "3"]);
/// assert_eq!(tag_components("abcdef0"), ["abcdef0"]);
/// ```
pub fn tag_components(tag: &str) -> Vec<String> {
    let release = tag.split('-').next().unwrap_or_default();
    release.split('.').map(str::to_string).collect()
}
