//! Version metadata and the collaborator that discovers it.

use std::path::Path;

use crate::error::ResolveError;

/// Raw version metadata as reported by a [`VersionSource`].
///
/// Lives for a single generation run; nothing here is persisted except
/// through the rendered header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Most recent reachable tag, possibly with a leading `v`.
    pub tag: String,
    /// Abbreviated commit hash.
    pub hash: String,
    /// Dotted components of the tag, e.g. `["v1", "2", "3"]`.
    pub components: Vec<String>,
}

impl VersionInfo {
    /// Build a `VersionInfo` from anything string-like.
    pub fn new(
        tag: impl Into<String>,
        hash: impl Into<String>,
        components: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            tag: tag.into(),
            hash: hash.into(),
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    /// The major/minor/micro triple, or `None` with fewer than three components.
    pub fn numbers(&self) -> Option<VersionNumbers> {
        VersionNumbers::from_components(&self.components)
    }
}

/// Major, minor and micro numbers as substituted into the header.
///
/// Values are kept as text: they are spliced into the template verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionNumbers {
    /// Major number, leading `v` already stripped.
    pub major: String,
    /// Minor number.
    pub minor: String,
    /// Micro number.
    pub micro: String,
}

impl VersionNumbers {
    /// Take the first three components, stripping one leading `v` from the major.
    ///
    /// Components past the third are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use mkverhdr_core::VersionNumbers;
    ///
    /// let n = VersionNumbers::from_components(&["v9", "2", "1", "rc"]).unwrap();
    /// assert_eq!(n.to_string(), "9.2.1");
    /// assert!(VersionNumbers::from_components(&["9", "2"]).is_none());
    /// ```
    pub fn from_components<S: AsRef<str>>(components: &[S]) -> Option<Self> {
        match components {
            [major, minor, micro, ..] => {
                let major = major.as_ref();
                Some(Self {
                    major: major.strip_prefix('v').unwrap_or(major).to_string(),
                    minor: minor.as_ref().to_string(),
                    micro: micro.as_ref().to_string(),
                })
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for VersionNumbers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// Capability: given a repository path, report its version info.
pub trait VersionSource {
    /// Resolve version info for the repository at `repo`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] when the repository cannot be queried.
    fn resolve(&self, repo: &Path) -> Result<VersionInfo, ResolveError>;
}

impl<T: VersionSource + ?Sized> VersionSource for &T {
    fn resolve(&self, repo: &Path) -> Result<VersionInfo, ResolveError> {
        (**self).resolve(repo)
    }
}

impl<T: VersionSource + ?Sized> VersionSource for Box<T> {
    fn resolve(&self, repo: &Path) -> Result<VersionInfo, ResolveError> {
        (**self).resolve(repo)
    }
}
