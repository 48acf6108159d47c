//! Workspace-rooted path resolution
//!
//! All relative paths handed to the filesystem tools resolve under a single
//! workspace root fixed at startup. Relative resolution is sandboxed: the
//! joined path is lexically normalized and rejected if it escapes the root.
//! Absolute paths pass through unchanged and are trusted as-is.

use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Path resolution errors
#[derive(Debug, Error, PartialEq)]
pub enum WorkspaceError {
    #[error("workspace root must be an absolute path: {0}")]
    RootNotAbsolute(String),
    #[error("path escapes workspace root: {0}")]
    EscapesRoot(String),
}

/// The fixed base directory for relative file paths.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, WorkspaceError> {
        let root = root.into();
        if !root.is_absolute() {
            return Err(WorkspaceError::RootNotAbsolute(
                root.display().to_string(),
            ));
        }
        Ok(Self {
            root: normalize(&root),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a user-supplied path to an absolute path.
    ///
    /// Absolute input is returned unchanged. Relative input is joined under
    /// the workspace root; a relative path whose normalized form leaves the
    /// root (e.g. via `../` segments) is rejected.
    pub fn resolve(&self, raw: &str) -> Result<PathBuf, WorkspaceError> {
        let raw_path = Path::new(raw);
        if raw_path.is_absolute() {
            return Ok(raw_path.to_path_buf());
        }

        let resolved = normalize(&self.root.join(raw_path));
        if !resolved.starts_with(&self.root) {
            return Err(WorkspaceError::EscapesRoot(raw.to_string()));
        }
        Ok(resolved)
    }
}

/// Lexically normalize a path: drop `.` segments, fold `..` onto the parent.
/// Does not touch the filesystem, so unresolved symlinks stay unresolved.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> Workspace {
        Workspace::new("/srv/jernau/workspace").unwrap()
    }

    #[test]
    fn test_relative_root_rejected() {
        let result = Workspace::new("relative/root");
        assert!(matches!(result, Err(WorkspaceError::RootNotAbsolute(_))));
    }

    #[test]
    fn test_relative_path_joined_under_root() {
        let resolved = workspace().resolve("notes/today.md").unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/jernau/workspace/notes/today.md"));
    }

    #[test]
    fn test_absolute_path_passes_through() {
        let resolved = workspace().resolve("/etc/hostname").unwrap();
        assert_eq!(resolved, PathBuf::from("/etc/hostname"));
    }

    #[test]
    fn test_dot_segments_normalized() {
        let resolved = workspace().resolve("./notes/../MEMORY.md").unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/jernau/workspace/MEMORY.md"));
    }

    #[test]
    fn test_traversal_out_of_root_rejected() {
        let result = workspace().resolve("../outside.txt");
        assert_eq!(
            result,
            Err(WorkspaceError::EscapesRoot("../outside.txt".to_string()))
        );
    }

    #[test]
    fn test_deep_traversal_rejected() {
        let result = workspace().resolve("notes/../../../../etc/passwd");
        assert!(matches!(result, Err(WorkspaceError::EscapesRoot(_))));
    }
}
