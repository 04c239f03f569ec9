//! Simulated File System
//!
//! A read-only tree of directories and text files mounted at the home
//! directory. Commands never write to it; the only operations are path
//! normalization and lookup.
//!
//! Paths come in two shapes:
//! - segment lists, resolved by [`Filesystem::resolve`] starting at a node
//! - absolute slash-delimited strings, resolved by [`Filesystem::lookup`]
//!   after [`normalize_path`] has folded `.` and `..`

pub mod content;
pub mod memory;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use once_cell::race::OnceBox;

use crate::config::HOME_DIR;

pub use memory::{FsNode, NodeKind};

// ============================================================================
// Error Types
// ============================================================================

/// Filesystem error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    /// File or directory not found
    NotFound,
    /// Path is not a directory
    NotADirectory,
    /// Path is not a file
    NotAFile,
    /// Two siblings share a name
    AlreadyExists,
}

impl core::fmt::Display for FsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FsError::NotFound => write!(f, "No such file or directory"),
            FsError::NotADirectory => write!(f, "Not a directory"),
            FsError::NotAFile => write!(f, "Is a directory"),
            FsError::AlreadyExists => write!(f, "Already exists"),
        }
    }
}

// ============================================================================
// Filesystem
// ============================================================================

/// The mounted tree
pub struct Filesystem {
    root: FsNode,
}

impl Filesystem {
    /// Wrap a root node (mounted at the home directory)
    pub fn new(root: FsNode) -> Self {
        Self { root }
    }

    /// The home directory node
    pub fn root(&self) -> &FsNode {
        &self.root
    }

    /// Resolve a segment list from the root
    pub fn resolve(&self, segments: &[&str]) -> Option<&FsNode> {
        self.resolve_from(&self.root, segments)
    }

    /// Resolve a segment list starting at `from`
    ///
    /// `~` and empty segments jump back to the root and continue from there.
    /// Segments left over after a file never resolve.
    pub fn resolve_from<'a>(&'a self, from: &'a FsNode, segments: &[&str]) -> Option<&'a FsNode> {
        let mut current = from;
        for segment in segments {
            if !current.is_dir() {
                return None;
            }
            if segment.is_empty() || *segment == "~" {
                current = &self.root;
                continue;
            }
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Resolve an absolute, normalized path
    ///
    /// Only paths at or below the home directory exist.
    pub fn lookup(&self, path: &str) -> Option<&FsNode> {
        let rest = path.strip_prefix(HOME_DIR)?;
        if rest.is_empty() {
            return Some(&self.root);
        }
        let rest = rest.strip_prefix('/')?;
        let segments: Vec<&str> = rest.split('/').collect();
        self.resolve(&segments)
    }

    /// Resolve an absolute path that must name a directory
    pub fn directory(&self, path: &str) -> Result<&FsNode, FsError> {
        let node = self.lookup(path).ok_or(FsError::NotFound)?;
        if node.is_dir() {
            Ok(node)
        } else {
            Err(FsError::NotADirectory)
        }
    }

    /// Resolve an absolute path that must name a file, returning its content
    pub fn read_file(&self, path: &str) -> Result<&str, FsError> {
        let node = self.lookup(path).ok_or(FsError::NotFound)?;
        node.content().ok_or(FsError::NotAFile)
    }
}

/// The shared home file system, built on first use
pub fn filesystem() -> &'static Filesystem {
    static FS: OnceBox<Filesystem> = OnceBox::new();
    FS.get_or_init(|| {
        let root = match content::build_home_tree() {
            Ok(root) => root,
            Err(e) => {
                log::warn!("home tree rejected ({}), mounting an empty home", e);
                FsNode::empty_dir("rahil")
            }
        };
        Box::new(Filesystem::new(root))
    })
}

// ============================================================================
// Path Helpers
// ============================================================================

/// Normalize a path (resolve . and ..)
///
/// `..` never climbs above `/`. A trailing `~` segment is left for
/// [`Filesystem::resolve`] to interpret.
pub fn normalize_path(path: &str) -> String {
    let mut components: Vec<&str> = Vec::new();

    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            c => {
                components.push(c);
            }
        }
    }

    if components.is_empty() {
        String::from("/")
    } else {
        let mut result = String::new();
        for c in components {
            result.push('/');
            result.push_str(c);
        }
        result
    }
}

/// Last path segment, used for the prompt location
pub fn basename(path: &str) -> &str {
    path.rsplit('/').find(|s| !s.is_empty()).unwrap_or("/")
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_project_file() {
        let fs = filesystem();
        let node = fs.resolve(&["projects", "project-1.txt"]);
        assert!(node.is_some_and(|n| n.content().is_some_and(|c| !c.is_empty())));
    }

    #[test]
    fn test_resolve_missing_file() {
        assert!(filesystem().resolve(&["projects", "nonexistent.txt"]).is_none());
    }

    #[test]
    fn test_resolve_past_file() {
        assert!(
            filesystem()
                .resolve(&["projects", "project-1.txt", "extra"])
                .is_none()
        );
    }

    #[test]
    fn test_resolve_tilde_resets_to_home() {
        let fs = filesystem();
        let node = fs.resolve(&["projects", "~", "contact"]);
        assert_eq!(node.map(|n| n.name()), Some("contact"));
    }

    #[test]
    fn test_resolve_empty_path_is_root() {
        let fs = filesystem();
        assert_eq!(fs.resolve(&[]).map(|n| n.name()), Some("rahil"));
    }

    #[test]
    fn test_lookup_absolute() {
        let fs = filesystem();
        assert!(fs.lookup("/home/rahil").is_some_and(|n| n.is_dir()));
        assert!(fs.lookup("/home/rahil/projects").is_some_and(|n| n.is_dir()));
        assert!(fs.lookup("/home").is_none());
        assert!(fs.lookup("/home/rahilx").is_none());
    }

    #[test]
    fn test_read_file_on_directory() {
        assert_eq!(
            filesystem().read_file("/home/rahil/projects"),
            Err(FsError::NotAFile)
        );
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/home/rahil/projects/.."), "/home/rahil");
        assert_eq!(normalize_path("/home/./rahil//contact"), "/home/rahil/contact");
        assert_eq!(normalize_path("/../.."), "/");
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("/home/rahil/projects"), "projects");
        assert_eq!(basename("/"), "/");
    }
}
