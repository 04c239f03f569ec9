//! In-Memory Tree
//!
//! The node type behind the simulated file system. The tree is built once,
//! never mutated afterwards, and handed out by shared reference.

use alloc::string::String;
use alloc::vec::Vec;

use super::FsError;

// ============================================================================
// File System Node
// ============================================================================

/// What a node is, and what it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A file with static text content
    File { content: String },
    /// A directory with ordered children
    Directory { children: Vec<FsNode> },
}

/// A node in the file system tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsNode {
    name: String,
    kind: NodeKind,
}

impl FsNode {
    /// Create a file node
    pub fn file(name: &str, content: &str) -> Self {
        Self {
            name: String::from(name),
            kind: NodeKind::File {
                content: String::from(content),
            },
        }
    }

    /// Create a directory node with no children
    pub fn empty_dir(name: &str) -> Self {
        Self {
            name: String::from(name),
            kind: NodeKind::Directory {
                children: Vec::new(),
            },
        }
    }

    /// Create a directory node, rejecting duplicate child names
    pub fn dir(name: &str, children: Vec<FsNode>) -> Result<Self, FsError> {
        for (i, child) in children.iter().enumerate() {
            if children[..i].iter().any(|c| c.name == child.name) {
                return Err(FsError::AlreadyExists);
            }
        }
        Ok(Self {
            name: String::from(name),
            kind: NodeKind::Directory { children },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// File content, `None` for directories
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => Some(content),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Children in insertion order, `None` for files
    pub fn children(&self) -> Option<&[FsNode]> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// Find a direct child by exact name
    pub fn child(&self, name: &str) -> Option<&FsNode> {
        self.children()?.iter().find(|c| c.name == name)
    }

    /// Count (directories, files) below this node, not counting itself
    pub fn count(&self) -> (usize, usize) {
        let mut dirs = 0;
        let mut files = 0;
        if let Some(children) = self.children() {
            for child in children {
                if child.is_dir() {
                    dirs += 1;
                    let (d, f) = child.count();
                    dirs += d;
                    files += f;
                } else {
                    files += 1;
                }
            }
        }
        (dirs, files)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_dir_rejects_duplicate_names() {
        let result = FsNode::dir("d", vec![FsNode::file("a", "1"), FsNode::file("a", "2")]);
        assert_eq!(result, Err(FsError::AlreadyExists));
    }

    #[test]
    fn test_only_files_carry_content() {
        let file = FsNode::file("a.txt", "hello");
        let dir = FsNode::empty_dir("d");
        assert_eq!(file.content(), Some("hello"));
        assert!(file.children().is_none());
        assert!(dir.content().is_none());
        assert_eq!(dir.children().map(|c| c.len()), Some(0));
    }

    #[test]
    fn test_count_nested() {
        let inner = FsNode::dir("inner", vec![FsNode::file("x", ""), FsNode::file("y", "")]);
        let root = inner.and_then(|inner| FsNode::dir("root", vec![inner, FsNode::file("z", "")]));
        assert_eq!(root.map(|r| r.count()), Ok((1, 3)));
    }
}
