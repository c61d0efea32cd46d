//! Tree node types

use serde::Serialize;

/// Kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Directory
    Directory,
    /// Regular text file
    File,
}

impl NodeKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Directory)
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// A directory or file stored in the tree.
///
/// Parent and child links are kept by the arena, not by the node, so a node
/// only carries its own name and (for files) its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    data: NodeData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeData {
    Directory,
    File { content: String },
}

impl Node {
    pub(crate) fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: NodeData::Directory,
        }
    }

    pub(crate) fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: NodeData::File {
                content: content.into(),
            },
        }
    }

    /// Name of the node. The root's name is empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node kind.
    pub fn kind(&self) -> NodeKind {
        match self.data {
            NodeData::Directory => NodeKind::Directory,
            NodeData::File { .. } => NodeKind::File,
        }
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.kind().is_file()
    }

    /// File content, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.data {
            NodeData::File { content } => Some(content),
            NodeData::Directory => None,
        }
    }

    /// Replace file content, returning the previous content.
    ///
    /// Returns `None` and leaves the node untouched for directories.
    pub(crate) fn replace_content(&mut self, new: String) -> Option<String> {
        match &mut self.data {
            NodeData::File { content } => Some(std::mem::replace(content, new)),
            NodeData::Directory => None,
        }
    }
}

/// Directory listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirEntry {
    /// Entry name (not full path)
    pub name: String,
    /// Entry kind
    pub kind: NodeKind,
}

impl From<&Node> for DirEntry {
    fn from(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            kind: node.kind(),
        }
    }
}
