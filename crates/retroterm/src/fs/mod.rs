//! Virtual file system for retroterm
//!
//! - `VirtualFileSystem`: the in-memory tree plus the working-directory cursor
//! - `FsLimits`: bounds applied to every mutation
//! - `Node` / `DirEntry`: what the tree stores and what listings return

mod limits;
mod memory;
mod node;

pub use indextree::NodeId;
pub use limits::{FsLimitExceeded, FsLimits, FsUsage};
pub use memory::{SEPARATOR, VirtualFileSystem};
pub use node::{DirEntry, Node, NodeKind};
