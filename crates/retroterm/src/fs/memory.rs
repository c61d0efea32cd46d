//! In-memory file tree with a working-directory cursor

use indextree::{Arena, NodeId};

use super::limits::{FsLimits, FsUsage};
use super::node::{DirEntry, Node};
use crate::error::PathError;

/// Path segment separator.
pub const SEPARATOR: char = '/';

type Result<T> = std::result::Result<T, PathError>;

/// In-memory virtual file system.
///
/// Owns every node of the tree through an arena. The cursor (current working
/// directory) and home are plain [`NodeId`] handles into that arena. Nodes are
/// only ever appended as fresh children and never re-parented, so the tree
/// stays acyclic.
///
/// Every operation either fully applies or leaves the tree and cursor exactly
/// as they were.
///
/// # Example
///
/// ```rust
/// use retroterm::VirtualFileSystem;
///
/// let mut fs = VirtualFileSystem::new();
/// fs.make_directory("docs", false).unwrap();
/// fs.change_directory("docs").unwrap();
/// fs.touch_file("note.txt").unwrap();
///
/// assert_eq!(fs.current_path(), "/docs");
/// assert_eq!(fs.read_file("note.txt").unwrap(), "");
/// ```
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    arena: Arena<Node>,
    root: NodeId,
    home: NodeId,
    cwd: NodeId,
    limits: FsLimits,
    usage: FsUsage,
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFileSystem {
    /// Create an empty tree (root only) with default limits.
    pub fn new() -> Self {
        Self::with_limits(FsLimits::default())
    }

    /// Create an empty tree with custom limits.
    pub fn with_limits(limits: FsLimits) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(Node::directory(""));

        Self {
            arena,
            root,
            home: root,
            cwd: root,
            limits,
            usage: FsUsage {
                dir_count: 1,
                ..FsUsage::default()
            },
        }
    }

    /// Root directory handle.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Home directory handle.
    pub fn home(&self) -> NodeId {
        self.home
    }

    /// Current working directory handle.
    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    /// Configured limits.
    pub fn limits(&self) -> &FsLimits {
        &self.limits
    }

    /// Current usage statistics.
    pub fn usage(&self) -> &FsUsage {
        &self.usage
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this file system.
    pub fn node(&self, id: NodeId) -> &Node {
        self.arena[id].get()
    }

    /// Look up a direct child of `dir` by name.
    pub fn child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        dir.children(&self.arena)
            .find(|&child| self.arena[child].get().name() == name)
    }

    /// Make an existing directory the home directory.
    pub fn set_home(&mut self, input: &str) -> Result<()> {
        let target = self.resolve_path(input)?;
        if self.node(target).is_file() {
            return Err(PathError::NotADirectory(input.to_string()));
        }
        self.home = target;
        Ok(())
    }

    /// Resolve a path string to a node.
    ///
    /// Absolute paths start at root, `~` paths at home, anything else at the
    /// cursor. `.` stays put, `..` moves to the parent (clamped at root), and
    /// empty segments are skipped. An empty input resolves to root.
    pub fn resolve_path(&self, input: &str) -> Result<NodeId> {
        let (start, rest) = self.split_start(input);

        let mut current = start;
        for segment in segments(rest) {
            current = self.step(current, segment)?;
        }

        // `f.txt/` names a directory
        let node = self.node(current);
        if input.ends_with(SEPARATOR) && node.is_file() {
            return Err(PathError::NotADirectory(node.name().to_string()));
        }

        #[cfg(feature = "logging")]
        tracing::trace!(input, resolved = %self.path_of(current), "resolved path");

        Ok(current)
    }

    /// Move the cursor to the directory `input` resolves to.
    ///
    /// This is the only way the cursor changes.
    pub fn change_directory(&mut self, input: &str) -> Result<()> {
        let target = self.resolve_path(input)?;
        if self.node(target).is_file() {
            return Err(PathError::NotADirectory(input.to_string()));
        }
        self.cwd = target;
        Ok(())
    }

    /// List a directory in insertion order, or the cursor when `input` is
    /// `None`.
    ///
    /// A path that resolves to a file lists that single file.
    pub fn list_children(&self, input: Option<&str>) -> Result<Vec<DirEntry>> {
        let target = match input {
            Some(path) => self.resolve_path(path)?,
            None => self.cwd,
        };

        let node = self.node(target);
        if node.is_file() {
            return Ok(vec![DirEntry::from(node)]);
        }

        Ok(target
            .children(&self.arena)
            .map(|child| DirEntry::from(self.node(child)))
            .collect())
    }

    /// Create a directory.
    ///
    /// With `parents` set, every missing segment along the way is created
    /// and segments that already exist as directories are skipped, including
    /// the last one. Otherwise the parent must exist and the name must be free.
    pub fn make_directory(&mut self, input: &str, parents: bool) -> Result<()> {
        self.make_directories(&[input], parents)
    }

    /// Create several directories in order.
    ///
    /// All or nothing: if one path fails, every directory created by this
    /// call is removed again before the error is returned.
    pub fn make_directories<S: AsRef<str>>(&mut self, inputs: &[S], parents: bool) -> Result<()> {
        self.create_all(inputs, |fs, input, created| {
            if parents {
                fs.make_directory_all(input, created)
            } else {
                fs.make_directory_one(input, created)
            }
        })
    }

    /// Create an empty file, or do nothing if a file of that name exists.
    pub fn touch_file(&mut self, input: &str) -> Result<()> {
        self.touch_files(&[input])
    }

    /// Touch several files in order, all or nothing.
    pub fn touch_files<S: AsRef<str>>(&mut self, inputs: &[S]) -> Result<()> {
        self.create_all(inputs, |fs, input, created| {
            let (parent, name) = fs.file_target(input)?;
            match fs.child(parent, name) {
                Some(existing) if fs.node(existing).is_file() => Ok(()),
                Some(_) => Err(PathError::AlreadyExists(name.to_string())),
                None => {
                    let id = fs.insert_child(parent, Node::file(name, String::new()))?;
                    created.push(id);
                    Ok(())
                }
            }
        })
    }

    /// Create a file with `content`, or replace an existing file's content.
    pub fn write_file(&mut self, input: &str, content: impl Into<String>) -> Result<()> {
        let content = content.into();
        let (parent, name) = self.file_target(input)?;

        let Some(existing) = self.child(parent, name) else {
            self.insert_child(parent, Node::file(name, content))?;
            return Ok(());
        };

        if self.node(existing).is_dir() {
            return Err(PathError::IsADirectory(input.to_string()));
        }
        self.limits
            .check_file_size(content.len() as u64)
            .inspect_err(|_e| {
                #[cfg(feature = "logging")]
                tracing::warn!(error = %_e, "write rejected by limits");
            })?;

        let new_len = content.len() as u64;
        if let Some(old) = self.arena[existing].get_mut().replace_content(content) {
            self.usage.total_bytes = self.usage.total_bytes - old.len() as u64 + new_len;
        }
        Ok(())
    }

    /// Read a file's content.
    pub fn read_file(&self, input: &str) -> Result<String> {
        let target = self.resolve_path(input)?;
        self.node(target)
            .content()
            .map(str::to_string)
            .ok_or_else(|| PathError::IsADirectory(input.to_string()))
    }

    /// Render the cursor as an absolute path.
    pub fn current_path(&self) -> String {
        self.path_of(self.cwd)
    }

    /// Render any node as an absolute path; root is `/`.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut names: Vec<&str> = id
            .ancestors(&self.arena)
            .map(|ancestor| self.arena[ancestor].get().name())
            .collect();
        // drop root
        names.pop();

        if names.is_empty() {
            return SEPARATOR.to_string();
        }

        names.reverse();
        let mut path = String::new();
        for name in names {
            path.push(SEPARATOR);
            path.push_str(name);
        }
        path
    }

    /// Depth below root (root is 0).
    pub fn depth(&self, id: NodeId) -> usize {
        id.ancestors(&self.arena).count() - 1
    }

    fn split_start<'a>(&self, input: &'a str) -> (NodeId, &'a str) {
        if let Some(rest) = input.strip_prefix(SEPARATOR) {
            (self.root, rest)
        } else if let Some(rest) = input.strip_prefix('~') {
            (self.home, rest)
        } else if input.is_empty() {
            (self.root, input)
        } else {
            (self.cwd, input)
        }
    }

    fn step(&self, current: NodeId, segment: &str) -> Result<NodeId> {
        let node = self.node(current);
        if node.is_file() {
            return Err(PathError::NotADirectory(node.name().to_string()));
        }

        match segment {
            "." => Ok(current),
            ".." => Ok(self.arena[current].parent().unwrap_or(current)),
            name => self
                .child(current, name)
                .ok_or_else(|| PathError::NotFound(name.to_string())),
        }
    }

    /// Split `input` into the directory that will hold a new entry and the
    /// new entry's name.
    fn split_parent<'a>(&self, input: &'a str) -> Result<(NodeId, &'a str)> {
        let trimmed = input.trim_end_matches(SEPARATOR);
        if trimmed.is_empty() {
            return Err(if input.is_empty() {
                PathError::InvalidName(String::new())
            } else {
                PathError::AlreadyExists(SEPARATOR.to_string())
            });
        }

        let (parent, name) = match trimmed.rfind(SEPARATOR) {
            Some(idx) => {
                let parent_path = &trimmed[..idx.max(1)];
                let parent = self.resolve_path(parent_path)?;
                if self.node(parent).is_file() {
                    return Err(PathError::NotADirectory(parent_path.to_string()));
                }
                (parent, &trimmed[idx + 1..])
            }
            // `~name` resolves under home, so it is created there too
            None => match trimmed.strip_prefix('~') {
                Some("") => return Err(PathError::AlreadyExists(trimmed.to_string())),
                Some(rest) => (self.home, rest),
                None => (self.cwd, trimmed),
            },
        };

        if name == "." || name == ".." {
            return Err(PathError::AlreadyExists(name.to_string()));
        }

        Ok((parent, name))
    }

    /// Like [`split_parent`](Self::split_parent) for paths that must name a
    /// file. A trailing separator can only name a directory.
    fn file_target<'a>(&self, input: &'a str) -> Result<(NodeId, &'a str)> {
        let (parent, name) = self.split_parent(input)?;
        if input.ends_with(SEPARATOR) {
            match self.child(parent, name) {
                Some(existing) if self.node(existing).is_file() => {
                    return Err(PathError::NotADirectory(name.to_string()));
                }
                None => return Err(PathError::NotFound(name.to_string())),
                Some(_) => {}
            }
        }
        Ok((parent, name))
    }

    /// Run `create` for every input, collecting the nodes it inserts. On the
    /// first failure the collected nodes are discarded, newest first.
    fn create_all<S, F>(&mut self, inputs: &[S], mut create: F) -> Result<()>
    where
        S: AsRef<str>,
        F: FnMut(&mut Self, &str, &mut Vec<NodeId>) -> Result<()>,
    {
        let mut created = Vec::new();
        for input in inputs {
            if let Err(e) = create(&mut *self, input.as_ref(), &mut created) {
                // children before parents
                for id in created.into_iter().rev() {
                    self.discard(id);
                }
                return Err(e);
            }
        }
        Ok(())
    }

    fn make_directory_one(&mut self, input: &str, created: &mut Vec<NodeId>) -> Result<()> {
        let (parent, name) = self.split_parent(input)?;
        if self.child(parent, name).is_some() {
            return Err(PathError::AlreadyExists(name.to_string()));
        }
        let id = self.insert_child(parent, Node::directory(name))?;
        created.push(id);
        Ok(())
    }

    fn make_directory_all(&mut self, input: &str, created: &mut Vec<NodeId>) -> Result<()> {
        let (start, rest) = self.split_start(input);
        let mut current = start;

        for segment in segments(rest) {
            current = match segment {
                "." | ".." => self.step(current, segment)?,
                name => match self.child(current, name) {
                    Some(existing) if self.node(existing).is_dir() => existing,
                    Some(_) => return Err(PathError::NotADirectory(name.to_string())),
                    None => {
                        let id = self.insert_child(current, Node::directory(name))?;
                        created.push(id);
                        id
                    }
                },
            };
        }

        Ok(())
    }

    fn insert_child(&mut self, parent: NodeId, node: Node) -> Result<NodeId> {
        let size = node.content().map(|c| c.len() as u64);

        self.check_insert(parent, &node, size).inspect_err(|_e| {
            #[cfg(feature = "logging")]
            tracing::warn!(error = %_e, name = node.name(), "insert rejected by limits");
        })?;

        let id = self.arena.new_node(node);
        parent.append(id, &mut self.arena);

        match size {
            Some(bytes) => {
                self.usage.file_count += 1;
                self.usage.total_bytes += bytes;
            }
            None => self.usage.dir_count += 1,
        }
        Ok(id)
    }

    fn check_insert(&self, parent: NodeId, node: &Node, size: Option<u64>) -> Result<()> {
        if node.name().is_empty() {
            return Err(PathError::InvalidName(String::new()));
        }
        self.limits.validate_name(node.name())?;
        self.limits.check_depth(self.depth(parent) + 1)?;
        self.limits.check_node_count(self.usage.node_count())?;
        if let Some(bytes) = size {
            self.limits.check_file_size(bytes)?;
        }
        Ok(())
    }

    /// Remove a childless node created by the current operation.
    fn discard(&mut self, id: NodeId) {
        match self.node(id).content().map(str::len) {
            Some(len) => {
                self.usage.file_count -= 1;
                self.usage.total_bytes -= len as u64;
            }
            None => self.usage.dir_count -= 1,
        }
        id.remove(&mut self.arena);
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::NodeKind;

    fn names(entries: &[DirEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_new_tree_is_root_only() {
        let fs = VirtualFileSystem::new();
        assert_eq!(fs.cwd(), fs.root());
        assert_eq!(fs.home(), fs.root());
        assert_eq!(fs.current_path(), "/");
        assert!(fs.list_children(None).unwrap().is_empty());
        assert_eq!(fs.usage().dir_count, 1);
    }

    #[test]
    fn test_resolve_empty_and_separator_is_root() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("a", false).unwrap();
        fs.change_directory("a").unwrap();

        assert_eq!(fs.resolve_path("").unwrap(), fs.root());
        assert_eq!(fs.resolve_path("/").unwrap(), fs.root());
        assert_eq!(fs.resolve_path("//").unwrap(), fs.root());
    }

    #[test]
    fn test_resolve_dot_and_dotdot() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("a/b", true).unwrap();
        fs.change_directory("a/b").unwrap();

        let b = fs.cwd();
        assert_eq!(fs.resolve_path(".").unwrap(), b);
        assert_eq!(fs.path_of(fs.resolve_path("..").unwrap()), "/a");
        assert_eq!(fs.resolve_path("../..").unwrap(), fs.root());
        assert_eq!(fs.resolve_path("../../../../..").unwrap(), fs.root());
        assert_eq!(fs.resolve_path("./.././b/.").unwrap(), b);
    }

    #[test]
    fn test_resolve_redundant_separators() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("a/b", true).unwrap();

        let b = fs.resolve_path("/a/b").unwrap();
        assert_eq!(fs.resolve_path("a//b/").unwrap(), b);
        assert_eq!(fs.resolve_path("///a///b").unwrap(), b);
    }

    #[test]
    fn test_resolve_home() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("/home/guest", true).unwrap();
        fs.touch_file("/home/guest/todo.txt").unwrap();
        fs.set_home("/home/guest").unwrap();

        assert_eq!(fs.path_of(fs.resolve_path("~").unwrap()), "/home/guest");
        assert_eq!(
            fs.path_of(fs.resolve_path("~/todo.txt").unwrap()),
            "/home/guest/todo.txt"
        );
        assert_eq!(fs.path_of(fs.resolve_path("~/..").unwrap()), "/home");
    }

    #[test]
    fn test_resolve_not_found_names_segment() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("a", false).unwrap();

        assert_eq!(
            fs.resolve_path("a/missing/deeper"),
            Err(PathError::NotFound("missing".into()))
        );
    }

    #[test]
    fn test_resolve_through_file_is_not_a_directory() {
        let mut fs = VirtualFileSystem::new();
        fs.touch_file("f.txt").unwrap();

        assert_eq!(
            fs.resolve_path("f.txt/x"),
            Err(PathError::NotADirectory("f.txt".into()))
        );
        assert_eq!(
            fs.resolve_path("f.txt/.."),
            Err(PathError::NotADirectory("f.txt".into()))
        );
    }

    #[test]
    fn test_change_directory_to_file_fails_without_moving() {
        let mut fs = VirtualFileSystem::new();
        fs.touch_file("f.txt").unwrap();

        assert_eq!(
            fs.change_directory("f.txt"),
            Err(PathError::NotADirectory("f.txt".into()))
        );
        assert_eq!(fs.cwd(), fs.root());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("zeta", false).unwrap();
        fs.touch_file("alpha.txt").unwrap();
        fs.make_directory("mid", false).unwrap();

        let entries = fs.list_children(None).unwrap();
        assert_eq!(names(&entries), vec!["zeta", "alpha.txt", "mid"]);
        assert_eq!(entries[0].kind, NodeKind::Directory);
        assert_eq!(entries[1].kind, NodeKind::File);
    }

    #[test]
    fn test_list_file_returns_itself() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("docs", false).unwrap();
        fs.touch_file("docs/readme.md").unwrap();

        let entries = fs.list_children(Some("docs/readme.md")).unwrap();
        assert_eq!(
            entries,
            vec![DirEntry {
                name: "readme.md".into(),
                kind: NodeKind::File
            }]
        );
    }

    #[test]
    fn test_mkdir_existing_fails_and_changes_nothing() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("x", false).unwrap();
        let before = fs.usage().clone();

        assert_eq!(
            fs.make_directory("x", false),
            Err(PathError::AlreadyExists("x".into()))
        );
        assert_eq!(fs.usage(), &before);
        assert_eq!(names(&fs.list_children(None).unwrap()), vec!["x"]);
    }

    #[test]
    fn test_mkdir_collides_with_file() {
        let mut fs = VirtualFileSystem::new();
        fs.touch_file("x").unwrap();

        assert_eq!(
            fs.make_directory("x", false),
            Err(PathError::AlreadyExists("x".into()))
        );
    }

    #[test]
    fn test_mkdir_missing_parent() {
        let mut fs = VirtualFileSystem::new();
        assert_eq!(
            fs.make_directory("a/b/c", false),
            Err(PathError::NotFound("a".into()))
        );
        assert!(fs.list_children(None).unwrap().is_empty());
    }

    #[test]
    fn test_mkdir_under_file() {
        let mut fs = VirtualFileSystem::new();
        fs.touch_file("f").unwrap();

        assert_eq!(
            fs.make_directory("f/sub", false),
            Err(PathError::NotADirectory("f".into()))
        );
    }

    #[test]
    fn test_mkdir_trailing_separator_and_absolute() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("/top/", false).unwrap();
        fs.change_directory("top").unwrap();
        fs.make_directory("/second", false).unwrap();

        assert_eq!(
            names(&fs.list_children(Some("/")).unwrap()),
            vec!["top", "second"]
        );
    }

    #[test]
    fn test_mkdir_reserved_names() {
        let mut fs = VirtualFileSystem::new();
        assert_eq!(
            fs.make_directory(".", false),
            Err(PathError::AlreadyExists(".".into()))
        );
        assert_eq!(
            fs.make_directory("..", false),
            Err(PathError::AlreadyExists("..".into()))
        );
        assert_eq!(
            fs.make_directory("~", false),
            Err(PathError::AlreadyExists("~".into()))
        );
        assert_eq!(
            fs.make_directory("/", false),
            Err(PathError::AlreadyExists("/".into()))
        );
        assert_eq!(
            fs.make_directory("", false),
            Err(PathError::InvalidName(String::new()))
        );
    }

    #[test]
    fn test_mkdir_tilde_prefix_lands_in_home() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("/home/guest", true).unwrap();
        fs.set_home("/home/guest").unwrap();

        fs.make_directory("~notes", false).unwrap();
        assert_eq!(names(&fs.list_children(Some("~")).unwrap()), vec!["notes"]);
        assert!(fs.resolve_path("~notes").is_ok());
    }

    #[test]
    fn test_mkdir_parents_creates_chain() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("a/b/c", true).unwrap();

        assert_eq!(names(&fs.list_children(Some("/")).unwrap()), vec!["a"]);
        assert_eq!(names(&fs.list_children(Some("/a")).unwrap()), vec!["b"]);
        assert_eq!(names(&fs.list_children(Some("/a/b")).unwrap()), vec!["c"]);
        assert_eq!(fs.usage().dir_count, 4);
    }

    #[test]
    fn test_mkdir_parents_skips_existing_and_accepts_full_path() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("a", false).unwrap();
        fs.make_directory("a/b", true).unwrap();
        fs.make_directory("a/b", true).unwrap();

        assert_eq!(names(&fs.list_children(Some("a")).unwrap()), vec!["b"]);
    }

    #[test]
    fn test_mkdir_parents_stops_at_file() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("a", false).unwrap();
        fs.touch_file("a/f").unwrap();

        assert_eq!(
            fs.make_directory("a/f/g", true),
            Err(PathError::NotADirectory("f".into()))
        );
    }

    #[test]
    fn test_mkdir_parents_rolls_back_on_limit() {
        let limits = FsLimits::new().max_path_depth(2);
        let mut fs = VirtualFileSystem::with_limits(limits);
        fs.make_directory("keep", false).unwrap();
        let before = fs.usage().clone();

        let err = fs.make_directory("a/b/c", true).unwrap_err();
        assert!(matches!(err, PathError::Limit(_)));
        assert_eq!(fs.usage(), &before);
        assert_eq!(names(&fs.list_children(None).unwrap()), vec!["keep"]);
        assert!(fs.resolve_path("a").is_err());
    }

    #[test]
    fn test_mkdir_parents_rolls_back_across_dotdot() {
        let limits = FsLimits::new().max_node_count(3);
        let mut fs = VirtualFileSystem::with_limits(limits);

        // a and b fit, c would be the fourth node
        let err = fs.make_directory("a/../b/../c", true).unwrap_err();
        assert!(matches!(err, PathError::Limit(_)));
        assert!(fs.list_children(None).unwrap().is_empty());
        assert_eq!(fs.usage().node_count(), 1);
    }

    #[test]
    fn test_touch_is_idempotent() {
        let mut fs = VirtualFileSystem::new();
        fs.write_file("f.txt", "keep me").unwrap();
        fs.touch_file("f.txt").unwrap();

        assert_eq!(fs.read_file("f.txt").unwrap(), "keep me");
        assert_eq!(fs.usage().file_count, 1);
    }

    #[test]
    fn test_touch_directory_name_fails() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("d", false).unwrap();

        assert_eq!(
            fs.touch_file("d"),
            Err(PathError::AlreadyExists("d".into()))
        );
    }

    #[test]
    fn test_make_directories_all_or_nothing() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("keep", false).unwrap();
        let before = fs.usage().clone();

        let err = fs.make_directories(&["a", "a/b", "x/y", "c"], false).unwrap_err();
        assert_eq!(err, PathError::NotFound("x".into()));
        assert_eq!(names(&fs.list_children(None).unwrap()), vec!["keep"]);
        assert_eq!(fs.usage(), &before);

        fs.make_directories(&["a", "a/b", "c"], false).unwrap();
        assert_eq!(names(&fs.list_children(None).unwrap()), vec!["keep", "a", "c"]);
    }

    #[test]
    fn test_touch_files_rolls_back_created_files() {
        let mut fs = VirtualFileSystem::new();
        fs.write_file("old.txt", "kept").unwrap();

        let err = fs.touch_files(&["a.txt", "old.txt", "missing/b.txt"]).unwrap_err();
        assert_eq!(err, PathError::NotFound("missing".into()));
        assert_eq!(names(&fs.list_children(None).unwrap()), vec!["old.txt"]);
        assert_eq!(fs.usage().file_count, 1);
        assert_eq!(fs.usage().total_bytes, 4);
        assert_eq!(fs.read_file("old.txt").unwrap(), "kept");
    }

    #[test]
    fn test_trailing_separator_on_file() {
        let mut fs = VirtualFileSystem::new();
        fs.write_file("f.txt", "x").unwrap();
        fs.make_directory("d", false).unwrap();

        let not_dir = PathError::NotADirectory("f.txt".into());
        assert_eq!(fs.resolve_path("f.txt/"), Err(not_dir.clone()));
        assert_eq!(fs.read_file("f.txt/"), Err(not_dir.clone()));
        assert_eq!(fs.list_children(Some("f.txt/")), Err(not_dir.clone()));
        assert_eq!(fs.touch_file("f.txt/"), Err(not_dir.clone()));
        assert_eq!(fs.write_file("f.txt/", "y"), Err(not_dir));
        assert_eq!(fs.touch_file("new/"), Err(PathError::NotFound("new".into())));

        // directories still accept it
        assert!(fs.resolve_path("d/").is_ok());
        fs.change_directory("/d/").unwrap();
        assert_eq!(fs.current_path(), "/d");
    }

    #[test]
    fn test_read_directory_fails() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("d", false).unwrap();

        assert_eq!(
            fs.read_file("d"),
            Err(PathError::IsADirectory("d".into()))
        );
    }

    #[test]
    fn test_write_file_replaces_and_tracks_bytes() {
        let mut fs = VirtualFileSystem::new();
        fs.write_file("/about.md", "hello").unwrap();
        assert_eq!(fs.usage().total_bytes, 5);

        fs.write_file("/about.md", "hi").unwrap();
        assert_eq!(fs.read_file("/about.md").unwrap(), "hi");
        assert_eq!(fs.usage().total_bytes, 2);
        assert_eq!(fs.usage().file_count, 1);
    }

    #[test]
    fn test_write_file_respects_size_limit() {
        let mut fs = VirtualFileSystem::with_limits(FsLimits::new().max_file_size(4));
        fs.write_file("f", "1234").unwrap();

        assert!(matches!(fs.write_file("f", "12345"), Err(PathError::Limit(_))));
        assert!(matches!(fs.write_file("g", "12345"), Err(PathError::Limit(_))));
        assert_eq!(fs.read_file("f").unwrap(), "1234");
        assert!(fs.resolve_path("g").is_err());
    }

    #[test]
    fn test_unsafe_name_rejected() {
        let mut fs = VirtualFileSystem::new();
        assert!(matches!(
            fs.make_directory("bad\u{1b}[31m", false),
            Err(PathError::Limit(_))
        ));
        assert!(fs.list_children(None).unwrap().is_empty());
    }

    #[test]
    fn test_path_of_round_trip() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("a/b", true).unwrap();
        fs.touch_file("a/b/c.txt").unwrap();

        let id = fs.resolve_path("a/b/c.txt").unwrap();
        let path = fs.path_of(id);
        assert_eq!(path, "/a/b/c.txt");
        assert_eq!(fs.resolve_path(&path).unwrap(), id);
        assert_eq!(fs.depth(id), 3);
    }
}
