//! Intermediate tree built from raw path strings
//!
//! Every path is split on [`DELIMITER`] and walked from the root, creating
//! directory nodes on the way and marking the final segment as a file.
//! Children are kept in a `BTreeMap`, so sibling names are unique and always
//! iterate in ordinal order.

use std::collections::btree_map::{self, BTreeMap, Entry as Slot};

use derive_more::Display;
use log::{debug, trace};

/// The only recognized path delimiter
pub const DELIMITER: char = '/';

/// Split a path into its non-empty segments
///
/// Leading, trailing and repeated delimiters produce empty pieces, which are
/// skipped.
pub fn segments(path: &str) -> impl Iterator<Item = &str> + '_ {
    path.split(DELIMITER).filter(|segment| !segment.is_empty())
}

/// The kind of an entry in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EntryKind {
    /// A leaf, cannot have children
    #[display(fmt = "File")]
    File,
    /// A container of other entries
    #[display(fmt = "Directory")]
    Directory,
}

impl EntryKind {
    /// Returns true if this is a file entry
    pub const fn is_file(self) -> bool {
        matches!(self, EntryKind::File)
    }

    /// Returns true if this is a directory entry
    pub const fn is_directory(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// A named child of a [`TreeNode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// File marker
    File,
    /// Directory owning its own children
    Directory(TreeNode),
}

impl Entry {
    /// The kind of this entry
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::File => EntryKind::File,
            Entry::Directory(_) => EntryKind::Directory,
        }
    }

    /// The directory node, if this entry is a directory
    pub fn as_directory(&self) -> Option<&TreeNode> {
        match self {
            Entry::File => None,
            Entry::Directory(node) => Some(node),
        }
    }

    /// Turn a file marker into an empty directory, then hand out the directory
    fn make_directory(&mut self) -> &mut TreeNode {
        match self {
            Entry::Directory(node) => node,
            file @ Entry::File => {
                *file = Entry::Directory(TreeNode::new());
                file.make_directory()
            }
        }
    }
}

/// A directory level of the intermediate tree
///
/// The root node has no name; every other node is reachable under the name
/// its parent stores it by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    entries: BTreeMap<String, Entry>,
}

// Nested maps would otherwise drop recursively, one frame per level
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_directories(&mut self.entries, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_directories(&mut node.entries, &mut pending);
        }
    }
}

fn detach_directories(entries: &mut BTreeMap<String, Entry>, pending: &mut Vec<TreeNode>) {
    for entry in std::mem::take(entries).into_values() {
        if let Entry::Directory(node) = entry {
            pending.push(node);
        }
    }
}

impl TreeNode {
    /// Create an empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a path whose last segment is a file
    ///
    /// Returns true if the last segment is a file afterwards. When that name
    /// already holds a directory the directory is kept and false is
    /// returned. A path without segments inserts nothing and returns false.
    pub fn insert_file(&mut self, path: &str) -> bool {
        let parts: Vec<&str> = segments(path).collect();
        let Some((file_name, dirs)) = parts.split_last() else {
            trace!("Skipping path with no segments: {:?}", path);
            return false;
        };

        let parent = self.descend(dirs, path);
        match parent.entries.entry((*file_name).to_string()) {
            Slot::Vacant(slot) => {
                trace!("Inserting file {:?}", path);
                slot.insert(Entry::File);
                true
            }
            Slot::Occupied(slot) => match slot.get() {
                Entry::File => true,
                Entry::Directory(_) => {
                    debug!(
                        "Keeping directory {:?}, ignoring file marker from {:?}",
                        file_name, path
                    );
                    false
                }
            },
        }
    }

    /// Insert a path where every segment is a directory
    ///
    /// The deepest directory is left empty unless another path fills it.
    /// Returns false if the path has no segments.
    pub fn insert_directory(&mut self, path: &str) -> bool {
        let parts: Vec<&str> = segments(path).collect();
        if parts.is_empty() {
            trace!("Skipping directory with no segments: {:?}", path);
            return false;
        }

        trace!("Inserting directory {:?}", path);
        self.descend(&parts, path);
        true
    }

    /// Walk down `dirs`, creating or reusing a directory for each name
    fn descend(&mut self, dirs: &[&str], path: &str) -> &mut TreeNode {
        let mut current = self;
        for dir in dirs {
            let entry = current
                .entries
                .entry((*dir).to_string())
                .or_insert_with(|| Entry::Directory(TreeNode::new()));

            if let Entry::File = entry {
                debug!(
                    "Directory {:?} replaces an earlier file marker while inserting {:?}",
                    dir, path
                );
            }
            current = entry.make_directory();
        }
        current
    }

    /// Get a direct child by name
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Find an entry by its path relative to this node
    ///
    /// Returns `None` if the path doesn't exist or has no segments.
    pub fn find(&self, path: &str) -> Option<&Entry> {
        let mut parts = segments(path);
        let mut entry = self.get(parts.next()?)?;
        for part in parts {
            entry = entry.as_directory()?.get(part)?;
        }
        Some(entry)
    }

    /// Iterate over direct children in ordinal name order
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if this node has no children
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Iterator over the direct children of a [`TreeNode`], sorted by name
pub struct Entries<'a> {
    inner: btree_map::Iter<'a, String, Entry>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, entry)| (name.as_str(), entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

/// Build the intermediate tree for a set of paths
///
/// Paths are sorted ordinally and deduplicated before insertion, so the
/// result does not depend on input order.
pub fn build<I, P>(paths: I) -> TreeNode
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    let mut sorted: Vec<P> = paths.into_iter().collect();
    sorted.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));
    sorted.dedup_by(|a, b| a.as_ref() == b.as_ref());

    let mut root = TreeNode::new();
    for path in &sorted {
        root.insert_file(path.as_ref());
    }

    debug!(
        "Built tree from {} unique paths, {} top-level entries",
        sorted.len(),
        root.len()
    );
    root
}
