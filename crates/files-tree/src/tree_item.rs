use std::fmt;

/// One element of the serialized tree
///
/// A leaf is a file or a directory that had nothing in it. A branch is a
/// directory with at least one child, children in ordinal name order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TreeItem {
    /// A file, or an empty directory collapsed to its name
    Leaf(String),
    /// A directory name followed by its children
    Branch(String, Vec<TreeItem>),
}

impl TreeItem {
    /// Create a leaf item
    pub fn leaf(name: impl Into<String>) -> Self {
        TreeItem::Leaf(name.into())
    }

    /// Create a branch item
    ///
    /// A branch without children collapses into a leaf.
    pub fn branch(name: impl Into<String>, children: Vec<TreeItem>) -> Self {
        if children.is_empty() {
            TreeItem::Leaf(name.into())
        } else {
            TreeItem::Branch(name.into(), children)
        }
    }

    /// The file or directory name
    pub fn name(&self) -> &str {
        match self {
            TreeItem::Leaf(name) | TreeItem::Branch(name, _) => name,
        }
    }

    /// Child items, empty for leaves
    pub fn children(&self) -> &[TreeItem] {
        match self {
            TreeItem::Leaf(_) => &[],
            TreeItem::Branch(_, children) => children,
        }
    }

    /// Returns true if this is a leaf
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeItem::Leaf(_))
    }

    /// Returns true if this is a branch
    pub fn is_branch(&self) -> bool {
        matches!(self, TreeItem::Branch(..))
    }
}

// Nested vectors would otherwise drop recursively, one frame per level
impl Drop for TreeItem {
    fn drop(&mut self) {
        let TreeItem::Branch(_, children) = self else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut item) = pending.pop() {
            if let TreeItem::Branch(_, children) = &mut item {
                pending.append(children);
            }
        }
    }
}

/// Indented listing, one line per item, directories end with `/`
impl fmt::Display for TreeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, item) in walk(std::slice::from_ref(self)) {
            let suffix = if item.is_branch() { "/" } else { "" };
            writeln!(f, "{:indent$}{}{}", "", item.name(), suffix, indent = depth * 2)?;
        }
        Ok(())
    }
}

/// Render a whole forest as an indented listing
pub fn render(items: &[TreeItem]) -> String {
    items.iter().map(ToString::to_string).collect()
}

/// Pre-order iterator yielding each item with its depth (top level = 0)
pub struct Walk<'a> {
    stack: Vec<(usize, &'a TreeItem)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a TreeItem);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, item) = self.stack.pop()?;

        // Push children in reverse so they come out in order
        for child in item.children().iter().rev() {
            self.stack.push((depth + 1, child));
        }

        Some((depth, item))
    }
}

/// Walk a forest of items in pre-order
pub fn walk(items: &[TreeItem]) -> Walk<'_> {
    Walk {
        stack: items.iter().rev().map(|item| (0, item)).collect(),
    }
}

/// Reconstruct the full path of every leaf, joined with `/`
///
/// Paths come out in pre-order, siblings in the order they are stored.
pub fn leaf_paths(items: &[TreeItem]) -> Vec<String> {
    let mut paths = Vec::new();
    let mut path = String::new();
    // Length of `path` after each ancestor of the current item
    let mut ends: Vec<usize> = Vec::new();

    for (depth, item) in walk(items) {
        ends.truncate(depth);
        path.truncate(ends.last().copied().unwrap_or(0));
        if depth > 0 {
            path.push('/');
        }
        path.push_str(item.name());
        ends.push(path.len());

        if item.is_leaf() {
            paths.push(path.clone());
        }
    }
    paths
}
