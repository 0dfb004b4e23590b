use crate::builder::{Entries, Entry, TreeNode};
use crate::tree_item::TreeItem;

/// A directory whose children are still being serialized
struct Frame<'a> {
    name: &'a str,
    entries: Entries<'a>,
    items: Vec<TreeItem>,
}

impl<'a> Frame<'a> {
    fn new(name: &'a str, node: &'a TreeNode) -> Self {
        Self {
            name,
            entries: node.entries(),
            items: Vec::with_capacity(node.len()),
        }
    }
}

/// Serialize a node's children into tree items
///
/// Children come out in ordinal name order. A directory with children
/// becomes `Branch(name, children)`, with the children of the directory
/// placed directly in the branch. A directory with no children becomes a
/// leaf. The node's own name is never emitted.
///
/// Uses an explicit stack, so depth is bounded by memory only.
pub fn serialize(node: &TreeNode) -> Vec<TreeItem> {
    let mut stack = vec![Frame::new("", node)];

    while let Some(frame) = stack.last_mut() {
        match frame.entries.next() {
            Some((name, Entry::File)) => frame.items.push(TreeItem::Leaf(name.to_string())),
            Some((name, Entry::Directory(child))) => stack.push(Frame::new(name, child)),
            None => {
                let Some(done) = stack.pop() else { break };
                match stack.last_mut() {
                    Some(parent) => parent.items.push(TreeItem::branch(done.name, done.items)),
                    None => return done.items,
                }
            }
        }
    }

    Vec::new()
}
