//! Files Tree
//!
//! Turns a flat set of slash-delimited paths into a nested, sorted tree for
//! rendering file/folder views.
//!
//! # Core Concepts
//!
//! - **TreeNode**: intermediate tree owned by the builder, one map per directory
//! - **TreeItem**: output item, a leaf name or a directory name with children
//! - Siblings are ordered by ordinal string comparison at every level
//! - When a name is used both as a file and as a directory, the directory wins
//!
//! # Example
//!
//! ```
//! use files_tree::{convert_files_to_tree_items, TreeItem};
//! use std::collections::HashMap;
//!
//! let mut files = HashMap::new();
//! files.insert("src/index.ts", "export * from './utils'");
//! files.insert("src/utils.ts", "export function hello() {}");
//! files.insert("package.json", "{}");
//!
//! let tree = convert_files_to_tree_items(&files);
//! assert_eq!(
//!     tree,
//!     vec![
//!         TreeItem::leaf("package.json"),
//!         TreeItem::branch(
//!             "src",
//!             vec![TreeItem::leaf("index.ts"), TreeItem::leaf("utils.ts")],
//!         ),
//!     ]
//! );
//! ```

pub mod builder;
mod convert;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod serializer;
mod tree_item;

pub use builder::{build, segments, Entry, EntryKind, TreeNode, DELIMITER};
pub use convert::{convert_files_to_tree_items, convert_paths};
pub use serializer::serialize;
pub use tree_item::{leaf_paths, render, walk, TreeItem, Walk};

#[cfg(feature = "serde")]
pub use serde_impl::MAX_SERIALIZE_DEPTH;
