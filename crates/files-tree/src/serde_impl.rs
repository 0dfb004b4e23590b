//! Nested-array form of [`TreeItem`]
//!
//! A leaf is a plain string. A branch is an array holding the directory name
//! followed by each child: `["src", "lib.rs", ["bin", "cli.rs"]]`.
//!
//! Serializers recurse once per array level, so trees nested deeper than
//! [`MAX_SERIALIZE_DEPTH`] are refused with an error.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{self, Serialize, SerializeSeq, Serializer};

use crate::tree_item::{walk, TreeItem};

/// Deepest nesting, in levels, that [`TreeItem`] will serialize
pub const MAX_SERIALIZE_DEPTH: usize = 256;

impl Serialize for TreeItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let levels = walk(std::slice::from_ref(self))
            .map(|(depth, _)| depth + 1)
            .max()
            .unwrap_or(1);
        if levels > MAX_SERIALIZE_DEPTH {
            return Err(<S::Error as ser::Error>::custom(format_args!(
                "tree is {} levels deep, at most {} can be serialized",
                levels, MAX_SERIALIZE_DEPTH
            )));
        }

        Nested(self).serialize(serializer)
    }
}

/// Serializes without repeating the depth check at every level
struct Nested<'a>(&'a TreeItem);

impl Serialize for Nested<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            TreeItem::Leaf(name) => serializer.serialize_str(name),
            TreeItem::Branch(name, children) => {
                let mut seq = serializer.serialize_seq(Some(children.len() + 1))?;
                seq.serialize_element(name)?;
                for child in children {
                    seq.serialize_element(&Nested(child))?;
                }
                seq.end()
            }
        }
    }
}

struct TreeItemVisitor;

impl<'de> Visitor<'de> for TreeItemVisitor {
    type Value = TreeItem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a name or an array starting with a directory name")
    }

    fn visit_str<E>(self, name: &str) -> Result<TreeItem, E>
    where
        E: de::Error,
    {
        Ok(TreeItem::leaf(name))
    }

    fn visit_string<E>(self, name: String) -> Result<TreeItem, E>
    where
        E: de::Error,
    {
        Ok(TreeItem::Leaf(name))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<TreeItem, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let name: String = seq
            .next_element()?
            .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;

        let mut children = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(child) = seq.next_element::<TreeItem>()? {
            children.push(child);
        }

        // `["name"]` has nothing under it, same as an empty directory
        Ok(TreeItem::branch(name, children))
    }
}

impl<'de> Deserialize<'de> for TreeItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TreeItemVisitor)
    }
}
