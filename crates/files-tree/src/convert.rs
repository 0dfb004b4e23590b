use crate::builder::build;
use crate::serializer::serialize;
use crate::tree_item::TreeItem;

/// Convert a mapping of file paths to contents into a sorted tree
///
/// Only the paths matter, contents are ignored. Accepts anything that
/// iterates over `(path, content)` pairs: `&HashMap<String, String>`,
/// `BTreeMap`, a `Vec` of tuples and so on.
pub fn convert_files_to_tree_items<I, K, V>(files: I) -> Vec<TreeItem>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
{
    convert_paths(files.into_iter().map(|(path, _content)| path))
}

/// Convert a set of paths into a sorted tree
pub fn convert_paths<I, P>(paths: I) -> Vec<TreeItem>
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    serialize(&build(paths))
}
