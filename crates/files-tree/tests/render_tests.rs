use files_tree::{convert_paths, render, walk, TreeNode};

#[test]
fn test_render_listing() {
    let tree = convert_paths([
        "src/index.ts",
        "src/utils/helpers.ts",
        "src/components/Button.tsx",
        "package.json",
        "README.md",
    ]);

    insta::assert_snapshot!(render(&tree).trim_end(), @r"
README.md
package.json
src/
  components/
    Button.tsx
  index.ts
  utils/
    helpers.ts
");
}

#[test]
fn test_render_collapsed_directory() {
    let mut root = TreeNode::new();
    root.insert_directory("cache");
    root.insert_file("main.rs");

    // An empty directory renders like a file
    let tree = files_tree::serialize(&root);
    assert_eq!(render(&tree), "cache\nmain.rs\n");
}

#[test]
fn test_display_single_item() {
    let tree = convert_paths(["a/b/c"]);
    assert_eq!(tree[0].to_string(), "a/\n  b/\n    c\n");
}

#[test]
fn test_walk_depths_match_indentation() {
    let tree = convert_paths(["a/b/c", "a/d", "e"]);
    let rendered = render(&tree);

    for ((depth, item), line) in walk(&tree).zip(rendered.lines()) {
        let indent = line.len() - line.trim_start().len();
        assert_eq!(indent, depth * 2);
        assert!(line.trim_start().starts_with(item.name()));
    }
    assert_eq!(walk(&tree).count(), rendered.lines().count());
}
