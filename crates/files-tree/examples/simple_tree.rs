use anyhow::Result;
use files_tree::{convert_files_to_tree_items, leaf_paths, render};
use std::collections::HashMap;

fn main() -> Result<()> {
    // A small project, contents don't matter
    let files: HashMap<&str, &str> = HashMap::from([
        ("src/index.ts", "export * from \"./utils\""),
        ("src/utils/helpers.ts", "export function help() {}"),
        ("src/components/Button.tsx", "export const Button = () => {}"),
        ("package.json", "{\"name\": \"my-app\"}"),
        ("README.md", "# My App"),
    ]);

    let tree = convert_files_to_tree_items(&files);

    println!("Nested arrays:");
    println!("{}", serde_json::to_string_pretty(&tree)?);

    println!("\nListing:");
    print!("{}", render(&tree));

    println!("\nLeaf paths:");
    for path in leaf_paths(&tree) {
        println!("  {}", path);
    }

    Ok(())
}
