//! Reading the path mapping and printing the tree

use anyhow::{Context, Result};
use files_tree::{convert_files_to_tree_items, render, TreeItem};
use log::{debug, info};
use serde_json::{Map, Value};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::cli::OutputFormat;

/// Read the raw JSON document from a file, or stdin when `path` is `None`
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading paths from {:?}", path);
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            info!("Reading paths from stdin");
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

/// Parse a `{ "path": content }` object into a tree
///
/// Content values can be any JSON, they are not looked at.
pub fn parse_tree(input: &str) -> Result<Vec<TreeItem>> {
    let files: Map<String, Value> = serde_json::from_str(input)
        .context("Expected a JSON object mapping file paths to contents")?;
    debug!("Parsed {} paths", files.len());

    Ok(convert_files_to_tree_items(&files))
}

/// Format the tree for printing
pub fn format_tree(tree: &[TreeItem], format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string(tree)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(tree)?,
        OutputFormat::Text => render(tree).trim_end().to_string(),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const INPUT: &str = r#"{
        "src/index.ts": "export * from './utils'",
        "src/utils.ts": "export function hello() {}",
        "package.json": {"name": "my-package"}
    }"#;

    #[test]
    fn test_parse_and_format_json() {
        let tree = parse_tree(INPUT).unwrap();
        let output = format_tree(&tree, OutputFormat::Json).unwrap();
        assert_eq!(output, r#"["package.json",["src","index.ts","utils.ts"]]"#);
    }

    #[test]
    fn test_format_text() {
        let tree = parse_tree(INPUT).unwrap();
        let output = format_tree(&tree, OutputFormat::Text).unwrap();
        assert_eq!(output, "package.json\nsrc/\n  index.ts\n  utils.ts");
    }

    #[test]
    fn test_format_pretty_parses_back() {
        let tree = parse_tree(INPUT).unwrap();
        let output = format_tree(&tree, OutputFormat::Pretty).unwrap();
        assert!(output.contains('\n'));

        let back: Vec<TreeItem> = serde_json::from_str(&output).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn test_empty_object() {
        let tree = parse_tree("{}").unwrap();
        assert!(tree.is_empty());
        assert_eq!(format_tree(&tree, OutputFormat::Json).unwrap(), "[]");
        assert_eq!(format_tree(&tree, OutputFormat::Text).unwrap(), "");
    }

    #[test]
    fn test_rejects_non_object() {
        let err = parse_tree(r#"["a", "b"]"#).unwrap_err();
        assert!(err.to_string().contains("Expected a JSON object"));
        assert!(parse_tree("not json").is_err());
    }

    #[test]
    fn test_deep_path_fails_json_but_renders_text() {
        let path = vec!["a"; 2_000].join("/");
        let mut files = Map::new();
        files.insert(path, Value::String(String::new()));
        let input = Value::Object(files).to_string();
        let tree = parse_tree(&input).unwrap();

        let err = format_tree(&tree, OutputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("levels deep"));

        let text = format_tree(&tree, OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), 2_000);
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", INPUT).unwrap();

        let input = read_input(Some(file.path())).unwrap();
        assert_eq!(input, INPUT);
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let err = read_input(Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
