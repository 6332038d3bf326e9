//! Tree presentation: indented outline or JSON.

use crate::error::ApiError;
use crate::tree::{NodeKind, TreeNode};
use owo_colors::OwoColorize;

/// Render the tree as an indented outline. Folders end with `/`; a folder
/// that doubles as a page is marked with `*`.
pub fn format_tree_text(root: &TreeNode, color: bool) -> String {
    let mut output = String::new();
    push_label(&mut output, root, color);
    output.push('\n');
    for child in root.children() {
        push_node(&mut output, child, 1, color);
    }
    output.push_str(&format!(
        "\n{} page(s), {} node(s)",
        root.page_paths().len(),
        root.node_count() - 1
    ));
    output
}

fn push_node(output: &mut String, node: &TreeNode, depth: usize, color: bool) {
    output.push_str(&"  ".repeat(depth));
    push_label(output, node, color);
    output.push('\n');
    for child in node.children() {
        push_node(output, child, depth + 1, color);
    }
}

fn push_label(output: &mut String, node: &TreeNode, color: bool) {
    match node.kind {
        NodeKind::Folder => {
            let label = format!("{}/", node.name);
            if color {
                output.push_str(&label.bold().blue().to_string());
            } else {
                output.push_str(&label);
            }
            if node.page_path.is_some() {
                output.push_str(" *");
            }
        }
        NodeKind::Page => output.push_str(&node.name),
    }
}

pub fn format_tree_json(root: &TreeNode) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(root)?)
}
