//! Page and order presentation.

use crate::api::OrderListing;
use crate::error::ApiError;
use crate::page::WikiPage;

pub fn format_page_text(page: &WikiPage) -> String {
    let mut output = format!("# {}\n", page.title);
    output.push_str(&format!("Path: {}\n", page.path));
    output.push_str(&format!("Last modified: {}\n", page.last_modified.to_rfc3339()));
    if !page.metadata.is_empty() {
        output.push_str("Metadata:\n");
        for (key, value) in &page.metadata {
            output.push_str(&format!("  {}: {}\n", key, value));
        }
    }
    output.push('\n');
    output.push_str(&page.content);
    output
}

pub fn format_page_json(page: &WikiPage) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(page)?)
}

pub fn format_order_listing_json(listing: &OrderListing) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(listing)?)
}

pub fn format_order_listing_text(listing: &OrderListing) -> String {
    let folder = if listing.folder.is_empty() {
        "(root)"
    } else {
        listing.folder.as_str()
    };
    if listing.lines.is_empty() {
        return format!(
            "Order: {}\n\nNo entries yet. Add markdown files or folders to this directory to order them.",
            folder
        );
    }
    let source = if listing.has_manifest {
        ".order manifest"
    } else {
        "no manifest, filesystem order"
    };
    let mut lines: Vec<String> = listing
        .lines
        .iter()
        .enumerate()
        .map(|(i, name)| format!("  {}. {}", i + 1, name))
        .collect();
    lines.insert(0, format!("Order: {} ({})", folder, source));
    lines.join("\n")
}
