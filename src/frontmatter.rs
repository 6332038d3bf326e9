//! YAML frontmatter for wiki pages.

use crate::error::ApiError;
use serde_json::Value;
use std::collections::BTreeMap;

/// Frontmatter fields as JSON values.
pub type Metadata = BTreeMap<String, Value>;

/// A page split into its frontmatter fields and markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPage<'a> {
    pub metadata: Metadata,
    pub body: &'a str,
}

/// Split leading YAML frontmatter from markdown content.
///
/// The block opens with a `---` line (a BOM is tolerated) and closes with
/// `---` or `...`. Content without a closed block is all body. A block that
/// is not a YAML mapping is an error.
pub fn split(input: &str) -> Result<ParsedPage<'_>, ApiError> {
    let unbommed = input.trim_start_matches('\u{feff}');
    let Some((first, mut rest)) = split_line(unbommed) else {
        return Ok(ParsedPage {
            metadata: Metadata::new(),
            body: input,
        });
    };
    if first.trim_end() != "---" {
        return Ok(ParsedPage {
            metadata: Metadata::new(),
            body: input,
        });
    }

    let yaml_start = rest;
    let mut yaml_len = 0;
    loop {
        let Some((line, next)) = split_line(rest) else {
            // No closing delimiter
            return Ok(ParsedPage {
                metadata: Metadata::new(),
                body: input,
            });
        };
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            let metadata = parse_yaml(&yaml_start[..yaml_len])?;
            return Ok(ParsedPage {
                metadata,
                body: next,
            });
        }
        yaml_len += rest.len() - next.len();
        rest = next;
    }
}

/// Prepend `metadata` as a frontmatter block to `body`.
///
/// Empty metadata produces the body unchanged.
pub fn compose(metadata: &Metadata, body: &str) -> Result<String, ApiError> {
    if metadata.is_empty() {
        return Ok(body.to_string());
    }
    let yaml = serde_yaml::to_string(metadata).map_err(|e| ApiError::Frontmatter(e.to_string()))?;
    Ok(format!("---\n{}---\n{}", yaml, body))
}

/// Split off the first line, including its terminator.
fn split_line(input: &str) -> Option<(&str, &str)> {
    if input.is_empty() {
        return None;
    }
    match input.find('\n') {
        Some(idx) => Some((&input[..idx], &input[idx + 1..])),
        None => Some((input, "")),
    }
}

fn parse_yaml(yaml: &str) -> Result<Metadata, ApiError> {
    if yaml.trim().is_empty() {
        return Ok(Metadata::new());
    }
    let yaml_value: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| ApiError::Frontmatter(e.to_string()))?;
    let json_value: Value =
        serde_json::to_value(yaml_value).map_err(|e| ApiError::Frontmatter(e.to_string()))?;

    match json_value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        Value::Null => Ok(Metadata::new()),
        _ => Err(ApiError::Frontmatter(
            "frontmatter is not a mapping".to_string(),
        )),
    }
}
