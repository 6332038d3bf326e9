//! Integration tests for CLI commands through the run context

use super::test_utils::sample_wiki;
use mdwiki::cli::{
    AttachmentCommands, Commands, ConfigCommands, OrderCommands, OutputFormat, PageCommands,
    PageFormat, RunContext,
};
use mdwiki::error::ApiError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A settings file whose relative wiki_path points at a sample wiki.
fn setup() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let wiki = temp_dir.path().join("wiki");
    fs::create_dir(&wiki).unwrap();
    sample_wiki(&wiki);
    let config_path = temp_dir.path().join("config.toml");
    (temp_dir, config_path)
}

#[test]
fn test_tree_text_output() {
    let (_temp, config_path) = setup();
    let ctx = RunContext::new(Some(config_path), None).unwrap();

    let output = ctx
        .execute(&Commands::Tree {
            folder: String::new(),
            format: OutputFormat::Text,
        })
        .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Wiki/");
    assert_eq!(lines[1], "  Guides/ *");
    assert_eq!(lines[2], "    Setup");
    assert!(output.contains("5 page(s)"));
}

#[test]
fn test_tree_json_for_folder() {
    let (_temp, config_path) = setup();
    let ctx = RunContext::new(Some(config_path), None).unwrap();

    let output = ctx
        .execute(&Commands::Tree {
            folder: "Guides".to_string(),
            format: OutputFormat::Json,
        })
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["name"], "Guides");
    assert_eq!(json["children"][0]["path"], "Guides/Setup");
}

#[test]
fn test_wiki_flag_overrides_settings() {
    let (temp, config_path) = setup();
    let other = temp.path().join("other");
    fs::create_dir(&other).unwrap();
    fs::write(other.join("Solo.md"), "solo").unwrap();

    let ctx = RunContext::new(Some(config_path), Some(other)).unwrap();
    let output = ctx
        .execute(&Commands::Tree {
            folder: String::new(),
            format: OutputFormat::Json,
        })
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["children"][0]["name"], "Solo");
}

#[test]
fn test_missing_wiki_root_reports_error() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = RunContext::new(Some(temp_dir.path().join("config.toml")), None).unwrap();

    let err = ctx
        .execute(&Commands::Tree {
            folder: String::new(),
            format: OutputFormat::Text,
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::RootNotFound(_)));
    assert!(mdwiki::cli::map_error(&err).contains("config set-path"));
}

#[test]
fn test_page_commands() {
    let (_temp, config_path) = setup();
    let ctx = RunContext::new(Some(config_path), None).unwrap();

    ctx.execute(&Commands::Page {
        command: PageCommands::Save {
            path: "Notes".to_string(),
            content: "Some *notes*".to_string(),
            meta: vec!["title=My Notes".to_string(), "pinned=true".to_string()],
        },
    })
    .unwrap();

    let output = ctx
        .execute(&Commands::Page {
            command: PageCommands::Show {
                path: "Notes".to_string(),
                format: PageFormat::Json,
            },
        })
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["title"], "My Notes");
    assert_eq!(json["metadata"]["pinned"], true);
    assert!(json["lastModified"].is_string());

    let html = ctx
        .execute(&Commands::Page {
            command: PageCommands::Show {
                path: "Notes".to_string(),
                format: PageFormat::Html,
            },
        })
        .unwrap();
    assert!(html.contains("<em>notes</em>"));

    ctx.execute(&Commands::Page {
        command: PageCommands::Delete {
            path: "Notes".to_string(),
        },
    })
    .unwrap();
    assert!(ctx.api().page("Notes").is_err());
}

#[test]
fn test_order_commands() {
    let (temp, config_path) = setup();
    let ctx = RunContext::new(Some(config_path), None).unwrap();

    let output = ctx
        .execute(&Commands::Order {
            command: OrderCommands::Set {
                folder: String::new(),
                names: vec!["Zeta".to_string(), "Home".to_string()],
            },
        })
        .unwrap();
    assert!(output.contains("Zeta"));
    assert_eq!(
        fs::read_to_string(temp.path().join("wiki").join(".order")).unwrap(),
        "Zeta\nHome\n"
    );

    let output = ctx
        .execute(&Commands::Order {
            command: OrderCommands::Show {
                folder: String::new(),
                format: OutputFormat::Json,
            },
        })
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["lines"], serde_json::json!(["Zeta", "Home", "Guides"]));
}

#[test]
fn test_attachment_commands() {
    let (temp, config_path) = setup();
    let source = temp.path().join("diagram.png");
    fs::write(&source, "png bytes").unwrap();
    let ctx = RunContext::new(Some(config_path), None).unwrap();

    let output = ctx
        .execute(&Commands::Attachment {
            command: AttachmentCommands::Add { file: source },
        })
        .unwrap();
    assert!(output.contains("![diagram.png]("));

    let output = ctx
        .execute(&Commands::Attachment {
            command: AttachmentCommands::List {
                format: OutputFormat::Json,
            },
        })
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);

    let err = ctx
        .execute(&Commands::Attachment {
            command: AttachmentCommands::Delete {
                name: "../config.toml".to_string(),
            },
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidPath(_)));
}

#[test]
fn test_config_set_path_persists() {
    let (temp, config_path) = setup();
    let notes = temp.path().join("notes");
    fs::create_dir(&notes).unwrap();
    fs::write(notes.join("Only.md"), "only").unwrap();

    let ctx = RunContext::new(Some(config_path.clone()), None).unwrap();
    ctx.execute(&Commands::Config {
        command: ConfigCommands::SetPath {
            path: PathBuf::from("notes"),
        },
    })
    .unwrap();
    assert!(fs::read_to_string(&config_path).unwrap().contains("notes"));

    let reloaded = RunContext::new(Some(config_path), None).unwrap();
    let tree = reloaded.api().structure().unwrap();
    assert_eq!(tree.children()[0].name, "Only");

    let shown = reloaded
        .execute(&Commands::Config {
            command: ConfigCommands::Show,
        })
        .unwrap();
    assert!(shown.contains("\"pathExists\": true"));
}
