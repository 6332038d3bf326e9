//! CLI parse: clap types for mdwiki. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// mdwiki CLI - browse and edit a markdown directory as a wiki
#[derive(Parser)]
#[command(name = "mdwiki")]
#[command(about = "Browse and edit a directory of markdown files as an ordered wiki tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (default: <config dir>/mdwiki/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Wiki root directory (overrides wiki_path from settings)
    #[arg(long, global = true)]
    pub wiki: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Output format for `page show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PageFormat {
    Text,
    Json,
    Html,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the wiki structure
    Tree {
        /// Show only this folder (logical path)
        #[arg(long, default_value = "")]
        folder: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Read and edit pages
    Page {
        #[command(subcommand)]
        command: PageCommands,
    },
    /// Show or change folder ordering
    Order {
        #[command(subcommand)]
        command: OrderCommands,
    },
    /// Manage files in the attachments directory
    Attachment {
        #[command(subcommand)]
        command: AttachmentCommands,
    },
    /// Show or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum PageCommands {
    /// Print a page
    Show {
        /// Logical page path (e.g. Guides/Setup)
        path: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = PageFormat::Text)]
        format: PageFormat,
    },
    /// Create a new page
    Create {
        path: String,
        /// Page title, stored in frontmatter
        #[arg(long)]
        title: String,
        /// Initial markdown body
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Replace a page's body and frontmatter
    Save {
        path: String,
        /// Markdown body
        #[arg(long)]
        content: String,
        /// Frontmatter field as key=value (repeatable)
        #[arg(long = "meta", value_name = "KEY=VALUE")]
        meta: Vec<String>,
    },
    /// Delete a page file
    Delete { path: String },
}

#[derive(Subcommand)]
pub enum OrderCommands {
    /// Show the effective order of a folder's children
    Show {
        /// Logical folder path (default: wiki root)
        #[arg(long, default_value = "")]
        folder: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Write the folder's .order manifest
    Set {
        #[arg(long, default_value = "")]
        folder: String,
        /// Child names in display order
        names: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum AttachmentCommands {
    /// List stored attachments
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Copy a local file into the attachments directory
    Add { file: PathBuf },
    /// Delete a stored attachment
    Delete { name: String },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show settings and the resolved wiki path
    Show,
    /// Set the wiki path and save the settings file
    SetPath { path: PathBuf },
}
