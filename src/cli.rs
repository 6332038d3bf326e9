//! CLI domain: parse, route, output, and presentation only.
//! No wiki logic; a single route table dispatches to the wiki API.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{
    AttachmentCommands, Cli, Commands, ConfigCommands, OrderCommands, OutputFormat, PageCommands,
    PageFormat,
};
pub use presentation::{
    format_attachment_list_json, format_attachment_list_text, format_config_status_json,
    format_config_status_text, format_order_listing_json, format_order_listing_text,
    format_page_json, format_page_text, format_tree_json, format_tree_text, format_upload_result,
};
pub use route::RunContext;
