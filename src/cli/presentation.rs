//! CLI presentation: text and json formatters per command family.

mod attachment;
mod page;
mod settings;
mod tree;

pub use attachment::{
    format_attachment_list_json, format_attachment_list_text, format_upload_result,
};
pub use page::{
    format_order_listing_json, format_order_listing_text, format_page_json, format_page_text,
};
pub use settings::{format_config_status_json, format_config_status_text};
pub use tree::{format_tree_json, format_tree_text};
