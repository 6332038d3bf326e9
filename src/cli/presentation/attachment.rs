//! Attachment presentation: table listing and upload summary.

use crate::attachments::{AttachmentInfo, UploadResult};
use crate::error::ApiError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_attachment_list_text(attachments: &[AttachmentInfo]) -> String {
    if attachments.is_empty() {
        return "No attachments.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Size", "Last modified", "URL"]);
    for attachment in attachments {
        table.add_row(vec![
            attachment.name.clone(),
            format_size(attachment.size),
            attachment.last_modified.format("%Y-%m-%d %H:%M").to_string(),
            attachment.url.clone(),
        ]);
    }
    format!("{}\n\nTotal: {} attachment(s)", table, attachments.len())
}

pub fn format_attachment_list_json(attachments: &[AttachmentInfo]) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(attachments)?)
}

pub fn format_upload_result(result: &UploadResult) -> String {
    format!(
        "Stored {} as {} ({})\n{}",
        result.original_name,
        result.file_name,
        format_size(result.size),
        result.markdown_link
    )
}

fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}
