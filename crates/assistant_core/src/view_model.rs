use crate::report::Report;
use crate::route::Page;
use crate::state::{Attachment, GenerationState};

/// Immutable projection of [`crate::AppState`] consumed by the render layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub page: Page,
    pub chrome: bool,
    pub query: String,
    pub attachments: Vec<AttachmentRowView>,
    pub generation: GenerationState,
    pub can_generate: bool,
    pub report: Option<Report>,
    pub dirty: bool,
}

/// One row in the uploaded-files list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentRowView {
    pub name: String,
    pub size_label: String,
}

impl From<&Attachment> for AttachmentRowView {
    fn from(attachment: &Attachment) -> Self {
        AttachmentRowView {
            name: attachment.name.clone(),
            size_label: format_size(attachment.size_bytes),
        }
    }
}

/// Formats a byte count the way the file list displays it, e.g. "1.00 MB".
pub fn format_size(size_bytes: u64) -> String {
    format!("{:.2} MB", size_bytes as f64 / 1024.0 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_label_is_mebibytes_with_two_decimals() {
        assert_eq!(format_size(1_048_576), "1.00 MB");
        assert_eq!(format_size(0), "0.00 MB");
        assert_eq!(format_size(20 * 1024 * 1024), "20.00 MB");
    }
}
