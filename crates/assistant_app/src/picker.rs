use std::path::Path;

use anyhow::{anyhow, Context};
use assistant_core::Attachment;

/// Accepted extensions shown in the upload hint. Advisory only: nothing is
/// rejected on type or on the advertised 20 MB cap.
pub const ACCEPTED_TYPES: &str = ".pdf, .doc, .docx";

/// Builds an attachment from a path by reading file metadata. Only the file
/// name and byte size are taken; content is never opened.
pub fn attachment_from_path(path: &str) -> anyhow::Result<Attachment> {
    let path = Path::new(path.trim());
    let name = path
        .file_name()
        .ok_or_else(|| anyhow!("path has no file name: {}", path.display()))?
        .to_string_lossy()
        .into_owned();
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("failed to read metadata for {}", path.display()))?;

    Ok(Attachment {
        name,
        size_bytes: metadata.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn picks_up_name_and_size_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("paper.pdf");
        let mut file = std::fs::File::create(&path).expect("create");
        file.write_all(&[0u8; 2048]).expect("write");

        let attachment = attachment_from_path(path.to_str().expect("utf8 path")).expect("pick");
        assert_eq!(attachment.name, "paper.pdf");
        assert_eq!(attachment.size_bytes, 2048);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.docx");
        std::fs::File::create(&path).expect("create");

        let padded = format!("  {}  ", path.display());
        let attachment = attachment_from_path(&padded).expect("pick");
        assert_eq!(attachment.name, "notes.docx");
        assert_eq!(attachment.size_bytes, 0);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(attachment_from_path("/no/such/file.pdf").is_err());
    }
}
