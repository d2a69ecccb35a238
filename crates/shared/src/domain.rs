use std::path::Path;

/// Extensions the presentation layer should offer in its file picker.
/// Advisory only: the submission pipeline forwards whatever was selected.
pub const ACCEPTED_RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// A resume captured for submission: opaque bytes plus the original filename.
/// Immutable once attached to a request; a new selection replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeDocument {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }

    /// MIME type implied by the file extension. Unknown extensions fall back
    /// to `application/octet-stream`; the accept filter is not enforced here.
    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            _ => "application/octet-stream",
        }
    }
}
