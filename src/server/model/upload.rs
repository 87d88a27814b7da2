/// File received in a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-side file name; only its extension is kept.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Stored profile photo of a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePhoto {
    /// Photo held by the storage backend.
    Stored { content_type: String, bytes: Vec<u8> },
    /// External picture URL, typically the identity provider's avatar.
    External(String),
}
