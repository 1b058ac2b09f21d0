//! External service port traits (binary object storage).

use async_trait::async_trait;

use super::error::UploadError;

// =============================================================================
// Upload Types
// =============================================================================

/// A raw uploaded file as handed over by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FilePayload {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Category tag for object-storage pathing. The pin core always uploads
/// under `Pin`; the other variants belong to sibling cores sharing the
/// same store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageCategory {
    Pin,
    Report,
    Member,
}

impl ImageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pin => "pin",
            Self::Report => "report",
            Self::Member => "member",
        }
    }
}

// =============================================================================
// Upload Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UploadPort: Send + Sync {
    /// Upload every payload and return one public URL per file.
    ///
    /// Output order matches input order; a partial upload is an error, not
    /// a shorter list.
    async fn upload_all(
        &self,
        files: &[FilePayload],
        category: ImageCategory,
    ) -> Result<Vec<String>, UploadError>;
}
