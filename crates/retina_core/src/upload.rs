use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions offered by the file picker.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "bmp", "gif", "tif", "tiff", "webp",
];

/// Raw image selected by the user, held until it is submitted or cleared.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl std::fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .field("mime", &self.mime)
            .finish()
    }
}

impl UploadedFile {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| UploadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Self::from_bytes(name, bytes)
    }

    /// Builds an upload from bytes, sniffing the image format from content.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, UploadError> {
        let name = name.into();
        let format = image::guess_format(&bytes).map_err(|_| UploadError::NotAnImage {
            name: name.clone(),
        })?;
        Ok(Self {
            name,
            bytes,
            mime: format.to_mime_type(),
        })
    }
}

/// A selected file together with the preview resource derived from it.
///
/// Dropping the upload drops the preview, which is how the UI texture gets
/// released on clear or replace.
#[derive(Debug)]
pub struct Upload<P> {
    pub file: UploadedFile,
    pub preview: P,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{name} is not a supported image")]
    NotAnImage { name: String },
}
