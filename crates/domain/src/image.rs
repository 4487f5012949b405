use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageId(String);

impl ImageId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyImageId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImageId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageId> for String {
    fn from(value: ImageId) -> Self {
        value.0
    }
}

impl Display for ImageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One gallery entry. The id is stable for the lifetime of the process and
/// unique within a [`crate::GalleryState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawImageRecord")]
pub struct ImageRecord {
    pub id: ImageId,
    pub uri: String,
}

impl ImageRecord {
    pub fn new(id: impl Into<String>, uri: impl Into<String>) -> Result<Self, DomainError> {
        let id = ImageId::new(id)?;
        let uri = uri.into();
        if uri.trim().is_empty() {
            return Err(DomainError::EmptyUri(id.to_string()));
        }
        Ok(Self { id, uri })
    }
}

#[derive(Deserialize)]
struct RawImageRecord {
    id: String,
    uri: String,
}

impl TryFrom<RawImageRecord> for ImageRecord {
    type Error = DomainError;

    fn try_from(value: RawImageRecord) -> Result<Self, Self::Error> {
        Self::new(value.id, value.uri)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Other,
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8, row-major.
    pub rgba: Vec<u8>,
}

pub fn detect_image_kind(path: &Path) -> ImageKind {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return ImageKind::Unsupported;
    };

    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => ImageKind::Jpeg,
        "png" => ImageKind::Png,
        "gif" | "webp" | "bmp" => ImageKind::Other,
        _ => ImageKind::Unsupported,
    }
}
