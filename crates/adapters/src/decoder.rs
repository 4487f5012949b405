use std::path::{Path, PathBuf};

use image::ImageReader;
use lite_gallery_application::{ApplicationError, ImageDecoder};
use lite_gallery_domain::{detect_image_kind, DecodedImage, ImageKind};

const FILE_SCHEME: &str = "file://";

/// Decodes local images with the `image` crate. Remote uris are rejected: the
/// gallery never touches the network.
#[derive(Debug, Default)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, uri: &str, max_side: u32) -> Result<DecodedImage, ApplicationError> {
        let path = local_path_for_uri(uri)?;
        if detect_image_kind(&path) == ImageKind::Unsupported {
            return Err(ApplicationError::Unsupported(format!(
                "unsupported image format: {:?}",
                path
            )));
        }

        let mut image = ImageReader::open(&path)
            .map_err(|error| ApplicationError::Io(format!("failed to open {:?}: {error}", path)))?
            .with_guessed_format()
            .map_err(|error| {
                ApplicationError::Decode(format!("failed to detect format {:?}: {error}", path))
            })?
            .decode()
            .map_err(|error| {
                ApplicationError::Decode(format!("failed to decode {:?}: {error}", path))
            })?;

        if image.width() > max_side || image.height() > max_side {
            image = image.thumbnail(max_side, max_side);
        }

        let rgba = image.to_rgba8();
        Ok(DecodedImage {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}

pub fn local_path_for_uri(uri: &str) -> Result<PathBuf, ApplicationError> {
    if let Some(path) = uri.strip_prefix(FILE_SCHEME) {
        return Ok(PathBuf::from(path));
    }

    match uri.split_once("://") {
        Some((scheme, _)) => Err(ApplicationError::Unsupported(format!(
            "{scheme} uris are not loaded: {uri}"
        ))),
        None => Ok(Path::new(uri).to_path_buf()),
    }
}
