use lite_gallery_domain::{DecodedImage, ImageRecord};

use crate::ApplicationError;

/// Produces the seed list the gallery starts from.
pub trait ImageSource {
    fn load(&self) -> Result<Vec<ImageRecord>, ApplicationError>;

    fn describe(&self) -> String;
}

pub trait ImageDecoder {
    /// Decodes `uri` to RGBA. Neither side of the result exceeds `max_side`;
    /// larger images are downscaled keeping their aspect ratio.
    fn decode(&self, uri: &str, max_side: u32) -> Result<DecodedImage, ApplicationError>;
}
