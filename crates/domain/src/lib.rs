mod error;
mod gallery;
mod image;
mod route;

pub use error::DomainError;
pub use gallery::{DialogState, GalleryState};
pub use image::{detect_image_kind, DecodedImage, ImageId, ImageKind, ImageRecord};
pub use route::{Route, ViewerAction};
