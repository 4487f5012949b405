mod controller;
mod error;
mod gallery;
mod navigation;
mod ports;
mod viewer;

pub use controller::{AppController, AppEvent};
pub use error::ApplicationError;
pub use gallery::GalleryController;
pub use navigation::Navigator;
pub use ports::{ImageDecoder, ImageSource};
pub use viewer::{ActionOutcome, ViewerScreen};
