use std::fs;
use std::path::PathBuf;

use lite_gallery_application::{ApplicationError, ImageSource};
use lite_gallery_domain::ImageRecord;

const BUILTIN_URIS: [&str; 6] = [
    "https://i.imgur.com/9n8MTr9.jpg",
    "https://imgur.com/25vQIqM.jpg",
    "https://imgur.com/Di3nhjW.jpg",
    "https://imgur.com/555IZEk.jpg",
    "https://imgur.com/9y7k6Z0.jpg",
    "https://imgur.com/iIfRxoz.jpg",
];

/// The fixed list the gallery starts with when nothing else is configured.
#[derive(Debug, Default)]
pub struct BuiltinSeed;

impl ImageSource for BuiltinSeed {
    fn load(&self) -> Result<Vec<ImageRecord>, ApplicationError> {
        BUILTIN_URIS
            .iter()
            .enumerate()
            .map(|(index, uri)| ImageRecord::new((index + 1).to_string(), *uri))
            .collect::<Result<Vec<_>, _>>()
            .map_err(ApplicationError::from)
    }

    fn describe(&self) -> String {
        "builtin seed list".to_string()
    }
}

/// A JSON array of `{"id": "...", "uri": "..."}` objects.
#[derive(Debug, Clone)]
pub struct JsonSeedFile {
    path: PathBuf,
}

impl JsonSeedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for JsonSeedFile {
    fn load(&self) -> Result<Vec<ImageRecord>, ApplicationError> {
        let raw = fs::read_to_string(&self.path).map_err(|error| {
            ApplicationError::Io(format!("failed to read seed file {:?}: {error}", self.path))
        })?;
        serde_json::from_str(&raw).map_err(|error| {
            ApplicationError::Parse(format!("invalid seed file {:?}: {error}", self.path))
        })
    }

    fn describe(&self) -> String {
        format!("seed file {}", self.path.display())
    }
}
