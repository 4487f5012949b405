use std::path::PathBuf;

use lite_gallery_application::{ApplicationError, ImageSource};
use lite_gallery_domain::{detect_image_kind, ImageKind, ImageRecord};
use log::debug;
use walkdir::WalkDir;

/// Seeds the gallery from the supported images below a folder, in file-name
/// order. Ids are 1-based positions in that order.
#[derive(Debug, Clone)]
pub struct WalkdirImageSource {
    folder: PathBuf,
}

impl WalkdirImageSource {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }
}

impl ImageSource for WalkdirImageSource {
    fn load(&self) -> Result<Vec<ImageRecord>, ApplicationError> {
        if !self.folder.is_dir() {
            return Err(ApplicationError::InvalidInput(format!(
                "folder does not exist or is not a directory: {}",
                self.folder.display()
            )));
        }

        let mut records = Vec::new();
        let mut scanned_files = 0_usize;

        for entry in WalkDir::new(&self.folder)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }

            scanned_files += 1;
            let file_path = entry.path();
            if detect_image_kind(file_path) == ImageKind::Unsupported {
                continue;
            }

            let canonical = file_path
                .canonicalize()
                .map_err(|error| ApplicationError::Io(error.to_string()))?;
            let uri = format!("file://{}", canonical.to_string_lossy());
            records.push(ImageRecord::new((records.len() + 1).to_string(), uri)?);
        }

        debug!(
            "scanned {} files in {}, {} supported",
            scanned_files,
            self.folder.display(),
            records.len()
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("folder {}", self.folder.display())
    }
}
