use std::collections::HashSet;

use crate::{DomainError, ImageId, ImageRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// In-memory gallery contents plus the delete-confirmation dialog.
///
/// Order of `records` is display order. While the dialog is open the selected
/// record is a member of `records`; it only leaves the sequence through
/// [`GalleryState::remove`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    records: Vec<ImageRecord>,
    selected_image: Option<ImageRecord>,
    dialog: DialogState,
}

impl GalleryState {
    pub fn new(records: Vec<ImageRecord>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(DomainError::DuplicateImageId(record.id.to_string()));
            }
        }

        Ok(Self {
            records,
            selected_image: None,
            dialog: DialogState::Closed,
        })
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn selected_image(&self) -> Option<&ImageRecord> {
        self.selected_image.as_ref()
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog == DialogState::Open
    }

    pub fn contains(&self, id: &ImageId) -> bool {
        self.find(id).is_some()
    }

    pub fn find(&self, id: &ImageId) -> Option<&ImageRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Opens the delete confirmation for `record`. Returns false, leaving the
    /// state untouched, when the record is not in the gallery.
    pub fn open_dialog(&mut self, record: ImageRecord) -> bool {
        if !self.contains(&record.id) {
            return false;
        }
        self.selected_image = Some(record);
        self.dialog = DialogState::Open;
        true
    }

    /// Closes the dialog. The selection is left in place.
    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::Closed;
    }

    pub fn remove(&mut self, id: &ImageId) -> Option<ImageRecord> {
        let index = self.records.iter().position(|record| &record.id == id)?;
        Some(self.records.remove(index))
    }
}
