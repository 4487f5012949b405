use lite_gallery_domain::{GalleryState, ImageRecord, Route};
use log::debug;

/// Event handlers of the gallery grid and owner of the delete dialog.
///
/// Dialog transitions: `Closed --long_press--> Open`, `Open --cancel--> Closed`,
/// `Open --confirm--> Closed` (removing the selected record).
#[derive(Debug, Clone, Default)]
pub struct GalleryController {
    state: GalleryState,
}

impl GalleryController {
    pub fn new(state: GalleryState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn on_select(&self, record: &ImageRecord) -> Route {
        Route::Viewer {
            uri: record.uri.clone(),
        }
    }

    /// Opens the delete dialog for `record`. Returns `false` when the event is
    /// ignored: the dialog is already open, or the record is not displayed.
    pub fn on_long_press(&mut self, record: &ImageRecord) -> bool {
        if self.state.dialog_open() {
            debug!("long press on {} ignored, dialog already open", record.id);
            return false;
        }
        if !self.state.open_dialog(record.clone()) {
            debug!("long press on {} ignored, record not in gallery", record.id);
            return false;
        }
        true
    }

    pub fn on_cancel(&mut self) {
        self.state.close_dialog();
    }

    /// Removes the selected record and closes the dialog. Does nothing while
    /// the dialog is closed.
    pub fn on_confirm_delete(&mut self) -> Option<ImageRecord> {
        if !self.state.dialog_open() {
            return None;
        }

        let removed = self
            .state
            .selected_image()
            .map(|record| record.id.clone())
            .and_then(|id| self.state.remove(&id));
        self.state.close_dialog();
        removed
    }
}

#[cfg(test)]
mod tests {
    use lite_gallery_domain::{DialogState, ImageId};

    use super::*;

    fn controller() -> GalleryController {
        let records = (1..=6)
            .map(|n| ImageRecord::new(n.to_string(), format!("https://img.test/{n}.jpg")))
            .collect::<Result<Vec<_>, _>>()
            .expect("records");
        GalleryController::new(GalleryState::new(records).expect("state"))
    }

    fn record(controller: &GalleryController, id: &str) -> ImageRecord {
        controller
            .state()
            .find(&ImageId::new(id).expect("id"))
            .cloned()
            .expect("record present")
    }

    fn ids(controller: &GalleryController) -> Vec<String> {
        controller
            .state()
            .records()
            .iter()
            .map(|r| r.id.to_string())
            .collect()
    }

    #[test]
    fn long_press_then_confirm_removes_record() {
        let mut controller = controller();
        let third = record(&controller, "3");

        assert!(controller.on_long_press(&third));
        assert_eq!(controller.state().dialog(), DialogState::Open);
        assert_eq!(controller.state().selected_image(), Some(&third));

        let removed = controller.on_confirm_delete();
        assert_eq!(removed, Some(third));
        assert_eq!(ids(&controller), vec!["1", "2", "4", "5", "6"]);
        assert!(!controller.state().dialog_open());
    }

    #[test]
    fn long_press_then_cancel_leaves_sequence_unchanged() {
        let mut controller = controller();
        let before = controller.state().records().to_vec();
        let third = record(&controller, "3");

        controller.on_long_press(&third);
        controller.on_cancel();

        assert_eq!(controller.state().records(), before.as_slice());
        assert!(!controller.state().dialog_open());
    }

    #[test]
    fn every_record_can_be_deleted_in_place() {
        for n in 1..=6 {
            let mut controller = controller();
            let target = record(&controller, &n.to_string());
            let expected: Vec<String> = ids(&controller)
                .into_iter()
                .filter(|id| id != &n.to_string())
                .collect();

            controller.on_long_press(&target);
            controller.on_confirm_delete();

            assert_eq!(controller.state().len(), 5);
            assert!(!controller.state().contains(&target.id));
            assert_eq!(ids(&controller), expected);
        }
    }

    #[test]
    fn select_returns_viewer_route_without_mutation() {
        let controller = controller();
        let before = controller.state().clone();
        let second = record(&controller, "2");

        let route = controller.on_select(&second);

        assert_eq!(
            route,
            Route::Viewer {
                uri: "https://img.test/2.jpg".to_string()
            }
        );
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn confirm_while_closed_is_noop() {
        let mut controller = controller();
        assert_eq!(controller.on_confirm_delete(), None);
        assert_eq!(controller.state().len(), 6);
    }

    #[test]
    fn confirm_after_cancel_does_not_delete() {
        let mut controller = controller();
        let first = record(&controller, "1");
        controller.on_long_press(&first);
        controller.on_cancel();

        assert_eq!(controller.on_confirm_delete(), None);
        assert!(controller.state().contains(&first.id));
    }

    #[test]
    fn long_press_while_open_keeps_original_selection() {
        let mut controller = controller();
        let first = record(&controller, "1");
        let second = record(&controller, "2");

        assert!(controller.on_long_press(&first));
        assert!(!controller.on_long_press(&second));
        assert_eq!(controller.state().selected_image(), Some(&first));
    }

    #[test]
    fn long_press_on_unknown_record_is_ignored() {
        let mut controller = controller();
        let stranger = ImageRecord::new("99", "https://img.test/99.jpg").expect("record");

        assert!(!controller.on_long_press(&stranger));
        assert!(!controller.state().dialog_open());
    }

    #[test]
    fn deleted_record_cannot_be_long_pressed_again() {
        let mut controller = controller();
        let third = record(&controller, "3");
        controller.on_long_press(&third);
        controller.on_confirm_delete();

        assert!(!controller.on_long_press(&third));
    }
}
