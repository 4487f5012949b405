use lite_gallery_domain::{GalleryState, ImageRecord, Route, ViewerAction};
use log::{debug, info};

use crate::{ApplicationError, GalleryController, ImageSource, Navigator, ViewerScreen};

#[derive(Debug, Clone)]
pub enum AppEvent {
    Select(ImageRecord),
    LongPress(ImageRecord),
    CancelDelete,
    ConfirmDelete,
    Back,
    ViewerAction(ViewerAction),
}

/// Single entry point for UI input: owns the gallery and the navigation stack.
#[derive(Debug, Clone, Default)]
pub struct AppController {
    gallery: GalleryController,
    navigator: Navigator,
}

impl AppController {
    pub fn new(state: GalleryState) -> Self {
        Self {
            gallery: GalleryController::new(state),
            navigator: Navigator::default(),
        }
    }

    pub fn bootstrap(source: &dyn ImageSource) -> Result<Self, ApplicationError> {
        let records = source.load()?;
        let state = GalleryState::new(records)?;
        info!(
            "gallery seeded with {} images from {}",
            state.len(),
            source.describe()
        );
        Ok(Self::new(state))
    }

    pub fn gallery(&self) -> &GalleryState {
        self.gallery.state()
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn current_viewer(&self) -> Option<ViewerScreen> {
        ViewerScreen::from_route(self.navigator.current())
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::Select(record) => {
                let route = self.gallery.on_select(&record);
                debug!("opening viewer for {}", record.id);
                self.navigator.navigate(route);
            }
            AppEvent::LongPress(record) => {
                if self.gallery.on_long_press(&record) {
                    debug!("delete dialog opened for {}", record.id);
                }
            }
            AppEvent::CancelDelete => {
                self.gallery.on_cancel();
                debug!("delete dialog dismissed");
            }
            AppEvent::ConfirmDelete => {
                if let Some(removed) = self.gallery.on_confirm_delete() {
                    info!(
                        "removed image {} ({} remaining)",
                        removed.id,
                        self.gallery.state().len()
                    );
                }
            }
            AppEvent::Back => {
                if !self.navigator.go_back() {
                    debug!("back ignored at gallery root");
                }
            }
            AppEvent::ViewerAction(action) => {
                if let Some(viewer) = self.current_viewer() {
                    viewer.trigger(action);
                }
            }
        }
    }
}
