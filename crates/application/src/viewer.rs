use lite_gallery_domain::{Route, ViewerAction};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The affordance is displayed but has no behavior attached.
    Inert,
}

/// Full-screen presentation of one image. Holds nothing but the uri it was
/// opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerScreen {
    uri: String,
}

impl ViewerScreen {
    pub const TITLE: &'static str = "Foto";

    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::Viewer { uri } => Some(Self::new(uri.clone())),
            Route::Gallery => None,
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn title(&self) -> &'static str {
        Self::TITLE
    }

    pub fn actions(&self) -> [ViewerAction; 3] {
        ViewerAction::ALL
    }

    // Extension point: like/share/more are declared without behavior.
    pub fn trigger(&self, action: ViewerAction) -> ActionOutcome {
        debug!("viewer action {} on {} has no handler", action.label(), self.uri);
        ActionOutcome::Inert
    }
}
