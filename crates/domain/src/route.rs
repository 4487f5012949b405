/// Screens of the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Gallery,
    Viewer { uri: String },
}

/// Footer affordances of the viewer. They carry no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    Like,
    Share,
    More,
}

impl ViewerAction {
    pub const ALL: [ViewerAction; 3] = [Self::Like, Self::Share, Self::More];

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Like => "♥",
            Self::Share => "↗",
            Self::More => "⋯",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Share => "share",
            Self::More => "more",
        }
    }
}
