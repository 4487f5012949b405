use lite_gallery_domain::Route;

static ROOT: Route = Route::Gallery;

/// Stack navigator. The gallery is the root and is never popped.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Route::Gallery],
        }
    }
}

impl Navigator {
    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&ROOT)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }
}
