// Router module: owns which of the two screens is displayed.
// Screens never switch themselves; they ask the router to navigate.

use log::debug;
use thiserror::Error;

/// Path of the upload screen.
pub const UPLOAD_PATH: &str = "/";
/// Path of the table-of-contents screen.
pub const CONTENTS_PATH: &str = "/toc";

/// The two screens the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Upload,
    Contents,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no screen is mapped to path `{0}`")]
    Unknown(String),
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Upload => UPLOAD_PATH,
            Route::Contents => CONTENTS_PATH,
        }
    }

    /// Resolve a path to its screen. Only exact matches are mapped.
    pub fn from_path(path: &str) -> Result<Self, RouteError> {
        match path {
            UPLOAD_PATH => Ok(Route::Upload),
            CONTENTS_PATH => Ok(Route::Contents),
            other => Err(RouteError::Unknown(other.to_string())),
        }
    }
}

/// Holds the current navigation state. There are no guards: any caller may
/// move to either route at any time.
#[derive(Debug, Default)]
pub struct Router {
    current: Route,
}

impl Router {
    /// A router showing the upload screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// A router starting on `route`.
    pub fn starting_at(route: Route) -> Self {
        Router { current: route }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn navigate(&mut self, route: Route) {
        debug!("navigate {} -> {}", self.current.path(), route.path());
        self.current = route;
    }
}
