use crate::LaunchId;

const LAUNCH_PREFIX: &str = "/launch/";

/// Screens reachable by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    List,
    /// `/launch/{id}`
    Launch(LaunchId),
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        if path == "/" || path.is_empty() {
            return Some(Route::List);
        }
        let id = path.strip_prefix(LAUNCH_PREFIX)?;
        let id = id.strip_suffix('/').unwrap_or(id);
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Route::Launch(LaunchId::new(id)))
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Launch(id) => format!("{LAUNCH_PREFIX}{id}"),
        }
    }
}
