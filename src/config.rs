//! Application configuration

/// Behavior switches for the todo store.
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    /// Accept empty-text submissions. On by default, matching the historical
    /// behavior of the app; turn off to reject them with an error.
    pub allow_empty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { allow_empty: true }
    }
}
