use lexa_config::Config;

/// Shared, read-only application state
#[derive(Default)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
