use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "favorites.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct FavoritesConfig {
    /// File backing the key-value store
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl FavoritesConfig {
    pub fn new() -> Self {
        let path = env::var("LEXA_FAVORITES_PATH").unwrap_or_else(|_| default_path());

        Self { path }
    }
}
