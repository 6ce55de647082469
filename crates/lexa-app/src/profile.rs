use std::env;
use std::fs;
use std::path::PathBuf;

use lexa_config::Config;
use serde::{Deserialize, Serialize};

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Profile files live under `<root>/profiles/<name>.json`
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `LEXA_HOME`, or `.lexa` in the working directory
    pub fn from_env() -> Self {
        let root = env::var("LEXA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".lexa"));
        Self::new(root)
    }

    fn profiles_dir(&self) -> PathBuf {
        self.root.join("profiles")
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{name}.json"))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.profile_path(name).exists()
    }

    /// Create the profile folder and the main profile if missing
    pub fn init_user_config(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.profiles_dir())?;

        let main_profile = self.profile_path("main");
        if !main_profile.exists() {
            // Environment overrides seed the first profile
            let profile = Profile {
                name: "main".into(),
                value: Config::new(),
            };
            fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
            tracing::info!("Created main profile at {}", main_profile.display());
        }

        Ok(())
    }

    /// Load a profile by name, falling back to main, then to defaults
    pub fn load_user_profile(&self, name: &str) -> anyhow::Result<Config> {
        let profile_file = self.profile_path(name);
        if profile_file.exists() {
            return self.read(profile_file);
        }

        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        let main_file = self.profile_path("main");
        if main_file.exists() {
            self.read(main_file)
        } else {
            Ok(Config::new())
        }
    }

    /// Add a new profile cloned from main
    pub fn add_profile_from_default(&self, new_name: &str) -> anyhow::Result<PathBuf> {
        let profile = Profile {
            name: new_name.into(),
            value: self.load_user_profile("main")?,
        };
        let file = self.profile_path(new_name);
        fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created new profile: {new_name}");
        Ok(file)
    }

    fn read(&self, path: PathBuf) -> anyhow::Result<Config> {
        let data = fs::read_to_string(path)?;
        let profile: Profile = serde_json::from_str(&data)?;
        Ok(profile.value)
    }
}

#[cfg(test)]
mod tests {
    use lexa_types::Language;

    use super::*;

    #[test]
    fn test_init_creates_main_profile_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());

        store.init_user_config().unwrap();
        let main = dir.path().join("profiles").join("main.json");
        assert!(main.exists());

        fs::write(
            &main,
            r#"{"name": "main", "value": {"translator": {"target_lang": "de"}}}"#,
        )
        .unwrap();
        store.init_user_config().unwrap();

        let config = store.load_user_profile("main").unwrap();
        assert_eq!(config.translator.target_lang, Language::De);
    }

    #[test]
    fn test_unknown_profile_falls_back_to_main() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        store.init_user_config().unwrap();
        fs::write(
            store.profile_path("main"),
            r#"{"name": "main", "value": {"quiz": {"question_count": 3}}}"#,
        )
        .unwrap();

        let config = store.load_user_profile("travel").unwrap();
        assert_eq!(config.quiz.question_count, 3);
    }

    #[test]
    fn test_added_profile_copies_main() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        store.init_user_config().unwrap();

        let path = store.add_profile_from_default("work").unwrap();

        assert!(path.ends_with("work.json"));
        let profile: Profile = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(profile.name, "work");
    }
}
