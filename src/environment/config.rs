use serde::{Deserialize, Serialize};
use serde_json::{from_slice, to_string_pretty};
use std::path::{Path, PathBuf};

use super::repo::RepoOptions;

const CONFIG_PATH: &str = "config.json";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window and header title
    pub title: String,
    /// Id of the element the component tree is mounted into
    pub mount_id: String,
    /// Location the router resolves on launch
    pub route: String,
    /// Whether the planets presenter loads the list when it is mounted
    pub fetch_on_mount: bool,
    pub max_history: usize,
    pub width: u32,
    pub height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Planets".to_string(),
            mount_id: "root".to_string(),
            route: "/".to_string(),
            fetch_on_mount: true,
            max_history: RepoOptions::default().max_history,
            width: 800,
            height: 600,
        }
    }
}

impl AppConfig {
    /// Read the configuration from the platform config directory, falling
    /// back to the defaults if there is none or it can't be read.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            log::warn!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_or_create(&path)
    }

    /// Like [`AppConfig::load`] for an explicit path. A missing file is
    /// created with the defaults so they can be edited.
    pub fn load_or_create(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(Some(config)) => config,
            Ok(None) => {
                let config = Self::default();
                if let Err(e) = config.save_to(path) {
                    log::error!("{e}");
                }
                config
            }
            Err(e) => {
                log::error!("{e}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, String> {
        if !path.exists() {
            return Ok(None);
        };
        let data = std::fs::read(path)
            .map_err(|e| format!("Could not read {}: {e:?}", path.display()))?;
        let obj: Self =
            from_slice(&data).map_err(|e| format!("Could not parse {}: {e:?}", path.display()))?;
        Ok(Some(obj))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Could not create {}: {e:?}", parent.display()))?;
        }
        let data = to_string_pretty(self).map_err(|e| format!("Could not encode config:{e:?}"))?;
        std::fs::write(path, data)
            .map_err(|e| format!("Could not write to {}: {e:?}", path.display()))?;
        Ok(())
    }

    pub fn repo_options(&self) -> RepoOptions {
        RepoOptions {
            max_history: self.max_history,
        }
    }
}

fn config_path() -> Option<PathBuf> {
    use directories_next::ProjectDirs;
    let proj_dirs = ProjectDirs::from("com", "planets", "planets")?;
    Some(proj_dirs.config_dir().join(CONFIG_PATH))
}
