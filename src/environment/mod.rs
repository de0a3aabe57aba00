pub mod config;
pub mod repo;

use config::AppConfig;
use navicula::types::EnvironmentType;
use repo::Repo;

/// Everything a presenter needs from the outside world
#[derive(Clone)]
pub struct Environment {
    pub repo: Repo,
    pub config: AppConfig,
}

#[derive(Clone, Debug)]
pub enum AppEvent {
    ClosingWindow,
}

impl EnvironmentType for Environment {
    type AppEvent = AppEvent;
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("config", &self.config)
            .finish()
    }
}

impl Environment {
    pub fn new(config: AppConfig) -> Self {
        let repo = Repo::new(config.repo_options());
        Self { repo, config }
    }
}
