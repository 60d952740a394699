#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, Directory};
use crate::domain::seed::default_activities;
use crate::utils::error::Result;
use crate::utils::validation::{validate_activity_seed, validate_socket_addr, Validate};

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// 合併 CLI 與設定檔之後的伺服器設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub enforce_capacity: bool,
    pub activities: Directory,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            enforce_capacity: false,
            activities: default_activities(),
        }
    }
}

impl ConfigProvider for ServerConfig {
    fn bind_addr(&self) -> &str {
        &self.bind
    }

    fn enforce_capacity(&self) -> bool {
        self.enforce_capacity
    }

    fn seed_activities(&self) -> Directory {
        self.activities.clone()
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("server.bind", &self.bind)?;
        for (name, activity) in &self.activities {
            validate_activity_seed(name, &activity.participants)?;
        }
        Ok(())
    }
}
