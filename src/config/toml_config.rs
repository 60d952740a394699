use crate::domain::model::{Activity, Directory};
use crate::utils::error::{ActivityError, Result};
use crate::utils::validation::{
    validate_activity_seed, validate_socket_addr, validate_unique, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub activities: Option<Vec<ActivitySeed>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
    pub enforce_capacity: Option<bool>,
}

/// `[[activities]]` 區塊中的一筆初始活動
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySeed {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ActivityError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${ACTIVITIES_BIND})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ActivityError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bind(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.bind.as_deref())
    }

    pub fn enforce_capacity(&self) -> Option<bool> {
        self.server.as_ref().and_then(|s| s.enforce_capacity)
    }

    /// 設定檔中的活動；沒有 `[[activities]]` 時回傳 None
    pub fn seed_directory(&self) -> Option<Directory> {
        self.activities.as_ref().map(|seeds| {
            seeds
                .iter()
                .map(|seed| {
                    (
                        seed.name.clone(),
                        Activity {
                            description: seed.description.clone(),
                            schedule: seed.schedule.clone(),
                            max_participants: seed.max_participants,
                            participants: seed.participants.clone(),
                        },
                    )
                })
                .collect()
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(bind) = self.bind() {
            validate_socket_addr("server.bind", bind)?;
        }

        if let Some(seeds) = &self.activities {
            validate_unique("activities.name", seeds.iter().map(|s| s.name.as_str()))?;
            for seed in seeds {
                validate_activity_seed(&seed.name, &seed.participants)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[server]
bind = "0.0.0.0:9000"
enforce_capacity = true

[[activities]]
name = "Art Club"
description = "Painting and drawing"
schedule = "Thursdays, 3:30 PM - 5:00 PM"
max_participants = 15
participants = ["amelia@mergington.edu"]

[[activities]]
name = "Debate Team"
description = "Public speaking and argumentation"
schedule = "Wednesdays, 4:00 PM - 5:30 PM"
max_participants = 10
"#;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.bind(), Some("0.0.0.0:9000"));
        assert_eq!(config.enforce_capacity(), Some(true));
        assert!(config.validate().is_ok());

        let seed = config.seed_directory().unwrap();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed["Art Club"].participants, vec!["amelia@mergington.edu"]);
        assert!(seed["Debate Team"].participants.is_empty());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.bind().is_none());
        assert!(config.enforce_capacity().is_none());
        assert!(config.seed_directory().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("MERGINGTON_TEST_BIND", "127.0.0.1:8123");
        let config =
            TomlConfig::from_toml_str("[server]\nbind = \"${MERGINGTON_TEST_BIND}\"\n").unwrap();
        assert_eq!(config.bind(), Some("127.0.0.1:8123"));
    }

    #[test]
    fn test_duplicate_activity_rejected() {
        let content = r#"
[[activities]]
name = "Chess Club"
description = "a"
schedule = "b"
max_participants = 1

[[activities]]
name = "Chess Club"
description = "c"
schedule = "d"
max_participants = 2
"#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_duplicate_participant_rejected() {
        let content = r#"
[[activities]]
name = "Chess Club"
description = "a"
schedule = "b"
max_participants = 5
participants = ["x@mergington.edu", "x@mergington.edu"]
"#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[server\nbind = 1").unwrap_err();
        assert!(matches!(err, ActivityError::TomlError(_)));
    }
}
