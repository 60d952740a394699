use crate::config::toml_config::TomlConfig;
use crate::config::{ServerConfig, DEFAULT_BIND};
use crate::domain::seed::default_activities;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "mergington-activities")]
#[command(about = "Mergington High School extracurricular activities API")]
#[command(version)]
pub struct CliArgs {
    /// Address to listen on (overrides the config file)
    #[arg(short, long, env = "ACTIVITIES_BIND")]
    pub bind: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "ACTIVITIES_CONFIG")]
    pub config: Option<String>,

    /// Reject signups once an activity reaches max_participants
    #[arg(long, overrides_with = "no_enforce_capacity")]
    pub enforce_capacity: bool,

    /// Accept signups past max_participants, even if the config file enables the limit
    #[arg(long, overrides_with = "enforce_capacity")]
    pub no_enforce_capacity: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// 載入設定檔（如有），再套用命令列覆蓋
    pub fn resolve(&self) -> Result<ServerConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        Ok(self.merge(file))
    }

    /// 命令列上的人數上限設定；兩個旗標都沒給時回傳 None
    fn capacity_override(&self) -> Option<bool> {
        match (self.enforce_capacity, self.no_enforce_capacity) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub fn merge(&self, file: TomlConfig) -> ServerConfig {
        let bind = self
            .bind
            .clone()
            .or_else(|| file.bind().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());

        let enforce_capacity = self
            .capacity_override()
            .or_else(|| file.enforce_capacity())
            .unwrap_or(false);

        let activities = file.seed_directory().unwrap_or_else(default_activities);

        ServerConfig {
            bind,
            enforce_capacity,
            activities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_file() {
        let args = CliArgs::parse_from(["mergington-activities", "--bind", "127.0.0.1:9999"]);
        let file = TomlConfig::from_toml_str(
            "[server]\nbind = \"0.0.0.0:8080\"\nenforce_capacity = true\n",
        )
        .unwrap();

        let config = args.merge(file);
        assert_eq!(config.bind, "127.0.0.1:9999");
        assert!(config.enforce_capacity);
        assert_eq!(config.activities.len(), 3);
    }

    #[test]
    fn test_defaults_without_file() {
        let args = CliArgs::parse_from(["mergington-activities"]);
        let config = args.merge(TomlConfig::default());
        assert_eq!(config.bind, DEFAULT_BIND);
        assert!(!config.enforce_capacity);
        assert_eq!(args.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_cli_can_disable_capacity_enabled_in_file() {
        let file = || TomlConfig::from_toml_str("[server]\nenforce_capacity = true\n").unwrap();

        let args = CliArgs::parse_from(["mergington-activities", "--no-enforce-capacity"]);
        assert!(!args.merge(file()).enforce_capacity);

        let args = CliArgs::parse_from(["mergington-activities"]);
        assert!(args.merge(file()).enforce_capacity);
    }

    #[test]
    fn test_last_capacity_flag_wins() {
        let args = CliArgs::parse_from([
            "mergington-activities",
            "--enforce-capacity",
            "--no-enforce-capacity",
        ]);
        assert!(!args.merge(TomlConfig::default()).enforce_capacity);

        let args = CliArgs::parse_from([
            "mergington-activities",
            "--no-enforce-capacity",
            "--enforce-capacity",
        ]);
        assert!(args.merge(TomlConfig::default()).enforce_capacity);
    }

    #[test]
    fn test_json_log_format_flag() {
        let args = CliArgs::parse_from(["mergington-activities", "--log-format", "json", "-v"]);
        assert_eq!(args.log_format, LogFormat::Json);
        assert!(args.verbose);
    }
}
