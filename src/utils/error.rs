use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student is already signed up")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Participant not found in this activity")]
    ParticipantNotFound { activity: String, email: String },

    #[error("Activity is full")]
    ActivityFull { activity: String, max_participants: u32 },

    #[error("Activity directory lock poisoned")]
    LockPoisoned,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

/// 錯誤分類，HTTP 層依此決定狀態碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Config,
    Internal,
}

impl ActivityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActivityError::ActivityNotFound { .. } | ActivityError::ParticipantNotFound { .. } => {
                ErrorKind::NotFound
            }
            ActivityError::AlreadySignedUp { .. } | ActivityError::ActivityFull { .. } => {
                ErrorKind::Conflict
            }
            ActivityError::TomlError(_)
            | ActivityError::ConfigError { .. }
            | ActivityError::InvalidConfigValueError { .. } => ErrorKind::Config,
            ActivityError::LockPoisoned
            | ActivityError::IoError(_)
            | ActivityError::ServerError { .. } => ErrorKind::Internal,
        }
    }

    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ActivityError::ActivityNotFound { activity } => {
                format!("Activity '{}' does not exist", activity)
            }
            ActivityError::AlreadySignedUp { activity, email } => {
                format!("{} is already signed up for {}", email, activity)
            }
            ActivityError::ParticipantNotFound { activity, email } => {
                format!("{} is not signed up for {}", email, activity)
            }
            ActivityError::ActivityFull {
                activity,
                max_participants,
            } => format!("{} is full ({} participants)", activity, max_participants),
            ActivityError::TomlError(_) => "Configuration file is not valid TOML".to_string(),
            ActivityError::IoError(e) => format!("File access failed: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NotFound => "Check the activity name and email; names are case-sensitive",
            ErrorKind::Conflict => "No action needed, or choose another activity",
            ErrorKind::Config => "Fix the configuration file or command-line flags and restart",
            ErrorKind::Internal => "Restart the server; if it persists, check the logs",
        }
    }
}

pub type Result<T> = std::result::Result<T, ActivityError>;
