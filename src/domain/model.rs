use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 一個課外活動
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// 依報名順序保存，每個 email 最多出現一次
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}

/// 活動名稱 -> 活動（名稱完全比對，不做大小寫或空白正規化）
pub type Directory = BTreeMap<String, Activity>;

/// 成功回應 `{"message": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity),
        }
    }

    pub fn removed(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Removed {} from {}", email, activity),
        }
    }
}

/// 錯誤回應 `{"detail": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub activities: usize,
}
