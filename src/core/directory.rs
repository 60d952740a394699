use crate::core::{Activity, ActivityStore, Directory};
use crate::utils::error::{ActivityError, Result};
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// 記憶體內的活動目錄
///
/// 整個目錄由一把 `RwLock` 保護，報名與退出都在同一個寫鎖內完成檢查與修改。
/// Clone 只複製 `Arc`，所有 clone 共用同一份資料。
#[derive(Debug, Clone)]
pub struct ActivityDirectory {
    inner: Arc<RwLock<Directory>>,
    enforce_capacity: bool,
}

impl ActivityDirectory {
    pub fn new(seed: Directory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed)),
            enforce_capacity: false,
        }
    }

    /// 開啟人數上限檢查（預設關閉，`max_participants` 只是參考資訊）
    pub fn with_capacity_enforcement(mut self, enabled: bool) -> Self {
        self.enforce_capacity = enabled;
        self
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Directory>> {
        self.inner.read().map_err(|_| ActivityError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Directory>> {
        self.inner.write().map_err(|_| ActivityError::LockPoisoned)
    }

    pub fn list_activities(&self) -> Result<Directory> {
        Ok(self.read()?.clone())
    }

    pub fn get_activity(&self, name: &str) -> Result<Option<Activity>> {
        Ok(self.read()?.get(name).cloned())
    }

    pub fn signup(&self, name: &str, email: &str) -> Result<()> {
        let mut directory = self.write()?;
        let activity = directory
            .get_mut(name)
            .ok_or_else(|| ActivityError::ActivityNotFound {
                activity: name.to_string(),
            })?;

        if activity.has_participant(email) {
            return Err(ActivityError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        if self.enforce_capacity && activity.is_full() {
            return Err(ActivityError::ActivityFull {
                activity: name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        tracing::debug!(
            activity = %name,
            participants = activity.participants.len(),
            "participant added"
        );
        Ok(())
    }

    pub fn remove(&self, name: &str, email: &str) -> Result<()> {
        let mut directory = self.write()?;
        let activity = directory
            .get_mut(name)
            .ok_or_else(|| ActivityError::ActivityNotFound {
                activity: name.to_string(),
            })?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| ActivityError::ParticipantNotFound {
                activity: name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        tracing::debug!(
            activity = %name,
            participants = activity.participants.len(),
            "participant removed"
        );
        Ok(())
    }

    pub fn replace_all(&self, seed: Directory) -> Result<()> {
        *self.write()? = seed;
        Ok(())
    }

    pub fn activity_count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }
}

impl Default for ActivityDirectory {
    fn default() -> Self {
        Self::new(crate::domain::seed::default_activities())
    }
}

#[async_trait]
impl ActivityStore for ActivityDirectory {
    async fn list(&self) -> Result<Directory> {
        self.list_activities()
    }

    async fn enroll(&self, activity: &str, email: &str) -> Result<()> {
        self.signup(activity, email)
    }

    async fn withdraw(&self, activity: &str, email: &str) -> Result<()> {
        self.remove(activity, email)
    }

    async fn reset(&self, seed: Directory) -> Result<()> {
        self.replace_all(seed)
    }

    async fn count(&self) -> Result<usize> {
        self.activity_count()
    }
}
