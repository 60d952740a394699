use crate::domain::model::Directory;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::SocketAddr;

/// 活動資料的存取介面，HTTP handler 只依賴這個 trait
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// 回傳整個目錄的快照
    async fn list(&self) -> Result<Directory>;

    /// 報名；活動不存在回 `ActivityNotFound`，重複報名回 `AlreadySignedUp`
    async fn enroll(&self, activity: &str, email: &str) -> Result<()>;

    /// 退出；活動或參加者不存在都回 NotFound 類錯誤
    async fn withdraw(&self, activity: &str, email: &str) -> Result<()>;

    /// 以給定的資料整個取代目錄
    async fn reset(&self, seed: Directory) -> Result<()>;

    async fn count(&self) -> Result<usize>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn enforce_capacity(&self) -> bool;
    fn seed_activities(&self) -> Directory;

    fn socket_addr(&self) -> Result<SocketAddr> {
        crate::utils::validation::validate_socket_addr("server.bind", self.bind_addr())
    }
}
