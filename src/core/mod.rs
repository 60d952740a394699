pub mod directory;

pub use crate::domain::model::{Activity, Directory};
pub use crate::domain::ports::{ActivityStore, ConfigProvider};
pub use crate::utils::error::Result;
