pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use app::{router, serve, AppState};
pub use config::ServerConfig;
pub use core::directory::ActivityDirectory;
pub use domain::model::{Activity, Directory};
pub use utils::error::{ActivityError, Result};
