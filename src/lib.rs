pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{Settings, TomlConfig};

pub use adapters::{HttpUserApi, SqliteUserStore};
pub use crate::core::{build_catalogue, RecipeRunner, CATALOGUE};
pub use domain::model::{RecipeReport, User};
pub use utils::error::{AppError, Result};
