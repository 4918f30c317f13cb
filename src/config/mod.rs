pub mod toml_config;

use crate::core::{ConfigProvider, CATALOGUE};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;

pub use toml_config::TomlConfig;

pub const DEFAULT_API_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "stream-recipes")]
#[command(about = "Run reactive stream recipes against HTTP and SQLite backends")]
pub struct CliConfig {
    #[arg(
        long,
        value_delimiter = ',',
        help = "Recipes to run (default: the whole catalogue)"
    )]
    pub recipes: Vec<String>,

    #[arg(long, help = "Users endpoint returning a JSON array")]
    pub api_endpoint: Option<String>,

    #[arg(long, help = "SQLite URL for the user store")]
    pub database_url: Option<String>,

    #[arg(long, help = "Load settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Emit reports as JSON lines")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn into_settings(self, file: Option<TomlConfig>) -> Settings {
        Settings::resolve(self.recipes, self.api_endpoint, self.database_url, file)
    }
}

/// Fully resolved configuration: CLI flags win over file values, file values
/// over defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub recipes: Vec<String>,
    pub api_endpoint: String,
    pub api_timeout_seconds: Option<u64>,
    pub database_url: String,
    pub seed_demo_users: bool,
}

impl Settings {
    pub fn resolve(
        recipes: Vec<String>,
        api_endpoint: Option<String>,
        database_url: Option<String>,
        file: Option<TomlConfig>,
    ) -> Self {
        let api = file.as_ref().and_then(|f| f.api.clone());
        let store = file.as_ref().and_then(|f| f.store.clone());
        let file_recipes = file
            .as_ref()
            .and_then(|f| f.recipes.clone())
            .map(|r| r.names)
            .unwrap_or_default();

        Self {
            recipes: if recipes.is_empty() {
                file_recipes
            } else {
                recipes
            },
            api_endpoint: api_endpoint
                .or_else(|| api.as_ref().map(|a| a.endpoint.clone()))
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            api_timeout_seconds: api.and_then(|a| a.timeout_seconds),
            database_url: database_url
                .or_else(|| store.as_ref().map(|s| s.database_url.clone()))
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            seed_demo_users: store.and_then(|s| s.seed_demo_users).unwrap_or(true),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(Vec::new(), None, None, None)
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn database_url(&self) -> &str {
        &self.database_url
    }

    fn recipes(&self) -> &[String] {
        &self.recipes
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_non_empty_string("database_url", &self.database_url)?;
        validation::validate_known_values("recipes", &self.recipes, CATALOGUE)?;

        if let Some(timeout) = self.api_timeout_seconds {
            validation::validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
