use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 使用者資料，同時是 API 回應與資料庫列的形狀
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    // Endpoints that do not expose a creation time fall back to the epoch.
    #[serde(default = "default_created_at")]
    pub created_at: DateTime<Utc>,
}

fn default_created_at() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// What a recipe's subscription observed, in stream order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeReport {
    pub recipe: String,
    pub emitted: Vec<String>,
    pub errors: Vec<String>,
    pub notes: Vec<String>,
    /// False only when the subscription was cancelled or torn down early.
    pub completed: bool,
}

impl RecipeReport {
    pub fn new(recipe: &str) -> Self {
        Self {
            recipe: recipe.to_string(),
            emitted: Vec::new(),
            errors: Vec::new(),
            notes: Vec::new(),
            completed: false,
        }
    }

    pub fn failed(recipe: &str, message: impl Into<String>) -> Self {
        let mut report = Self::new(recipe);
        report.errors.push(message.into());
        report
    }

    pub fn is_failure(&self) -> bool {
        !self.completed
    }
}
