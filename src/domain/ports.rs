use crate::domain::model::{RecipeReport, User};
use crate::utils::error::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;

/// A self-contained stream pipeline that can be driven to a report.
#[async_trait]
pub trait Recipe: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self) -> Result<RecipeReport>;
}

/// HTTP retrieval of users, exposed both as a one-shot fetch and as a stream.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>>;
    fn user_stream(&self) -> BoxStream<'_, Result<User>>;
}

/// Declarative query access to persisted users.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn all_users(&self) -> Result<Vec<User>>;
    fn stream_users(&self) -> BoxStream<'_, Result<User>>;
    async fn seed_users(&self, users: &[User]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn database_url(&self) -> &str;
    fn recipes(&self) -> &[String];
}
