use crate::domain::model::User;
use crate::domain::ports::UserApi;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use futures::stream::{self, BoxStream};
use futures::TryStreamExt;
use reqwest::Client;
use std::time::Duration;

/// Fetches users from a JSON endpoint.
pub struct HttpUserApi {
    client: Client,
    endpoint: String,
}

impl HttpUserApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        tracing::debug!("Requesting users from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("API response status: {}", response.status());
        let users = response.error_for_status()?.json::<Vec<User>>().await?;

        Ok(users)
    }

    fn user_stream(&self) -> BoxStream<'_, Result<User>> {
        // One fetch, re-emitted item by item.
        Box::pin(
            stream::once(self.fetch_users())
                .map_ok(|users| stream::iter(users.into_iter().map(Ok::<User, AppError>)))
                .try_flatten(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use httpmock::prelude::*;

    fn mock_users() -> serde_json::Value {
        serde_json::json!([
            {"id": 1, "name": "Ann", "email": "ann@example.com"},
            {"id": 2, "name": "Ben", "email": "ben@example.com"}
        ])
    }

    #[tokio::test]
    async fn test_fetch_users_parses_the_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_users());
        });

        let api = HttpUserApi::new(server.url("/users"));
        let users = api.fetch_users().await.unwrap();

        api_mock.assert();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Ann");
        assert_eq!(users[1].email, "ben@example.com");
    }

    #[tokio::test]
    async fn test_user_stream_emits_item_by_item() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_users());
        });

        let api = HttpUserApi::new(server.url("/users"));
        let names: Vec<String> = api
            .user_stream()
            .map(|user| user.unwrap().name)
            .collect()
            .await;

        assert_eq!(names, vec!["Ann".to_string(), "Ben".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_users_surfaces_http_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(500);
        });

        let api = HttpUserApi::new(server.url("/users"));
        let result = api.fetch_users().await;

        assert!(matches!(result, Err(AppError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_fetch_users_with_empty_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let api = HttpUserApi::new(server.url("/users"));
        let users = api.fetch_users().await.unwrap();

        assert!(users.is_empty());
    }
}
