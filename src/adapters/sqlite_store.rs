use crate::domain::model::User;
use crate::domain::ports::UserStore;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;
use futures::StreamExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::str::FromStr;

const SELECT_USERS: &str = "SELECT id, name, email, created_at FROM users ORDER BY id";

/// SQLite-backed user store.
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    /// 建立資料庫連線並執行 migration
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // An in-memory database lives inside a single connection; a second
        // pooled connection would see an empty schema.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a store from an existing pool (for testing)
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // Embedded migrations for reliability across execution contexts
        const MIGRATIONS: &[&str] = &[include_str!("../../migrations/001_create_users.sql")];

        for migration in MIGRATIONS {
            sqlx::query(migration).execute(pool).await?;
        }

        Ok(())
    }
}

fn row_to_user(row: &SqliteRow) -> std::result::Result<User, sqlx::Error> {
    let created_at: i64 = row.try_get("created_at")?;

    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        created_at: DateTime::from_timestamp(created_at, 0).unwrap_or(DateTime::UNIX_EPOCH),
    })
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn all_users(&self) -> Result<Vec<User>> {
        let rows = sqlx::query(SELECT_USERS).fetch_all(&self.pool).await?;
        let users = rows
            .iter()
            .map(row_to_user)
            .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?;

        Ok(users)
    }

    fn stream_users(&self) -> BoxStream<'_, Result<User>> {
        let rows = sqlx::query(SELECT_USERS).fetch(&self.pool);

        Box::pin(rows.map(|row| {
            row.map_err(AppError::from)
                .and_then(|r| row_to_user(&r).map_err(AppError::from))
        }))
    }

    async fn seed_users(&self, users: &[User]) -> Result<()> {
        for user in users {
            sqlx::query(
                "INSERT OR REPLACE INTO users (id, name, email, created_at) VALUES (?, ?, ?, ?)",
            )
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.created_at.timestamp())
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }
}

/// Sample rows used when the configured store is empty.
pub fn demo_users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User {
            id: 1,
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            created_at: now,
        },
        User {
            id: 2,
            name: "Alan Turing".to_string(),
            email: "alan@example.com".to_string(),
            created_at: now,
        },
        User {
            id: 3,
            name: "Barbara Liskov".to_string(),
            email: "barbara@example.com".to_string(),
            created_at: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store_with_demo_rows() -> SqliteUserStore {
        let store = SqliteUserStore::connect("sqlite::memory:").await.unwrap();
        store.seed_users(&demo_users()).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_seed_and_read_back() {
        let store = store_with_demo_rows().await;

        let users = store.all_users().await.unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(users[0].name, "Grace Hopper");
        assert_eq!(users[2].email, "barbara@example.com");
    }

    #[tokio::test]
    async fn test_stream_users_yields_rows_in_id_order() {
        let store = store_with_demo_rows().await;

        let ids: Vec<i64> = store
            .stream_users()
            .map(|user| user.unwrap().id)
            .collect()
            .await;

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_empty_store_yields_empty_results() {
        let store = SqliteUserStore::connect("sqlite::memory:").await.unwrap();

        assert!(store.all_users().await.unwrap().is_empty());

        let streamed: Vec<_> = store.stream_users().collect().await;
        assert!(streamed.is_empty());
    }

    #[tokio::test]
    async fn test_seeding_twice_is_idempotent() {
        let store = store_with_demo_rows().await;
        store.seed_users(&demo_users()).await.unwrap();

        let users = store.all_users().await.unwrap();
        assert_eq!(users.len(), 3);
    }
}
