use crate::core::{Recipe, RecipeReport, Result, UserApi, UserStore};
use async_trait::async_trait;
use futures::StreamExt;

/// Consume the HTTP port's user stream and report one line per user.
pub struct ApiFetch<A: UserApi> {
    api: A,
}

impl<A: UserApi> ApiFetch<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: UserApi> Recipe for ApiFetch<A> {
    fn name(&self) -> &'static str {
        "api"
    }

    async fn run(&self) -> Result<RecipeReport> {
        let mut report = RecipeReport::new(self.name());

        let mut users = self.api.user_stream();
        while let Some(user) = users.next().await {
            let user = user?;
            report.emitted.push(format!("{} <{}>", user.name, user.email));
        }

        report.completed = true;
        Ok(report)
    }
}

/// Consume the store port's row stream and report one line per user.
pub struct StoreQuery<S: UserStore> {
    store: S,
}

impl<S: UserStore> StoreQuery<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: UserStore> Recipe for StoreQuery<S> {
    fn name(&self) -> &'static str {
        "store"
    }

    async fn run(&self) -> Result<RecipeReport> {
        let mut report = RecipeReport::new(self.name());

        let mut users = self.store.stream_users();
        while let Some(user) = users.next().await {
            let user = user?;
            report.emitted.push(format!("{} <{}>", user.name, user.email));
        }

        report.completed = true;
        Ok(report)
    }
}
