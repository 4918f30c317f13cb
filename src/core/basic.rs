use crate::core::{Recipe, RecipeReport, Result};
use crate::utils::error::AppError;
use async_trait::async_trait;
use futures::{future, stream, StreamExt};

/// A one-item stream: subscribing collects exactly that item and completes.
pub struct SingleValue {
    greeting: String,
}

impl SingleValue {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }
}

impl Default for SingleValue {
    fn default() -> Self {
        Self::new("hello, streams")
    }
}

#[async_trait]
impl Recipe for SingleValue {
    fn name(&self) -> &'static str {
        "single"
    }

    async fn run(&self) -> Result<RecipeReport> {
        let mut report = RecipeReport::new(self.name());

        report.emitted = stream::once(future::ready(self.greeting.clone()))
            .collect()
            .await;
        report.completed = true;

        Ok(report)
    }
}

/// A fallible stream consumed with explicit handling of the three event
/// kinds: item, error, completion.
pub struct EventHandling;

#[async_trait]
impl Recipe for EventHandling {
    fn name(&self) -> &'static str {
        "events"
    }

    async fn run(&self) -> Result<RecipeReport> {
        let mut report = RecipeReport::new(self.name());

        let mut fruits = stream::iter(vec![
            Ok::<_, AppError>("Apple".to_string()),
            Ok("Banana".to_string()),
        ]);

        while let Some(event) = fruits.next().await {
            match event {
                Ok(item) => {
                    tracing::debug!("next: {}", item);
                    report.emitted.push(item);
                }
                Err(e) => {
                    tracing::debug!("error: {}", e);
                    report.errors.push(e.to_string());
                }
            }
        }

        // The stream is exhausted, which is its completion signal.
        report.notes.push("done".to_string());
        report.completed = true;

        Ok(report)
    }
}
