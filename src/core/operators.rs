use crate::core::{Recipe, RecipeReport, Result};
use async_trait::async_trait;
use futures::{future, stream, StreamExt};

/// Transform every item of a stream with `map`.
pub struct MapItem;

#[async_trait]
impl Recipe for MapItem {
    fn name(&self) -> &'static str {
        "map"
    }

    async fn run(&self) -> Result<RecipeReport> {
        let mut report = RecipeReport::new(self.name());

        report.emitted = stream::iter(vec!["apple"])
            .map(|fruit| fruit.to_uppercase())
            .collect()
            .await;
        report.completed = true;

        Ok(report)
    }
}

/// Chain `filter` and `map`: only items passing the predicate reach the
/// subscriber, already transformed.
pub struct FilterChain;

#[async_trait]
impl Recipe for FilterChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    async fn run(&self) -> Result<RecipeReport> {
        let mut report = RecipeReport::new(self.name());

        report.emitted = stream::iter(vec!["apple", "banana", "cherry"])
            .filter(|fruit| future::ready(fruit.starts_with('b')))
            .map(|fruit| fruit.to_uppercase())
            .collect()
            .await;
        report.completed = true;

        Ok(report)
    }
}
