use crate::core::{Recipe, RecipeReport, Result};
use async_trait::async_trait;
use futures::{stream, StreamExt};
use std::time::Duration;
use tokio::task::JoinSet;
use tokio_stream::wrappers::IntervalStream;

/// Register subscriptions in the runtime's lifecycle container and tear the
/// set down with `abort_all`: a finite subscription completes on its own, an
/// interval subscription only ends when aborted.
pub struct SubscriptionCleanup;

#[async_trait]
impl Recipe for SubscriptionCleanup {
    fn name(&self) -> &'static str {
        "disposal"
    }

    async fn run(&self) -> Result<RecipeReport> {
        let mut report = RecipeReport::new(self.name());
        let mut subscriptions: JoinSet<Option<String>> = JoinSet::new();

        subscriptions.spawn(async {
            let mut items = stream::iter(vec!["clean up".to_string()]);
            let mut last = None;
            while let Some(item) = items.next().await {
                last = Some(item);
            }
            last
        });

        subscriptions.spawn(async {
            let mut ticks = IntervalStream::new(tokio::time::interval(Duration::from_millis(5)));
            loop {
                ticks.next().await;
            }
        });

        // Only the finite subscription can finish, so the first join is its item.
        if let Some(first) = subscriptions.join_next().await {
            if let Some(item) = first? {
                report.emitted.push(item);
            }
        }

        subscriptions.abort_all();
        while let Some(outcome) = subscriptions.join_next().await {
            match outcome {
                Ok(_) => {}
                Err(e) if e.is_cancelled() => {
                    report
                        .notes
                        .push("interval subscription cancelled before completion".to_string());
                }
                Err(e) => return Err(e.into()),
            }
        }

        report.completed = true;
        Ok(report)
    }
}
