use crate::core::{Recipe, RecipeReport, Result};
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;

/// Produce a value on the blocking worker pool and deliver it through a
/// channel-backed stream to the subscribing task.
pub struct ThreadHop;

#[async_trait]
impl Recipe for ThreadHop {
    fn name(&self) -> &'static str {
        "threads"
    }

    async fn run(&self) -> Result<RecipeReport> {
        let mut report = RecipeReport::new(self.name());

        let (tx, rx) = mpsc::channel(1);
        let producer = tokio::task::spawn_blocking(move || {
            let item = "Threaded Data".to_string();
            // Capacity 1 covers the single item, so this never blocks long.
            let _ = tx.blocking_send((current_thread_label(), item));
        });

        // The sender drops when the producer returns, which completes the stream.
        let mut delivered = ReceiverStream::new(rx);
        while let Some((origin, item)) = delivered.next().await {
            report.notes.push(format!(
                "produced on {}, observed on {}",
                origin,
                current_thread_label()
            ));
            report.emitted.push(item);
        }

        producer.await?;
        report.completed = true;

        Ok(report)
    }
}

fn current_thread_label() -> String {
    let thread = std::thread::current();
    match thread.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", thread.id()),
    }
}
