use crate::core::{Recipe, RecipeReport, Result};
use crate::utils::error::AppError;
use async_trait::async_trait;
use futures::{future, stream, StreamExt, TryStreamExt};

/// Substitute a fallback item when the upstream errors, then complete
/// normally. The error is consumed, not propagated.
pub struct FallbackOnError;

#[async_trait]
impl Recipe for FallbackOnError {
    fn name(&self) -> &'static str {
        "recovery"
    }

    async fn run(&self) -> Result<RecipeReport> {
        let mut report = RecipeReport::new(self.name());
        let mut swallowed = Vec::new();

        {
            let failing = stream::iter(vec![Err::<String, AppError>(AppError::ProcessingError {
                message: "upstream produced no value".to_string(),
            })]);

            let mut recovered = failing.or_else(|e| {
                swallowed.push(e.to_string());
                future::ready(Ok::<_, AppError>("default value".to_string()))
            });

            while let Some(item) = recovered.next().await {
                report.emitted.push(item?);
            }
        }

        report.errors = swallowed;
        report.completed = true;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recovery_substitutes_the_fallback_item() {
        let report = FallbackOnError.run().await.unwrap();

        assert_eq!(report.emitted, vec!["default value".to_string()]);
        assert!(report.completed);
    }

    #[tokio::test]
    async fn test_recovery_records_the_swallowed_error() {
        let report = FallbackOnError.run().await.unwrap();

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("upstream produced no value"));
    }
}
