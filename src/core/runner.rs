use crate::core::basic::{EventHandling, SingleValue};
use crate::core::disposal::SubscriptionCleanup;
use crate::core::integration::{ApiFetch, StoreQuery};
use crate::core::operators::{FilterChain, MapItem};
use crate::core::recovery::FallbackOnError;
use crate::core::threads::ThreadHop;
use crate::core::{Recipe, RecipeReport, Result, UserApi, UserStore};
use crate::utils::error::AppError;

/// Catalogue order is execution order.
pub const CATALOGUE: &[&str] = &[
    "single", "events", "map", "chain", "threads", "recovery", "disposal", "api", "store",
];

pub fn build_catalogue<A, S>(api: A, store: S) -> Vec<Box<dyn Recipe>>
where
    A: UserApi + 'static,
    S: UserStore + 'static,
{
    vec![
        Box::new(SingleValue::default()),
        Box::new(EventHandling),
        Box::new(MapItem),
        Box::new(FilterChain),
        Box::new(ThreadHop),
        Box::new(FallbackOnError),
        Box::new(SubscriptionCleanup),
        Box::new(ApiFetch::new(api)),
        Box::new(StoreQuery::new(store)),
    ]
}

pub struct RecipeRunner {
    recipes: Vec<Box<dyn Recipe>>,
}

impl RecipeRunner {
    pub fn new(recipes: Vec<Box<dyn Recipe>>) -> Self {
        Self { recipes }
    }

    pub fn recipe_names(&self) -> Vec<&'static str> {
        self.recipes.iter().map(|r| r.name()).collect()
    }

    /// Run the selected recipes in catalogue order. An empty selection means
    /// the whole catalogue. One failing recipe does not stop the run; it
    /// yields a failed report instead.
    pub async fn run(&self, selection: &[String]) -> Result<Vec<RecipeReport>> {
        // Unknown names are rejected before anything runs.
        for name in selection {
            if !self.recipes.iter().any(|r| r.name() == name.as_str()) {
                return Err(AppError::InvalidConfigValueError {
                    field: "recipes".to_string(),
                    value: name.clone(),
                    reason: format!("Unknown recipe. Available: {}", self.available()),
                });
            }
        }

        let mut reports = Vec::new();

        for recipe in &self.recipes {
            if !selection.is_empty() && !selection.iter().any(|n| n == recipe.name()) {
                continue;
            }

            tracing::info!("Running recipe: {}", recipe.name());
            match recipe.run().await {
                Ok(report) => {
                    tracing::info!(
                        "Recipe {} emitted {} item(s)",
                        report.recipe,
                        report.emitted.len()
                    );
                    reports.push(report);
                }
                Err(e) => {
                    tracing::error!(
                        "Recipe {} failed: {} (Severity: {:?})",
                        recipe.name(),
                        e,
                        e.severity()
                    );
                    reports.push(RecipeReport::failed(recipe.name(), e.to_string()));
                }
            }
        }

        Ok(reports)
    }

    fn available(&self) -> String {
        self.recipe_names().join(", ")
    }
}
