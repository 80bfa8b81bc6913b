pub mod analysis;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod favorites;
pub mod model;

pub use analysis::{AnalysisClient, CookEndpoint, NutritionEndpoint, Transport};
pub use config::ControllerConfig;
pub use controller::{AppViewModel, Controller, Msg, PerModeState, ProjectedState, Screen};
pub use error::ControllerError;
pub use model::{
    AnalysisRequest, CookResult, DebugInfo, ErrorInfo, FailureKind, IngredientRecord,
    IngredientStatus, Mode, ModeResult, NutritionResult, ScaleFactor, Severity,
};

/// Outcome of analysing one URL with both endpoints
#[derive(Debug, Clone)]
pub struct Analysis {
    pub cook: Result<CookResult, ErrorInfo>,
    pub nutrition: Result<NutritionResult, ErrorInfo>,
}

/// Run both analyses for `url` concurrently, using configuration from the
/// environment.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let analysis = recipe_calories::analyze_url("https://example.com/recipe").await?;
/// if let Ok(recipe) = analysis.nutrition {
///     println!("{} kcal", recipe.total_kcal);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn analyze_url(url: &str) -> Result<Analysis, ControllerError> {
    let client = AnalysisClient::new(ControllerConfig::load()?)?;
    Ok(analyze_with_client(&client, url).await)
}

pub async fn analyze_with_client(client: &AnalysisClient, url: &str) -> Analysis {
    let (cook, nutrition) = tokio::join!(
        client.fetch::<CookEndpoint>(url),
        client.fetch::<NutritionEndpoint>(url)
    );
    Analysis { cook, nutrition }
}

/// Fetch only the cooking instructions for `url`
pub async fn fetch_cook(url: &str) -> Result<Result<CookResult, ErrorInfo>, ControllerError> {
    let client = AnalysisClient::new(ControllerConfig::load()?)?;
    Ok(client.fetch::<CookEndpoint>(url).await)
}

/// Fetch only the calorie breakdown for `url`
pub async fn fetch_nutrition(
    url: &str,
) -> Result<Result<NutritionResult, ErrorInfo>, ControllerError> {
    let client = AnalysisClient::new(ControllerConfig::load()?)?;
    Ok(client.fetch::<NutritionEndpoint>(url).await)
}
