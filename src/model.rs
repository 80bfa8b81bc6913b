use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::ControllerError;

/// Which of the two parallel analyses is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Cook,
    Nutrition,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Cook, Mode::Nutrition];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Cook => "cook",
            Mode::Nutrition => "nutrition",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ControllerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cook" => Ok(Mode::Cook),
            "nutrition" => Ok(Mode::Nutrition),
            _ => Err(ControllerError::InvalidMode(s.to_string())),
        }
    }
}

/// A recipe URL submitted for analysis. Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    url: String,
}

impl AnalysisRequest {
    /// Returns `None` when the input is blank.
    pub fn new(raw: &str) -> Option<Self> {
        let url = raw.trim();
        if url.is_empty() {
            return None;
        }
        Some(Self {
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Step-by-step cooking data returned by the cook endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CookResult {
    #[serde(default)]
    pub title: Option<String>,
    /// Minutes
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub total_time: Option<u32>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// Calorie breakdown returned by the calculation endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    pub total_kcal: f64,
    #[serde(default)]
    pub per_serving: Option<f64>,
    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
}

/// One ingredient line of a nutrition result, as the backend matched it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Ingredient text as written in the source recipe
    pub raw: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub grams: Option<f64>,
    #[serde(default)]
    pub kcal_per_100g: Option<f64>,
    #[serde(default)]
    pub total_kcal: Option<f64>,
    #[serde(default)]
    pub usda_match: Option<String>,
    #[serde(default)]
    pub status: IngredientStatus,
    #[serde(default)]
    pub note: Option<String>,
}

impl IngredientRecord {
    /// The note, treating an empty string as no note.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// Match status of an ingredient. Unrecognised values are kept verbatim;
/// a `null` status reads as `Ok`, like a missing one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub enum IngredientStatus {
    #[default]
    Ok,
    Skipped,
    NotFound,
    Other(String),
}

impl From<String> for IngredientStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ok" => IngredientStatus::Ok,
            "skipped" => IngredientStatus::Skipped,
            "not_found" | "not found" => IngredientStatus::NotFound,
            _ => IngredientStatus::Other(value),
        }
    }
}

impl From<Value> for IngredientStatus {
    fn from(value: Value) -> Self {
        match value {
            Value::String(status) => status.into(),
            Value::Null => IngredientStatus::Ok,
            other => IngredientStatus::Other(other.to_string()),
        }
    }
}

impl From<IngredientStatus> for String {
    fn from(value: IngredientStatus) -> Self {
        match value {
            IngredientStatus::Ok => "ok".to_string(),
            IngredientStatus::Skipped => "skipped".to_string(),
            IngredientStatus::NotFound => "not_found".to_string(),
            IngredientStatus::Other(other) => other,
        }
    }
}

/// Successful payload of either endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeResult {
    Cook(CookResult),
    Nutrition(NutritionResult),
}

impl ModeResult {
    pub fn mode(&self) -> Mode {
        match self {
            ModeResult::Cook(_) => Mode::Cook,
            ModeResult::Nutrition(_) => Mode::Nutrition,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            ModeResult::Cook(cook) => cook.title.as_deref(),
            ModeResult::Nutrition(nutrition) => nutrition.title.as_deref(),
        }
    }

    pub fn as_cook(&self) -> Option<&CookResult> {
        match self {
            ModeResult::Cook(cook) => Some(cook),
            ModeResult::Nutrition(_) => None,
        }
    }

    pub fn as_nutrition(&self) -> Option<&NutritionResult> {
        match self {
            ModeResult::Nutrition(nutrition) => Some(nutrition),
            ModeResult::Cook(_) => None,
        }
    }
}

/// How an analysis request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response was obtained at all
    Transport,
    /// The response body could not be decoded
    MalformedResponse,
    /// Decodable body with a non-success status
    Http,
    /// Http failure the backend flagged as a refusal by the recipe site
    Blocked,
}

/// How prominently a failure is shown: blocked sites get a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A failed analysis, ready to show to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    pub user_message: String,
    pub blocked: bool,
    pub kind: FailureKind,
    pub debug: Option<DebugInfo>,
}

impl ErrorInfo {
    pub fn severity(&self) -> Severity {
        if self.blocked {
            Severity::Warning
        } else {
            Severity::Error
        }
    }
}

/// Raw details captured alongside every failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugInfo {
    /// Absent for network-level failures
    pub status: Option<u16>,
    pub url: String,
    pub body: String,
}

impl fmt::Display for DebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP Status: {}", status)?,
            None => write!(f, "HTTP Status: N/A")?,
        }
        write!(f, "\n\nRequest URL: {}\n\nResponse:\n{}", self.url, self.body)
    }
}

/// Serving multiplier offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleFactor {
    Half,
    #[default]
    One,
    Two,
    Three,
    Four,
}

impl ScaleFactor {
    pub const ALL: [ScaleFactor; 5] = [
        ScaleFactor::Half,
        ScaleFactor::One,
        ScaleFactor::Two,
        ScaleFactor::Three,
        ScaleFactor::Four,
    ];

    pub fn value(&self) -> f64 {
        match self {
            ScaleFactor::Half => 0.5,
            ScaleFactor::One => 1.0,
            ScaleFactor::Two => 2.0,
            ScaleFactor::Three => 3.0,
            ScaleFactor::Four => 4.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScaleFactor::Half => "½x",
            ScaleFactor::One => "1x",
            ScaleFactor::Two => "2x",
            ScaleFactor::Three => "3x",
            ScaleFactor::Four => "4x",
        }
    }
}

impl TryFrom<f64> for ScaleFactor {
    type Error = ControllerError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        ScaleFactor::ALL
            .into_iter()
            .find(|factor| factor.value() == value)
            .ok_or(ControllerError::InvalidScale(value))
    }
}

impl FromStr for ScaleFactor {
    type Err = ControllerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(['x', 'X']);
        if trimmed == "½" {
            return Ok(ScaleFactor::Half);
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ControllerError::UsageError(format!("Invalid scale '{}'", s)))?;
        ScaleFactor::try_from(value)
    }
}
