use serde::de::DeserializeOwned;

use crate::model::{CookResult, Mode, ModeResult, NutritionResult};

/// An analysis endpoint, carrying the payload shape it answers with.
///
/// The shape is fixed by which endpoint was called; payloads are never
/// inspected to guess what they are.
pub trait Endpoint {
    type Output: DeserializeOwned + Into<ModeResult> + Send;

    const MODE: Mode;
}

/// `POST /api/cook`
pub struct CookEndpoint;

impl Endpoint for CookEndpoint {
    type Output = CookResult;

    const MODE: Mode = Mode::Cook;
}

/// `POST /api/calculate`
pub struct NutritionEndpoint;

impl Endpoint for NutritionEndpoint {
    type Output = NutritionResult;

    const MODE: Mode = Mode::Nutrition;
}

impl From<CookResult> for ModeResult {
    fn from(value: CookResult) -> Self {
        ModeResult::Cook(value)
    }
}

impl From<NutritionResult> for ModeResult {
    fn from(value: NutritionResult) -> Self {
        ModeResult::Nutrition(value)
    }
}
