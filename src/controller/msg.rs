use crate::model::{ErrorInfo, Mode, ModeResult, NutritionResult, ScaleFactor};

use super::state::Generation;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User submitted a recipe URL (raw text, not yet trimmed).
    AnalyzeSubmitted(String),
    /// User switched between cook and nutrition view.
    ModeSelected(Mode),
    /// User picked a serving multiplier.
    ScaleSelected(ScaleFactor),
    /// User clicked the heart.
    FavoriteToggled,
    /// User opened a recipe from the favorites list.
    FavoriteSelected(NutritionResult),
    FavoritesOpened,
    FavoritesClosed,
    /// User flipped debug detail visibility.
    DebugToggled,
    /// An analysis request finished, successfully or not.
    RequestSettled {
        generation: Generation,
        mode: Mode,
        outcome: Result<ModeResult, ErrorInfo>,
    },
}
