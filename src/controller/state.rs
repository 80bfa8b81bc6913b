use crate::model::{ErrorInfo, Mode, ModeResult, NutritionResult, ScaleFactor};

use super::projector::{project, AppViewModel};

/// Monotonic analysis cycle counter
pub type Generation = u64;

/// Lifecycle of one mode's request.
///
/// Data and error are exclusive by construction and both absent while loading.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PerModeState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Ready(ModeResult),
    Failed(ErrorInfo),
}

impl PerModeState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PerModeState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, PerModeState::Ready(_) | PerModeState::Failed(_))
    }

    pub fn data(&self) -> Option<&ModeResult> {
        match self {
            PerModeState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            PerModeState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Recipe,
    Favorites,
}

/// Everything the controller knows. Mutated only through `update`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControllerState {
    generation: Generation,
    mode: Mode,
    screen: Screen,
    cook: PerModeState,
    nutrition: PerModeState,
    scale: ScaleFactor,
    favorited: bool,
    debug_enabled: bool,
}

impl ControllerState {
    pub fn new(debug_enabled: bool) -> Self {
        Self {
            debug_enabled,
            ..Self::default()
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn scale(&self) -> ScaleFactor {
        self.scale
    }

    pub fn favorited(&self) -> bool {
        self.favorited
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    pub fn mode_state(&self, mode: Mode) -> &PerModeState {
        match mode {
            Mode::Cook => &self.cook,
            Mode::Nutrition => &self.nutrition,
        }
    }

    pub fn any_loading(&self) -> bool {
        self.cook.is_loading() || self.nutrition.is_loading()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            screen: self.screen,
            mode: self.mode,
            generation: self.generation,
            projected: project(self.mode, &self.cook, &self.nutrition),
            scale: self.scale,
            favorited: self.favorited,
            debug_enabled: self.debug_enabled,
            title: self.title(),
        }
    }

    fn title(&self) -> String {
        if self.screen == Screen::Favorites {
            return "Favorites".to_string();
        }
        let cook_title = match self.mode {
            Mode::Cook => self.cook.data().and_then(ModeResult::title),
            Mode::Nutrition => None,
        };
        cook_title
            .or_else(|| self.nutrition.data().and_then(ModeResult::title))
            .unwrap_or("Recipe Calories")
            .to_string()
    }

    fn mode_state_mut(&mut self, mode: Mode) -> &mut PerModeState {
        match mode {
            Mode::Cook => &mut self.cook,
            Mode::Nutrition => &mut self.nutrition,
        }
    }

    /// Start a new analysis cycle: both modes loading, scale and favorite reset.
    pub(crate) fn begin_cycle(&mut self) -> Generation {
        self.generation += 1;
        self.cook = PerModeState::Loading;
        self.nutrition = PerModeState::Loading;
        self.scale = ScaleFactor::One;
        self.favorited = false;
        self.generation
    }

    /// Record a request outcome against the mode whose endpoint produced it.
    ///
    /// Returns false when the outcome is stale: it belongs to an older cycle,
    /// or its mode is no longer waiting for a result.
    pub(crate) fn settle(
        &mut self,
        generation: Generation,
        mode: Mode,
        outcome: Result<ModeResult, ErrorInfo>,
    ) -> bool {
        if generation != self.generation || !self.mode_state(mode).is_loading() {
            return false;
        }
        *self.mode_state_mut(mode) = match outcome {
            Ok(result) => PerModeState::Ready(result),
            Err(info) => PerModeState::Failed(info),
        };
        true
    }

    /// Show a stored recipe as the nutrition result.
    pub(crate) fn apply_favorite(&mut self, record: NutritionResult) {
        self.nutrition = PerModeState::Ready(ModeResult::Nutrition(record));
        self.scale = ScaleFactor::One;
        self.favorited = true;
        self.screen = Screen::Recipe;
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub(crate) fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub(crate) fn set_scale(&mut self, scale: ScaleFactor) {
        self.scale = scale;
    }

    pub(crate) fn toggle_favorite(&mut self) {
        self.favorited = !self.favorited;
    }

    pub(crate) fn toggle_debug(&mut self) {
        self.debug_enabled = !self.debug_enabled;
    }
}
