use crate::model::{ErrorInfo, Mode, ModeResult, ScaleFactor};

use super::state::{Generation, PerModeState, Screen};

/// The single loading/data/error triple exposed for the active mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectedState {
    pub loading: bool,
    pub data: Option<ModeResult>,
    pub error: Option<ErrorInfo>,
}

/// Select the state of `mode`, verbatim. Cook and nutrition are never merged.
pub fn project(mode: Mode, cook: &PerModeState, nutrition: &PerModeState) -> ProjectedState {
    let selected = match mode {
        Mode::Cook => cook,
        Mode::Nutrition => nutrition,
    };
    ProjectedState {
        loading: selected.is_loading(),
        data: selected.data().cloned(),
        error: selected.error().cloned(),
    }
}

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub screen: Screen,
    pub mode: Mode,
    pub generation: Generation,
    pub projected: ProjectedState,
    pub scale: ScaleFactor,
    pub favorited: bool,
    pub debug_enabled: bool,
    pub title: String,
}

impl AppViewModel {
    /// Debug details are always captured but only shown when enabled.
    pub fn show_debug(&self) -> bool {
        self.debug_enabled
            && self
                .projected
                .error
                .as_ref()
                .is_some_and(|error| error.debug.is_some())
    }

    /// Text of the debug report for the displayed error, if it is visible.
    pub fn debug_report(&self) -> Option<String> {
        if !self.show_debug() {
            return None;
        }
        self.projected
            .error
            .as_ref()
            .and_then(|error| error.debug.as_ref())
            .map(ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::parser::transport_failure;
    use crate::model::NutritionResult;

    #[test]
    fn test_projection_selects_active_mode_only() {
        let cook = PerModeState::Loading;
        let nutrition = PerModeState::Failed(transport_failure("http://x", "refused"));

        let projected = project(Mode::Cook, &cook, &nutrition);
        assert_eq!(
            projected,
            ProjectedState {
                loading: true,
                data: None,
                error: None,
            }
        );

        let projected = project(Mode::Nutrition, &cook, &nutrition);
        assert!(!projected.loading);
        assert!(projected.data.is_none());
        assert_eq!(projected.error.unwrap().user_message, "Failed to connect to server.");
    }

    #[test]
    fn test_idle_projects_empty() {
        let projected = project(Mode::Nutrition, &PerModeState::Idle, &PerModeState::Idle);
        assert_eq!(projected, ProjectedState::default());
    }

    #[test]
    fn test_debug_visibility_follows_flag() {
        let mut view = AppViewModel {
            debug_enabled: true,
            projected: ProjectedState {
                loading: false,
                data: None,
                error: Some(transport_failure("http://x/recipe", "refused")),
            },
            ..Default::default()
        };
        assert!(view.show_debug());
        assert!(view
            .debug_report()
            .unwrap()
            .starts_with("HTTP Status: N/A"));

        view.debug_enabled = false;
        assert!(!view.show_debug());
        assert!(view.debug_report().is_none());
        // Capture is unaffected by visibility
        assert!(view.projected.error.as_ref().unwrap().debug.is_some());
    }

    #[test]
    fn test_success_has_no_debug() {
        let view = AppViewModel {
            debug_enabled: true,
            projected: ProjectedState {
                loading: false,
                data: Some(ModeResult::Nutrition(NutritionResult::default())),
                error: None,
            },
            ..Default::default()
        };
        assert!(!view.show_debug());
    }
}
