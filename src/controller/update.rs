use log::{debug, info};

use super::effect::Effect;
use super::msg::Msg;
use super::state::{ControllerState, Screen};
use crate::model::{AnalysisRequest, Mode};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ControllerState, msg: Msg) -> (ControllerState, Vec<Effect>) {
    let effects = match msg {
        Msg::AnalyzeSubmitted(raw) => {
            let Some(request) = AnalysisRequest::new(&raw) else {
                return (state, Vec::new());
            };
            let generation = state.begin_cycle();
            info!(
                "Analysis #{} submitted for {}",
                generation,
                request.url()
            );
            Mode::ALL
                .into_iter()
                .map(|mode| Effect::Dispatch {
                    generation,
                    mode,
                    url: request.url().to_string(),
                })
                .collect()
        }
        Msg::ModeSelected(mode) => {
            state.set_mode(mode);
            Vec::new()
        }
        Msg::ScaleSelected(scale) => {
            state.set_scale(scale);
            Vec::new()
        }
        Msg::FavoriteToggled => {
            state.toggle_favorite();
            Vec::new()
        }
        Msg::FavoriteSelected(record) => {
            debug!("Favorite selected: {:?}", record.title);
            state.apply_favorite(record);
            Vec::new()
        }
        Msg::FavoritesOpened => {
            state.set_screen(Screen::Favorites);
            Vec::new()
        }
        Msg::FavoritesClosed => {
            state.set_screen(Screen::Recipe);
            Vec::new()
        }
        Msg::DebugToggled => {
            state.toggle_debug();
            Vec::new()
        }
        Msg::RequestSettled {
            generation,
            mode,
            outcome,
        } => {
            let succeeded = outcome.is_ok();
            if state.settle(generation, mode, outcome) {
                info!(
                    "Analysis #{} {} settled ({})",
                    generation,
                    mode,
                    if succeeded { "ok" } else { "error" }
                );
            } else {
                debug!(
                    "Dropping stale {} result from analysis #{} (current #{})",
                    mode,
                    generation,
                    state.generation()
                );
            }
            Vec::new()
        }
    };

    (state, effects)
}
