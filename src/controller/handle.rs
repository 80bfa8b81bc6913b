use log::debug;
use tokio::sync::{mpsc, watch};

use super::effect::Effect;
use super::msg::Msg;
use super::projector::AppViewModel;
use super::state::ControllerState;
use super::update::update;
use crate::analysis::AnalysisClient;
use crate::config::ControllerConfig;
use crate::model::{Mode, NutritionResult, ScaleFactor};
use crate::ControllerError;

/// Drives the state machine: runs effects on the tokio runtime and feeds
/// request outcomes back in as messages.
///
/// Every request completion is posted to an internal queue tagged with its
/// generation; it is applied only when the owner pumps the queue, so state is
/// only ever written from the owner's task. Each applied message publishes one
/// complete [`AppViewModel`] snapshot.
///
/// Methods that dispatch requests must be called from within a tokio runtime.
pub struct Controller {
    state: ControllerState,
    client: AnalysisClient,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    view_tx: watch::Sender<AppViewModel>,
}

impl Controller {
    pub fn new(client: AnalysisClient) -> Self {
        let state = ControllerState::new(client.config().debug_enabled);
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (view_tx, _) = watch::channel(state.view());
        Self {
            state,
            client,
            msg_tx,
            msg_rx,
            view_tx,
        }
    }

    /// Controller talking to the configured backend over HTTP
    pub fn from_config(config: ControllerConfig) -> Result<Self, ControllerError> {
        Ok(Self::new(AnalysisClient::new(config)?))
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.view_tx.borrow().clone()
    }

    /// Receiver that always holds the latest snapshot
    pub fn subscribe(&self) -> watch::Receiver<AppViewModel> {
        self.view_tx.subscribe()
    }

    /// Apply one message, run its effects and publish the new snapshot.
    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = update(state, msg);
        self.state = next;
        for effect in effects {
            self.run_effect(effect);
        }
        self.view_tx.send_replace(self.state.view());
    }

    /// Start a cook and a nutrition analysis of `url`. Blank input is ignored.
    pub fn analyze(&mut self, url: &str) {
        self.dispatch(Msg::AnalyzeSubmitted(url.to_string()));
    }

    pub fn select_mode(&mut self, mode: Mode) {
        self.dispatch(Msg::ModeSelected(mode));
    }

    pub fn select_scale(&mut self, scale: ScaleFactor) {
        self.dispatch(Msg::ScaleSelected(scale));
    }

    pub fn toggle_favorite(&mut self) {
        self.dispatch(Msg::FavoriteToggled);
    }

    /// Show a stored recipe as if it had just been analysed. No request is sent.
    pub fn select_favorite(&mut self, record: NutritionResult) {
        self.dispatch(Msg::FavoriteSelected(record));
    }

    pub fn show_favorites(&mut self) {
        self.dispatch(Msg::FavoritesOpened);
    }

    pub fn show_recipe(&mut self) {
        self.dispatch(Msg::FavoritesClosed);
    }

    pub fn toggle_debug(&mut self) {
        self.dispatch(Msg::DebugToggled);
    }

    /// Wait for the next request outcome and apply it.
    ///
    /// Returns false once no more outcomes can arrive.
    pub async fn next_settlement(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Apply every outcome that has already arrived. Returns how many.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            applied += 1;
        }
        applied
    }

    /// Apply outcomes until neither mode of the current cycle is loading.
    ///
    /// No timeout is applied: a request that never completes keeps this
    /// pending.
    pub async fn settle(&mut self) {
        while self.state.any_loading() {
            if !self.next_settlement().await {
                break;
            }
        }
    }

    fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::Dispatch {
                generation,
                mode,
                url,
            } => {
                debug!("Dispatching {} request #{} for {}", mode, generation, url);
                let client = self.client.clone();
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let outcome = client.fetch_mode(mode, &url).await;
                    // The controller may have been dropped; nothing to report to then
                    let _ = tx.send(Msg::RequestSettled {
                        generation,
                        mode,
                        outcome,
                    });
                });
            }
        }
    }
}
