//! Acquisition and presentation controller: a pure state machine plus the
//! driver that executes its effects.
mod effect;
mod handle;
mod msg;
mod projector;
mod state;
mod update;

pub use effect::Effect;
pub use handle::Controller;
pub use msg::Msg;
pub use projector::{project, AppViewModel, ProjectedState};
pub use state::{ControllerState, Generation, PerModeState, Screen};
pub use update::update;
