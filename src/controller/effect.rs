use crate::model::Mode;

use super::state::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `url` to the endpoint of `mode`, tagging the outcome with `generation`.
    Dispatch {
        generation: Generation,
        mode: Mode,
        url: String,
    },
}
