use serde::{Deserialize, Serialize};
use strum::Display;

/// Messages driving the application loop. Components translate raw terminal
/// events into actions; the loop fans actions back out to every component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    FocusNext,
    FocusPrev,
    Submit,
    Update,
}
