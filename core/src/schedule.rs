use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Turn every face-up unmatched card back down
    FlipBack,
    /// Show the win banner and lock the board
    AnnounceWin,
}

/// A delayed action tagged with the board generation it was scheduled for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledAction {
    pub generation: Generation,
    pub kind: ActionKind,
}

/// Host timer facilities the controller runs on.
///
/// Implementations deliver ticks and delayed actions back to the controller one at a time, never concurrently.
pub trait Scheduler {
    /// Handle of a repeating tick every [`TICK_INTERVAL_MS`]. Dropping it cancels the tick.
    type Interval;

    fn start_interval(&mut self) -> Self::Interval;

    /// Delivers `action` once after [`REVEAL_DELAY_MS`].
    fn schedule(&mut self, action: ScheduledAction);
}
