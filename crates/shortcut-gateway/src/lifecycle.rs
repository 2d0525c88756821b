use std::fmt::{Display, Formatter};
use tracing::info;

use crate::error::ServerError;

/// Persistence-relevant phases of the process.
///
/// ```text
/// Start -> LoadingMapping -> Serving -> ShuttingDown -> SavingMapping -> Exited
///                  \
///                   `-> Exited   (load or bind failed, nothing served)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    LoadingMapping,
    Serving,
    ShuttingDown,
    SavingMapping,
    Exited,
}

impl Phase {
    /// Whether the process may move from `self` to `next`.
    pub fn can_advance_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Start, Phase::LoadingMapping)
                | (Phase::LoadingMapping, Phase::Serving)
                | (Phase::LoadingMapping, Phase::Exited)
                | (Phase::Serving, Phase::ShuttingDown)
                | (Phase::ShuttingDown, Phase::SavingMapping)
                | (Phase::SavingMapping, Phase::Exited)
        )
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Start => "start",
            Phase::LoadingMapping => "loading-mapping",
            Phase::Serving => "serving",
            Phase::ShuttingDown => "shutting-down",
            Phase::SavingMapping => "saving-mapping",
            Phase::Exited => "exited",
        };
        f.write_str(name)
    }
}

/// Tracks the current [`Phase`] and rejects out-of-order transitions.
#[derive(Debug)]
pub struct Lifecycle {
    phase: Phase,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self { phase: Phase::Start }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn advance(&mut self, next: Phase) -> Result<(), ServerError> {
        if !self.phase.can_advance_to(next) {
            return Err(ServerError::InvalidTransition {
                from: self.phase,
                to: next,
            });
        }
        info!(from = %self.phase, to = %next, "lifecycle transition");
        self.phase = next;
        Ok(())
    }
}
