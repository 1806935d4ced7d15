//! State Router: hält den aktuell anzuzeigenden FSM-Zustand
//!
//! Zwei Schreiber (Funk und Konsole), der letzte gewinnt. Beide laufen in
//! eigenen Tasks und übergeben ihre Updates per Signal; der Router selbst
//! gehört nur dem Ring-Task.

use crate::types::{DisplayState, StateSource, StateUpdate};

#[derive(Debug, Clone, Default)]
pub struct StateRouter {
    state: DisplayState,
    last_source: Option<StateSource>,
}

impl StateRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt ein Update ohne weitere Prüfung
    ///
    /// Gibt den vorherigen Zustand zurück.
    pub fn apply(&mut self, update: StateUpdate) -> DisplayState {
        let previous = self.state;
        self.state = update.state;
        self.last_source = Some(update.source);
        previous
    }

    pub fn current(&self) -> DisplayState {
        self.state
    }

    /// Quelle des letzten Updates (`None` vor dem ersten Update)
    pub fn last_source(&self) -> Option<StateSource> {
        self.last_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_writer_wins() {
        let mut router = StateRouter::new();
        router.apply(StateUpdate {
            state: DisplayState::LaunchLeft,
            source: StateSource::Network,
        });
        let previous = router.apply(StateUpdate {
            state: DisplayState::ToHome,
            source: StateSource::Console,
        });
        assert_eq!(previous, DisplayState::LaunchLeft);
        assert_eq!(router.current(), DisplayState::ToHome);
        assert_eq!(router.last_source(), Some(StateSource::Console));
    }
}
