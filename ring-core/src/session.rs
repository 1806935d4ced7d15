//! Session-Timer: Enabled/Disabled mit automatischem Timeout

/// Zustand der Session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Disabled,
    /// Startzeitpunkt existiert nur solange die Session läuft
    Enabled { since_ms: u64 },
}

impl SessionState {
    pub fn is_enabled(&self) -> bool {
        matches!(self, SessionState::Enabled { .. })
    }
}

/// Zustandswechsel, der an die Peers gemeldet werden muss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Enabled,
    Disabled,
}

#[derive(Debug, Clone)]
pub struct SessionTimer {
    state: SessionState,
    duration_ms: u64,
}

impl SessionTimer {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            state: SessionState::Disabled,
            duration_ms,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Bestätigte Enable-Flanke
    ///
    /// Startet eine Session nur aus `Disabled`; während einer laufenden
    /// Session passiert nichts.
    pub fn start(&mut self, now_ms: u64) -> Option<SessionEvent> {
        match self.state {
            SessionState::Disabled => {
                self.state = SessionState::Enabled { since_ms: now_ms };
                Some(SessionEvent::Enabled)
            }
            SessionState::Enabled { .. } => None,
        }
    }

    /// Prüft den Timeout, einmal pro Zyklus aufrufen
    pub fn poll(&mut self, now_ms: u64) -> Option<SessionEvent> {
        match self.state {
            SessionState::Enabled { since_ms }
                if now_ms.saturating_sub(since_ms) > self.duration_ms =>
            {
                self.state = SessionState::Disabled;
                Some(SessionEvent::Disabled)
            }
            _ => None,
        }
    }

    /// Zeitpunkt, ab dem `poll()` die Session beendet
    pub fn expires_at(&self) -> Option<u64> {
        match self.state {
            SessionState::Enabled { since_ms } => Some(since_ms + self.duration_ms + 1),
            SessionState::Disabled => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SessionEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SessionEvent::Enabled => defmt::write!(fmt, "Enabled"),
            SessionEvent::Disabled => defmt::write!(fmt, "Disabled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_disabled() {
        let timer = SessionTimer::new(150_000);
        assert_eq!(timer.state(), SessionState::Disabled);
        assert_eq!(timer.expires_at(), None);
    }

    #[test]
    fn test_timeout_is_strictly_after_duration() {
        let mut timer = SessionTimer::new(150_000);
        assert_eq!(timer.start(1_000), Some(SessionEvent::Enabled));
        assert_eq!(timer.poll(151_000), None);
        assert!(timer.state().is_enabled());
        assert_eq!(timer.poll(151_001), Some(SessionEvent::Disabled));
        assert_eq!(timer.state(), SessionState::Disabled);
        assert_eq!(timer.poll(200_000), None);
    }

    #[test]
    fn test_start_while_enabled_is_ignored() {
        let mut timer = SessionTimer::new(150_000);
        timer.start(0);
        assert_eq!(timer.start(10_000), None);
        assert_eq!(timer.state(), SessionState::Enabled { since_ms: 0 });
    }

    #[test]
    fn test_expires_at() {
        let mut timer = SessionTimer::new(100);
        timer.start(50);
        assert_eq!(timer.expires_at(), Some(151));
    }
}
