//! Taster-Entprellung ohne blockierendes Warten
//!
//! Eine HIGH→LOW-Flanke startet eine Bestätigung; erst wenn der Pegel
//! nach der Settle-Zeit immer noch LOW ist, zählt der Druck.

use crate::config::DebouncePolicy;
use crate::types::Level;

#[derive(Debug, Clone)]
pub struct ButtonDebouncer {
    policy: DebouncePolicy,
    settle_ms: u64,
    /// Letzter Rohpegel, wird bei jedem Poll überschrieben
    previous: Level,
    /// Zeitpunkt des Bestätigungs-Lesens
    confirm_at: Option<u64>,
}

impl ButtonDebouncer {
    pub fn new(policy: DebouncePolicy, settle_ms: u64) -> Self {
        Self {
            policy,
            settle_ms,
            previous: Level::High,
            confirm_at: None,
        }
    }

    /// Verarbeitet einen Rohpegel, `true` genau einmal pro Tastendruck
    pub fn poll(&mut self, level: Level, now_ms: u64) -> bool {
        let falling = self.previous == Level::High && level == Level::Low;
        self.previous = level;

        match self.policy {
            DebouncePolicy::Immediate => falling,
            DebouncePolicy::Confirm => match self.confirm_at {
                Some(due) if now_ms >= due => {
                    self.confirm_at = None;
                    level == Level::Low
                }
                Some(_) => false,
                None => {
                    if falling {
                        self.confirm_at = Some(now_ms + self.settle_ms);
                    }
                    false
                }
            },
        }
    }

    /// Nächster Zeitpunkt, zu dem ein Poll eine Flanke bestätigen kann
    pub fn deadline(&self) -> Option<u64> {
        self.confirm_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Level::{High, Low};

    #[test]
    fn test_confirmed_press_fires_once() {
        let mut button = ButtonDebouncer::new(DebouncePolicy::Confirm, 50);
        assert!(!button.poll(High, 0));
        assert!(!button.poll(Low, 10));
        assert!(!button.poll(Low, 30));
        assert!(button.poll(Low, 60));
        // gehalten: keine weitere Flanke
        assert!(!button.poll(Low, 200));
        assert!(!button.poll(High, 300));
    }

    #[test]
    fn test_bounce_is_rejected() {
        let mut button = ButtonDebouncer::new(DebouncePolicy::Confirm, 50);
        assert!(!button.poll(Low, 0));
        assert!(!button.poll(High, 5));
        assert!(!button.poll(Low, 8));
        assert!(!button.poll(High, 12));
        assert!(!button.poll(High, 50));
        assert_eq!(button.deadline(), None);
    }

    #[test]
    fn test_contact_chatter_yields_single_edge() {
        let mut button = ButtonDebouncer::new(DebouncePolicy::Confirm, 50);
        let mut edges = 0;
        for (level, t) in [(Low, 0), (High, 3), (Low, 6), (High, 9), (Low, 12), (Low, 55), (Low, 80)] {
            if button.poll(level, t) {
                edges += 1;
            }
        }
        assert_eq!(edges, 1);
    }

    #[test]
    fn test_immediate_policy_fires_on_edge() {
        let mut button = ButtonDebouncer::new(DebouncePolicy::Immediate, 50);
        assert!(button.poll(Low, 0));
        assert!(!button.poll(Low, 1));
        assert!(!button.poll(High, 2));
        assert!(button.poll(Low, 3));
    }
}
