//! Ring Controller: ein Steuer-Zyklus ohne Hardware
//!
//! Taster → (Session-Timer | Palette) → Router wählt Muster → Display.
//! Die Firmware ruft `tick()` in ihrer Hauptschleife auf, loggt den
//! `CycleReport` und verschickt die ausgehende Nachricht.

use crate::config::RingConfig;
use crate::debounce::ButtonDebouncer;
use crate::display::DisplayEngine;
use crate::palette::ColorPalette;
use crate::protocol::CommandMessage;
use crate::router::StateRouter;
use crate::session::{SessionEvent, SessionState, SessionTimer};
use crate::traits::{LedError, SmartLedWriter};
use crate::types::{ButtonLevels, DisplayState, NamedColor, StateUpdate};

/// Ergebnis eines Zyklus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleReport {
    /// Neue Farbe nach bestätigtem Druck auf den Farb-Taster
    pub color_changed: Option<NamedColor>,
    /// Bestätigter Druck auf den Enable-Taster (auch wenn schon aktiv)
    pub enable_pressed: bool,
    pub session: Option<SessionEvent>,
    /// Zu sendende Nachricht, genau eine pro Session-Wechsel
    pub outbound: Option<CommandMessage>,
    pub frame_written: bool,
    pub display_error: Option<LedError>,
}

pub struct RingController<W, const N: usize> {
    config: RingConfig,
    color_button: ButtonDebouncer,
    enable_button: ButtonDebouncer,
    palette: ColorPalette,
    session: SessionTimer,
    router: StateRouter,
    display: DisplayEngine<W, N>,
}

impl<W: SmartLedWriter, const N: usize> RingController<W, N> {
    pub fn new(writer: W, palette: ColorPalette, config: RingConfig) -> Self {
        Self {
            color_button: ButtonDebouncer::new(config.color_button, config.debounce_settle_ms),
            enable_button: ButtonDebouncer::new(config.enable_button, config.debounce_settle_ms),
            palette,
            session: SessionTimer::new(config.session_duration_ms),
            router: StateRouter::new(),
            display: DisplayEngine::new(writer, config.timing),
            config,
        }
    }

    /// Ein Steuer-Zyklus
    pub fn tick(&mut self, now_ms: u64, levels: ButtonLevels) -> CycleReport {
        let mut report = CycleReport::default();

        if self.color_button.poll(levels.color, now_ms) {
            report.color_changed = Some(self.palette.advance());
        }

        if self.enable_button.poll(levels.enable, now_ms) {
            report.enable_pressed = true;
            report.session = self.session.start(now_ms);
        }

        // Nach einem Start kann poll() im selben Zyklus nicht auslösen
        if report.session.is_none() {
            report.session = self.session.poll(now_ms);
        }

        report.outbound = report.session.map(|event| match event {
            SessionEvent::Enabled => CommandMessage::enable(self.config.sender_id),
            SessionEvent::Disabled => CommandMessage::disable(self.config.sender_id),
        });

        let pattern = self.effective_pattern();
        let color = self.palette.current().color;
        match self.display.update(pattern, color, now_ms) {
            Ok(written) => report.frame_written = written,
            Err(e) => report.display_error = Some(e),
        }

        report
    }

    /// Übernimmt ein Update von Funk oder Konsole
    ///
    /// Wirkt ab dem nächsten `tick()`. Gibt den vorherigen Zustand zurück.
    pub fn apply_state(&mut self, update: StateUpdate) -> DisplayState {
        self.router.apply(update)
    }

    /// Muster, das gerade tatsächlich gezeigt wird
    ///
    /// Ohne laufende Session immer statisch (Stop) in der Palettenfarbe.
    pub fn effective_pattern(&self) -> DisplayState {
        if self.session.state().is_enabled() {
            self.router.current()
        } else {
            DisplayState::Stop
        }
    }

    /// Frühester Zeitpunkt, zu dem `tick()` wieder etwas zu tun hat
    pub fn next_wakeup(&self) -> Option<u64> {
        [
            self.display.next_due(),
            self.color_button.deadline(),
            self.enable_button.deadline(),
            self.session.expires_at(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn display_state(&self) -> DisplayState {
        self.router.current()
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    pub fn display(&self) -> &DisplayEngine<W, N> {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplayEngine<W, N> {
        &mut self.display
    }
}
