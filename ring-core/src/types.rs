//! Core Types für die LED-Ring-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// FSM-Zustand des Roboters, wie er auf dem Ring angezeigt wird
///
/// Jeder bekannte Wert 0..=6 entspricht genau einer Animation.
/// Alle anderen Werte landen in `Unknown` und werden nicht gerendert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayState {
    #[default]
    DriveForward,
    DriveBackward,
    LaunchLeft,
    LaunchRight,
    Stop,
    ToHome,
    AtHome,
    /// Unbekannter Rohwert (z.B. von einem neueren Peer)
    Unknown(u8),
}

impl DisplayState {
    /// Rohwert wie er im Wire-Format steht
    pub fn raw(self) -> u8 {
        match self {
            DisplayState::DriveForward => 0,
            DisplayState::DriveBackward => 1,
            DisplayState::LaunchLeft => 2,
            DisplayState::LaunchRight => 3,
            DisplayState::Stop => 4,
            DisplayState::ToHome => 5,
            DisplayState::AtHome => 6,
            DisplayState::Unknown(raw) => raw,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayState::DriveForward => "DriveForward",
            DisplayState::DriveBackward => "DriveBackward",
            DisplayState::LaunchLeft => "LaunchLeft",
            DisplayState::LaunchRight => "LaunchRight",
            DisplayState::Stop => "Stop",
            DisplayState::ToHome => "ToHome",
            DisplayState::AtHome => "AtHome",
            DisplayState::Unknown(_) => "Unknown",
        }
    }
}

impl From<u8> for DisplayState {
    fn from(raw: u8) -> Self {
        match raw {
            0 => DisplayState::DriveForward,
            1 => DisplayState::DriveBackward,
            2 => DisplayState::LaunchLeft,
            3 => DisplayState::LaunchRight,
            4 => DisplayState::Stop,
            5 => DisplayState::ToHome,
            6 => DisplayState::AtHome,
            other => DisplayState::Unknown(other),
        }
    }
}

/// Quelle eines Display-State-Updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSource {
    /// FsmState-Nachricht von einem Peer (ESP-NOW)
    Network,
    /// Ziffer von der seriellen Debug-Konsole
    Console,
}

/// Display-State-Update für Signal-Kommunikation
///
/// Wird von ESP-NOW- und Konsolen-Task an den Ring-Task übergeben.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateUpdate {
    pub state: DisplayState,
    pub source: StateSource,
}

/// Farbe mit Namen für Status-Ausgaben
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: RGB8,
}

impl NamedColor {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: RGB8 { r, g, b },
        }
    }
}

/// Pegel eines Tasters (active-low mit Pull-up)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

/// Rohpegel beider Taster eines Poll-Durchlaufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLevels {
    pub color: Level,
    pub enable: Level,
}

impl ButtonLevels {
    /// Beide Taster losgelassen
    pub const RELEASED: Self = Self {
        color: Level::High,
        enable: Level::High,
    };
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DisplayState::Unknown(raw) => defmt::write!(fmt, "Unknown({})", raw),
            known => defmt::write!(fmt, "{}({})", known.name(), known.raw()),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StateSource {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            StateSource::Network => defmt::write!(fmt, "network"),
            StateSource::Console => defmt::write!(fmt, "console"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StateUpdate {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "StateUpdate {{ state: {}, from: {} }}", self.state, self.source)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for NamedColor {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{} ({}, {}, {})",
            self.name,
            self.color.r,
            self.color.g,
            self.color.b
        )
    }
}
