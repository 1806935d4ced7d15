//! Ring Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Pure Functions und die Zustandsmaschinen
//! der LED-Ring-Steuerung. Zeit wird als Millisekunden (`u64`) übergeben.

#![no_std]

pub mod config;
pub mod controller;
pub mod debounce;
pub mod display;
pub mod logic;
pub mod palette;
pub mod protocol;
pub mod router;
pub mod session;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use config::{AnimationTiming, DebouncePolicy, RingConfig};
pub use controller::{CycleReport, RingController};
pub use debounce::ButtonDebouncer;
pub use display::{DisplayEngine, Frame, Step};
pub use logic::{dim, parse_console_byte};
pub use palette::{ColorPalette, DEFAULT_PALETTE, PaletteError};
pub use protocol::{Command, CommandMessage, MESSAGE_LEN, ProtocolError};
pub use router::StateRouter;
pub use session::{SessionEvent, SessionState, SessionTimer};
pub use traits::{LedError, SmartLedWriter};
pub use types::{ButtonLevels, DisplayState, Level, NamedColor, StateSource, StateUpdate};
