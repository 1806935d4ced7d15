// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von ring-core
pub use ring_core::{
    ButtonLevels, ColorPalette, CommandMessage, CycleReport, DisplayState, LedError,
    RingController, SmartLedWriter, StateSource, StateUpdate,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;

use crate::config::OUTBOUND_QUEUE_SIZE;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// CriticalSectionRawMutex statt NoopRawMutex: Funk- und Konsolen-Task
// schreiben denselben Display State wie der Ring-Task liest.

/// Signal für Display-State-Updates (ESP-NOW/Konsole → Ring Task)
/// Hält nur den neuesten Wert: der letzte Schreiber gewinnt
pub type StateSignal = Signal<CriticalSectionRawMutex, StateUpdate>;

/// Channel für ausgehende Kommandos (Ring Task → ESP-NOW Task)
pub type OutboundChannel = Channel<CriticalSectionRawMutex, CommandMessage, OUTBOUND_QUEUE_SIZE>;

/// Sender für ausgehende Kommandos
/// Erzeugt aus OutboundChannel
pub type OutboundSender = Sender<'static, CriticalSectionRawMutex, CommandMessage, OUTBOUND_QUEUE_SIZE>;

/// Receiver für ausgehende Kommandos (ESP-NOW Task empfängt)
pub type OutboundReceiver =
    Receiver<'static, CriticalSectionRawMutex, CommandMessage, OUTBOUND_QUEUE_SIZE>;
