// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Signal/Channel
// (ESP-NOW/Konsole → Ring über StateSignal, Ring → ESP-NOW über OutboundChannel).

pub mod console;
pub mod espnow;
pub mod ring;

// Re-export Tasks für einfachen Import
pub use console::console_task;
pub use espnow::espnow_task;
pub use ring::ring_task;
