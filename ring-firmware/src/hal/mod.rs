// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter Traits bzw. schmalen
// Wrappern, die Logik selbst liegt in ring-core.

pub mod buttons;
pub mod led_writer;

pub use buttons::Buttons;
pub use led_writer::{LED_BUFFER_SIZE, RmtLedWriter};
