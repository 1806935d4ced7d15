// Taster-Eingänge (active-low mit internem Pull-up)

use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};
use ring_core::{ButtonLevels, Level};

/// Farb- und Enable-Taster
///
/// Liefert nur Rohpegel; entprellt wird in ring-core.
pub struct Buttons<'a> {
    color: Input<'a>,
    enable: Input<'a>,
}

impl<'a> Buttons<'a> {
    pub fn new(color_pin: impl InputPin + 'a, enable_pin: impl InputPin + 'a) -> Self {
        let config = InputConfig::default().with_pull(Pull::Up);
        Self {
            color: Input::new(color_pin, config),
            enable: Input::new(enable_pin, config),
        }
    }

    /// Liest beide Taster einmal
    pub fn levels(&self) -> ButtonLevels {
        ButtonLevels {
            color: level(&self.color),
            enable: level(&self.enable),
        }
    }
}

fn level(input: &Input<'_>) -> Level {
    if input.is_low() { Level::Low } else { Level::High }
}
