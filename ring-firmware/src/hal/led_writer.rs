// SmartLED Writer für den LED-Ring
//
// Implementiert den SmartLedWriter-Trait aus ring-core mit dem
// ESP32 RMT Peripheral. Die globale Helligkeit wird hier angewendet,
// die Animationen rechnen immer mit voller Palettenfarbe.

use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use ring_core::{LedError, SmartLedWriter, dim};
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::LED_COUNT;

/// Buffer-Größe für den Ring (3 Farben * 8 Bits pro LED + 1 Reset)
pub const LED_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

/// Real Hardware LED Writer
///
/// Nutzt ESP32 RMT Peripheral um WS2812 LEDs anzusteuern.
///
/// Hinweis: Der Buffer muss länger leben als der Writer, daher wird er im
/// Task erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtLedWriter<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    brightness: u8,
}

impl<'a> RmtLedWriter<'a> {
    /// Erstellt einen neuen RmtLedWriter
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(LED_COUNT))
    /// - `brightness`: globale Helligkeit 0-255, bleibt zur Laufzeit fest
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [PulseCode; LED_BUFFER_SIZE],
        brightness: u8,
    ) -> Result<Self, LedError> {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::WriteFailed)?;

        // SmartLED Adapter erstellen
        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self { led, brightness })
    }
}

impl<'a> SmartLedWriter for RmtLedWriter<'a> {
    fn write(&mut self, pixels: &[RGB8]) -> Result<(), LedError> {
        let brightness = self.brightness;
        self.led
            .write(pixels.iter().map(|pixel| dim(*pixel, brightness)))
            .map_err(|_| LedError::WriteFailed)
    }
}
