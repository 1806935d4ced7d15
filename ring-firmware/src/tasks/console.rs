// Konsolen Task - Display State per Ziffer über USB-Serial-JTAG setzen
use defmt::{debug, info, warn};
use embassy_time::{Duration, Timer};
use embedded_io_async::Read;
use esp_hal::usb_serial_jtag::UsbSerialJtag;

use crate::config::{CONSOLE_BUFFER_SIZE, CONSOLE_RETRY_DELAY_MS};
use crate::{StateSignal, StateSource, StateUpdate};

/// Konsolen Task
///
/// Jede Ziffer '0'..'6' setzt den Display State sofort, wie ein
/// FsmState-Kommando per ESP-NOW. Alle anderen Bytes (auch Zeilenenden)
/// werden ignoriert.
#[embassy_executor::task]
pub async fn console_task(
    usb_device: esp_hal::peripherals::USB_DEVICE<'static>,
    state_signal: &'static StateSignal,
) {
    let (mut rx, _tx) = UsbSerialJtag::new(usb_device).into_async().split();
    let mut buffer = [0u8; CONSOLE_BUFFER_SIZE];

    info!("Console: send 0-6 to set the display state");

    loop {
        let len = match rx.read(&mut buffer).await {
            Ok(len) => len,
            Err(_) => {
                warn!("Console: read failed");
                Timer::after(Duration::from_millis(CONSOLE_RETRY_DELAY_MS)).await;
                continue;
            }
        };

        for &byte in &buffer[..len] {
            match ring_core::parse_console_byte(byte) {
                Some(state) => {
                    info!("Console: state {}", state);
                    state_signal.signal(StateUpdate {
                        state,
                        source: StateSource::Console,
                    });
                }
                None => debug!("Console: ignoring byte {=u8:#x}", byte),
            }
        }
    }
}
