// Ring Task - Taster, Session-Timer und Animationen des LED-Rings
use defmt::{error, info, warn};
use embassy_futures::select::{Either, select};
use embassy_time::{Instant, Timer};
use esp_hal_smartled::smart_led_buffer;

use crate::config::{
    LED_BRIGHTNESS, LED_COUNT, PALETTE, POLL_INTERVAL_MS, RMT_CLOCK_MHZ, ring_config,
};
use crate::hal::{Buttons, RmtLedWriter};
use crate::{
    ButtonLevels, ColorPalette, CycleReport, OutboundSender, RingController, SmartLedWriter,
    StateSignal,
};

/// Ring Logic - Testbare Hauptschleife ohne direkte Hardware-Abhängigkeit
///
/// Pro Durchlauf:
/// - übernimmt das neueste State-Update (ESP-NOW oder Konsole)
/// - lässt den Controller Taster, Session und Animation fortschreiben
/// - reicht Enable/Disable-Kommandos an den ESP-NOW Task weiter
/// - schläft bis zum nächsten Termin oder bis ein neues Update kommt
///
/// # Parameter
/// - `controller`: RingController mit LED Writer (Hardware oder Mock)
/// - `read_buttons`: liefert die aktuellen Taster-Pegel
/// - `state_signal`: Signal mit dem zuletzt empfangenen Display State
/// - `outbound`: Sender für ausgehende Kommandos
pub async fn ring_logic<L, const N: usize>(
    mut controller: RingController<L, N>,
    mut read_buttons: impl FnMut() -> ButtonLevels,
    state_signal: &'static StateSignal,
    outbound: OutboundSender,
) -> !
where
    L: SmartLedWriter,
{
    info!(
        "Ring: started with {} LEDs, session {} ms",
        N,
        controller.config().session_duration_ms
    );

    loop {
        // Neuestes Update übernehmen (ältere wurden bereits überschrieben)
        if let Some(update) = state_signal.try_take() {
            let previous = controller.apply_state(update);
            info!("Ring: display state {} -> {}", previous, update);
        }

        let now = Instant::now().as_millis();
        let report = controller.tick(now, read_buttons());
        log_report(&report);

        if let Some(message) = report.outbound {
            if outbound.try_send(message).is_err() {
                error!("Ring: outbound queue full, dropping {}", message);
            }
        }

        // Spätestens nach POLL_INTERVAL_MS wieder Taster lesen
        let poll_at = now + POLL_INTERVAL_MS;
        let wake_at = controller
            .next_wakeup()
            .map_or(poll_at, |due| due.min(poll_at));

        if let Either::First(update) = select(
            state_signal.wait(),
            Timer::at(Instant::from_millis(wake_at)),
        )
        .await
        {
            let previous = controller.apply_state(update);
            info!("Ring: display state {} -> {}", previous, update);
        }
    }
}

fn log_report(report: &CycleReport) {
    if let Some(color) = report.color_changed {
        info!("Ring: color -> {}", color);
    }
    if report.enable_pressed && report.session.is_none() {
        info!("Ring: enable pressed, session already running");
    }
    if let Some(event) = report.session {
        info!("Ring: session {}", event);
    }
    if let Some(err) = report.display_error {
        warn!("Ring: {}, retrying on next cycle", err);
    }
}

/// Ring Task - Embassy Task für parallele Ausführung
///
/// Initialisiert LED-Ring und Taster und ruft dann `ring_logic()` auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `color_pin`: GPIO2 für den Farb-Taster
/// - `enable_pin`: GPIO3 für den Enable-Taster
/// - `state_signal`: Signal für Display-State-Updates
/// - `outbound`: Sender für Enable/Disable-Kommandos
#[embassy_executor::task]
pub async fn ring_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    color_pin: esp_hal::peripherals::GPIO2<'static>,
    enable_pin: esp_hal::peripherals::GPIO3<'static>,
    state_signal: &'static StateSignal,
    outbound: OutboundSender,
) {
    // Buffer für SmartLED Daten erstellen (ganzer Ring)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(LED_COUNT);

    let led = match RmtLedWriter::new(
        gpio8,
        rmt_peripheral,
        RMT_CLOCK_MHZ,
        &mut rmt_buffer,
        LED_BRIGHTNESS,
    ) {
        Ok(led) => led,
        Err(e) => {
            error!("Ring: LED init failed: {}", e);
            return;
        }
    };

    let palette = match ColorPalette::new(PALETTE) {
        Ok(palette) => palette,
        Err(e) => {
            error!("Ring: {}", e);
            return;
        }
    };

    let buttons = Buttons::new(color_pin, enable_pin);
    let controller: RingController<_, LED_COUNT> =
        RingController::new(led, palette, ring_config());

    ring_logic(controller, || buttons.levels(), state_signal, outbound).await
}
