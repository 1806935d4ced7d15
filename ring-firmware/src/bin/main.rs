// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (Funk-Stack benötigt dynamischen Speicher)
extern crate alloc;

// Embassy Async Runtime
use defmt::{Debug2Format, error, info};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use esp_radio::wifi::{ClientConfig, ModeConfig};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use robot_led_ring::config::{BOARD_ID, RADIO_HEAP_SIZE};
use robot_led_ring::tasks::{console_task, espnow, espnow_task, ring_task};
use robot_led_ring::{OutboundChannel, StateSignal};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und Funk, startet Embassy Runtime und spawnt Tasks.
/// Ohne Funk läuft der Ring weiter, nur eben ohne ESP-NOW.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (Funk braucht dynamischen Speicher!)
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: RADIO_HEAP_SIZE
    );

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("Board {}: starting", BOARD_ID);

    // Display-State Signal (ESP-NOW/Konsole → Ring)
    static STATE_SIGNAL: static_cell::StaticCell<StateSignal> = static_cell::StaticCell::new();
    let state_signal = &*STATE_SIGNAL.init(StateSignal::new());

    // Kommando-Channel (Ring → ESP-NOW)
    static OUTBOUND_CHANNEL: static_cell::StaticCell<OutboundChannel> =
        static_cell::StaticCell::new();
    let outbound_channel = &*OUTBOUND_CHANNEL.init(OutboundChannel::new());

    // Spawn Ring Task (LED-Ring + Taster)
    if let Err(e) = spawner.spawn(ring_task(
        peripherals.GPIO8,
        peripherals.RMT,
        peripherals.GPIO2,
        peripherals.GPIO3,
        state_signal,
        outbound_channel.sender(),
    )) {
        error!("Failed to spawn ring task: {}", Debug2Format(&e));
    }

    // Spawn Konsolen Task (USB-Serial-JTAG)
    if let Err(e) = spawner.spawn(console_task(peripherals.USB_DEVICE, state_signal)) {
        error!("Failed to spawn console task: {}", Debug2Format(&e));
    }

    // Funk Hardware initialisieren
    static RADIO_INIT: static_cell::StaticCell<esp_radio::Controller> =
        static_cell::StaticCell::new();
    let radio_init = match esp_radio::init() {
        Ok(controller) => &*RADIO_INIT.init(controller),
        Err(e) => {
            error!("Radio init failed, running without ESP-NOW: {}", Debug2Format(&e));
            idle().await
        }
    };

    let (mut wifi_controller, interfaces) =
        match esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default()) {
            Ok(wifi) => wifi,
            Err(e) => {
                error!("WiFi init failed, running without ESP-NOW: {}", Debug2Format(&e));
                idle().await
            }
        };

    // ESP-NOW braucht eine gestartete WiFi-Station, verbunden wird nicht
    if let Err(e) = wifi_controller.set_config(&ModeConfig::Client(ClientConfig::default())) {
        error!("WiFi config failed: {}", Debug2Format(&e));
    }
    if let Err(e) = wifi_controller.start_async().await {
        error!("WiFi start failed, running without ESP-NOW: {}", Debug2Format(&e));
        idle().await
    }

    let mut esp_now = interfaces.esp_now;
    match espnow::init(&mut esp_now) {
        Ok(()) => {
            if let Err(e) = spawner.spawn(espnow_task(
                esp_now,
                outbound_channel.receiver(),
                state_signal,
            )) {
                error!("Failed to spawn ESP-NOW task: {}", Debug2Format(&e));
            }
        }
        Err(e) => error!("ESP-NOW init failed: {}", e),
    }

    // Main-Loop: hält den WiFi-Controller am Leben, alle Arbeit läuft in Tasks
    let _wifi_controller = wifi_controller;
    idle().await
}

async fn idle() -> ! {
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
