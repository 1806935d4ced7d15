// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use ring_core::{AnimationTiming, DEFAULT_PALETTE, DebouncePolicy, NamedColor, RingConfig};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für den LED-Ring (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// Anzahl der LEDs im Ring
pub const LED_COUNT: usize = 12;

/// Globale Helligkeit (0-255), wird einmal im Writer gesetzt
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 50;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Farben für den Farb-Taster (Reihenfolge = Durchschalt-Reihenfolge)
pub const PALETTE: &[NamedColor] = &DEFAULT_PALETTE;

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// GPIO-Pin des Farb-Tasters (active-low, interner Pull-up)
pub const COLOR_BUTTON_GPIO_PIN: u8 = 2;

/// GPIO-Pin des Enable-Tasters (active-low, interner Pull-up)
pub const ENABLE_BUTTON_GPIO_PIN: u8 = 3;

/// Settle-Zeit zwischen Flanke und Bestätigungs-Lesen
pub const DEBOUNCE_SETTLE_MS: u64 = 50;

/// Poll-Intervall der Hauptschleife
/// Obergrenze für die Latenz von Tastern, Timeout und State-Updates
pub const POLL_INTERVAL_MS: u64 = 5;

// ============================================================================
// Session Konfiguration
// ============================================================================

/// Dauer einer Session bis zum automatischen Disable (2,5 Minuten)
pub const SESSION_DURATION_MS: u64 = 150_000;

// ============================================================================
// ESP-NOW Konfiguration
// ============================================================================

/// Board-ID im Wire-Format
/// Wird zur Build-Zeit aus der Environment Variable BOARD_ID geladen
/// (siehe .env.example), ohne Angabe 1
pub const BOARD_ID: u8 = parse_board_id(option_env!("BOARD_ID"));

/// WiFi-Kanal für ESP-NOW (alle Boards müssen denselben nutzen)
pub const ESPNOW_CHANNEL: u8 = 1;

/// Kapazität der Warteschlange für ausgehende Kommandos
pub const OUTBOUND_QUEUE_SIZE: usize = 4;

/// Heap-Größe für den Funk-Stack (Bytes)
pub const RADIO_HEAP_SIZE: usize = 65536; // 64 KB

// ============================================================================
// Debug-Konsole
// ============================================================================

/// Lese-Buffer für die USB-Serial-JTAG Konsole
pub const CONSOLE_BUFFER_SIZE: usize = 32;

/// Wartezeit nach einem Lesefehler
pub const CONSOLE_RETRY_DELAY_MS: u64 = 100;

// ============================================================================
// Laufzeit-Konfiguration für ring-core
// ============================================================================

/// Baut die Konfiguration für den RingController aus den Konstanten
pub fn ring_config() -> RingConfig {
    RingConfig {
        sender_id: BOARD_ID,
        session_duration_ms: SESSION_DURATION_MS,
        debounce_settle_ms: DEBOUNCE_SETTLE_MS,
        color_button: DebouncePolicy::Confirm,
        enable_button: DebouncePolicy::Confirm,
        timing: AnimationTiming::default(),
    }
}

const fn parse_board_id(raw: Option<&str>) -> u8 {
    let Some(raw) = raw else {
        return 1;
    };
    let bytes = raw.as_bytes();
    assert!(!bytes.is_empty(), "BOARD_ID ist leer");

    let mut value: u16 = 0;
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "BOARD_ID muss eine Zahl sein");
        value = value * 10 + (bytes[i] - b'0') as u16;
        assert!(value <= 255, "BOARD_ID muss zwischen 0 und 255 liegen");
        i += 1;
    }
    value as u8
}
