//! Laufzeit-Konfiguration der Ring-Logik
//!
//! Sammelt alle Zeiten und Schalter, die früher als globale Konstanten
//! verteilt waren. Die Firmware baut sie aus `config.rs` zusammen und
//! übergibt sie an die Konstruktoren.

/// Entprell-Strategie eines Tasters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebouncePolicy {
    /// HIGH→LOW erkennen, Settle-Zeit abwarten, erneut lesen
    Confirm,
    /// Flanke sofort akzeptieren (kein zweites Lesen)
    Immediate,
}

/// Frame-Zeiten der Animationen in Millisekunden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    /// DriveForward / DriveBackward, pro Pixel
    pub rotate_ms: u32,
    /// LaunchLeft, jeweils an und aus
    pub launch_left_ms: u32,
    /// LaunchRight, jeweils an und aus
    pub launch_right_ms: u32,
    /// ToHome, pro Pixel beim Einwischen
    pub wipe_ms: u32,
    /// ToHome, voller Ring nach dem Einwischen
    pub wipe_hold_ms: u32,
    /// ToHome, dunkler Ring am Ende
    pub wipe_clear_ms: u32,
    /// AtHome, pro Kopfposition
    pub comet_ms: u32,
    /// Helligkeit des ersten Schweif-Pixels (x/255)
    pub comet_trail_1: u8,
    /// Helligkeit des zweiten Schweif-Pixels (x/255)
    pub comet_trail_2: u8,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            rotate_ms: 100,
            launch_left_ms: 300,
            launch_right_ms: 40,
            wipe_ms: 80,
            wipe_hold_ms: 300,
            wipe_clear_ms: 200,
            comet_ms: 80,
            comet_trail_1: 100,
            comet_trail_2: 40,
        }
    }
}

/// Konfiguration für `RingController`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingConfig {
    /// Kennung dieses Boards im Wire-Format
    pub sender_id: u8,
    /// Dauer einer Session bis zum automatischen Disable
    pub session_duration_ms: u64,
    /// Wartezeit zwischen Flanke und Bestätigungs-Lesen
    pub debounce_settle_ms: u64,
    pub color_button: DebouncePolicy,
    pub enable_button: DebouncePolicy,
    pub timing: AnimationTiming,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            sender_id: 1,
            session_duration_ms: 150_000,
            debounce_settle_ms: 50,
            color_button: DebouncePolicy::Confirm,
            enable_button: DebouncePolicy::Confirm,
            timing: AnimationTiming::default(),
        }
    }
}
