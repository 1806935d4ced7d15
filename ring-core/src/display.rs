//! Display Engine: Animationen auf dem LED-Ring
//!
//! Jede Animation ist eine Folge von Schritten (Frame + Haltezeit). Die
//! Engine blockiert nie: `update()` schreibt höchstens den fälligen Frame
//! und merkt sich, wann der nächste fällig ist.

use rgb::RGB8;

use crate::config::AnimationTiming;
use crate::logic::dim;
use crate::traits::{LedError, SmartLedWriter};
use crate::types::DisplayState;

const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Bildinhalt eines Schritts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Off,
    Solid,
    /// Genau ein Pixel an
    Single(usize),
    /// Pixel 0..=i an
    Wipe(usize),
    /// Kopf bei i, zwei gedimmte Schweif-Pixel dahinter
    Comet(usize),
}

/// Ein Schritt einer Animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub frame: Frame,
    /// `None`: statischer Frame, bleibt bis sich Muster oder Farbe ändern
    pub hold_ms: Option<u32>,
}

impl Step {
    fn timed(frame: Frame, hold_ms: u32) -> Self {
        Self {
            frame,
            hold_ms: Some(hold_ms),
        }
    }
}

/// Liefert Schritt `index` der Animation für `state`
///
/// `None` heißt: die Animation hat keinen Schritt mit diesem Index. Bei
/// `Unknown` gibt es gar keine Schritte.
pub fn step(
    state: DisplayState,
    index: usize,
    pixels: usize,
    timing: &AnimationTiming,
) -> Option<Step> {
    match state {
        DisplayState::DriveForward if index < pixels => {
            Some(Step::timed(Frame::Single(index), timing.rotate_ms))
        }
        DisplayState::DriveBackward if index < pixels => Some(Step::timed(
            Frame::Single(pixels - 1 - index),
            timing.rotate_ms,
        )),
        DisplayState::LaunchLeft => blink(index, timing.launch_left_ms),
        DisplayState::LaunchRight => blink(index, timing.launch_right_ms),
        DisplayState::Stop if index == 0 => Some(Step {
            frame: Frame::Solid,
            hold_ms: None,
        }),
        DisplayState::ToHome if pixels > 0 => match index {
            i if i < pixels => Some(Step::timed(Frame::Wipe(i), timing.wipe_ms)),
            i if i == pixels => Some(Step::timed(Frame::Solid, timing.wipe_hold_ms)),
            i if i == pixels + 1 => Some(Step::timed(Frame::Off, timing.wipe_clear_ms)),
            _ => None,
        },
        DisplayState::AtHome if index < pixels => {
            Some(Step::timed(Frame::Comet(index), timing.comet_ms))
        }
        _ => None,
    }
}

fn blink(index: usize, half_period_ms: u32) -> Option<Step> {
    match index {
        0 => Some(Step::timed(Frame::Solid, half_period_ms)),
        1 => Some(Step::timed(Frame::Off, half_period_ms)),
        _ => None,
    }
}

/// Zeichnet einen Frame komplett in den Puffer
pub fn render_frame(frame: Frame, color: RGB8, timing: &AnimationTiming, pixels: &mut [RGB8]) {
    pixels.fill(BLACK);
    match frame {
        Frame::Off => {}
        Frame::Solid => pixels.fill(color),
        Frame::Single(i) => {
            if let Some(pixel) = pixels.get_mut(i) {
                *pixel = color;
            }
        }
        Frame::Wipe(i) => {
            let end = (i + 1).min(pixels.len());
            pixels[..end].fill(color);
        }
        Frame::Comet(head) => {
            let trail = [
                (Some(head), color),
                (head.checked_sub(1), dim(color, timing.comet_trail_1)),
                (head.checked_sub(2), dim(color, timing.comet_trail_2)),
            ];
            for (index, shade) in trail {
                if let Some(pixel) = index.and_then(|i| pixels.get_mut(i)) {
                    *pixel = shade;
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Burst {
    state: DisplayState,
    color: RGB8,
    step: usize,
    due_ms: Option<u64>,
}

/// Rendert Animationen auf einen Ring mit `N` Pixeln
///
/// Einziger Besitzer des LED-Writers.
pub struct DisplayEngine<W, const N: usize> {
    writer: W,
    pixels: [RGB8; N],
    timing: AnimationTiming,
    burst: Option<Burst>,
}

impl<W: SmartLedWriter, const N: usize> DisplayEngine<W, N> {
    pub fn new(writer: W, timing: AnimationTiming) -> Self {
        Self {
            writer,
            pixels: [BLACK; N],
            timing,
            burst: None,
        }
    }

    /// Schreibt den fälligen Frame für `state` in `color`
    ///
    /// Ein Wechsel von Muster oder Farbe startet die Animation sofort neu.
    /// Nach dem letzten Schritt beginnt sie wieder von vorn.
    ///
    /// # Returns
    /// - `Ok(true)` - ein Frame wurde geschrieben
    /// - `Ok(false)` - nichts fällig (oder nichts darzustellen)
    /// - `Err(LedError)` - Schreiben fehlgeschlagen, der Frame wird beim
    ///   nächsten Aufruf wiederholt
    pub fn update(
        &mut self,
        state: DisplayState,
        color: RGB8,
        now_ms: u64,
    ) -> Result<bool, LedError> {
        let changed = self
            .burst
            .is_none_or(|burst| burst.state != state || burst.color != color);
        if changed {
            self.burst = Some(Burst {
                state,
                color,
                step: 0,
                due_ms: Some(now_ms),
            });
        }

        let Some(burst) = self.burst.as_mut() else {
            return Ok(false);
        };
        match burst.due_ms {
            Some(due) if now_ms >= due => {}
            _ => return Ok(false),
        }

        let current = match step(state, burst.step, N, &self.timing) {
            Some(current) => current,
            None => match step(state, 0, N, &self.timing) {
                Some(first) => {
                    burst.step = 0;
                    first
                }
                None => {
                    // Unknown: nichts rendern, letzter Frame bleibt stehen
                    burst.due_ms = None;
                    return Ok(false);
                }
            },
        };

        render_frame(current.frame, color, &self.timing, &mut self.pixels);
        self.writer.write(&self.pixels)?;

        burst.step += 1;
        burst.due_ms = current.hold_ms.map(|hold| now_ms + u64::from(hold));
        Ok(true)
    }

    /// Zeitpunkt des nächsten fälligen Frames
    pub fn next_due(&self) -> Option<u64> {
        self.burst.and_then(|burst| burst.due_ms)
    }

    pub fn pixels(&self) -> &[RGB8; N] {
        &self.pixels
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };

    fn steps(state: DisplayState, pixels: usize) -> usize {
        let timing = AnimationTiming::default();
        (0..).take_while(|&i| step(state, i, pixels, &timing).is_some()).count()
    }

    #[test]
    fn test_step_counts() {
        assert_eq!(steps(DisplayState::DriveForward, 12), 12);
        assert_eq!(steps(DisplayState::DriveBackward, 12), 12);
        assert_eq!(steps(DisplayState::LaunchLeft, 12), 2);
        assert_eq!(steps(DisplayState::LaunchRight, 12), 2);
        assert_eq!(steps(DisplayState::Stop, 12), 1);
        assert_eq!(steps(DisplayState::ToHome, 12), 14);
        assert_eq!(steps(DisplayState::AtHome, 12), 12);
        assert_eq!(steps(DisplayState::Unknown(9), 12), 0);
    }

    #[test]
    fn test_launch_right_blinks_faster_than_left() {
        let timing = AnimationTiming::default();
        let left = step(DisplayState::LaunchLeft, 0, 12, &timing).unwrap();
        let right = step(DisplayState::LaunchRight, 0, 12, &timing).unwrap();
        assert_eq!(left.hold_ms, Some(300));
        assert_eq!(right.hold_ms, Some(40));
    }

    #[test]
    fn test_comet_frame() {
        let timing = AnimationTiming::default();
        let mut pixels = [BLACK; 6];
        render_frame(Frame::Comet(3), RED, &timing, &mut pixels);
        assert_eq!(pixels[3], RED);
        assert_eq!(pixels[2], RGB8 { r: 100, g: 0, b: 0 });
        assert_eq!(pixels[1], RGB8 { r: 40, g: 0, b: 0 });
        assert_eq!(pixels[0], BLACK);
        assert_eq!(pixels[4], BLACK);
    }

    #[test]
    fn test_comet_head_at_start_has_no_trail() {
        let timing = AnimationTiming::default();
        let mut pixels = [BLACK; 4];
        render_frame(Frame::Comet(0), RED, &timing, &mut pixels);
        assert_eq!(pixels, [RED, BLACK, BLACK, BLACK]);
    }

    #[test]
    fn test_wipe_frame() {
        let timing = AnimationTiming::default();
        let mut pixels = [BLACK; 4];
        render_frame(Frame::Wipe(1), RED, &timing, &mut pixels);
        assert_eq!(pixels, [RED, RED, BLACK, BLACK]);
    }
}
