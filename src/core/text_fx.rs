//! Timed text effects started alongside a slide's simulations.
//!
//! Each effect is a small state machine advanced with the host frame time in
//! milliseconds. `frame` returns `Some(text)` only when the element's text
//! should change; pauses between cycles are tracked here, so stopping an
//! effect never leaves a timer behind.

use crate::constants::*;
use rand::prelude::*;

pub const TICK_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%&*";
pub const SLOT_VALUES: [u32; 14] = [5, 10, 20, 30, 50, 75, 100, 3, 8, 15, 25, 40, 60, 80];

/// Whether `slide_id` animates its `.stat-number` elements.
pub fn runs_stat_counters(slide_id: &str) -> bool {
    slide_id == STATS_SLIDE
}

/// Scrambled rendering of `original` at `progress` (0..1) through the
/// reveal: revealed characters are kept, the rest are random glyphs.
pub fn scramble<R: Rng + ?Sized>(original: &str, progress: f64, rng: &mut R) -> String {
    let len = original.chars().count() as f64;
    let revealed = progress * len - 1.0;
    original
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if (i as f64) < revealed {
                c
            } else {
                TICK_CHARS
                    .choose(rng)
                    .map(|&b| b as char)
                    .unwrap_or(c)
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Settled,
}

/// Scramble-reveal loop: reveal over the scramble window, hold, repeat.
#[derive(Clone, Debug)]
pub struct TickText {
    original: String,
    phase: Phase,
    cycle_start: Option<f64>,
}

impl TickText {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            phase: Phase::Idle,
            cycle_start: None,
        }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.phase = Phase::Running;
        self.cycle_start = None;
    }

    /// Stop and return the text to restore.
    pub fn stop(&mut self) -> &str {
        self.phase = Phase::Idle;
        self.cycle_start = None;
        &self.original
    }

    pub fn frame<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> Option<String> {
        if self.phase == Phase::Idle {
            return None;
        }
        let start = *self.cycle_start.get_or_insert(now_ms);
        let elapsed = now_ms - start;
        match self.phase {
            Phase::Running if elapsed < TICK_SCRAMBLE_MS => {
                Some(scramble(&self.original, elapsed / TICK_SCRAMBLE_MS, rng))
            }
            Phase::Running => {
                self.phase = Phase::Settled;
                Some(self.original.clone())
            }
            Phase::Settled if elapsed >= TICK_SCRAMBLE_MS + TICK_PAUSE_MS => {
                self.phase = Phase::Running;
                self.cycle_start = Some(now_ms);
                Some(scramble(&self.original, 0.0, rng))
            }
            _ => None,
        }
    }
}

/// Slot-machine number: spin with slowing flicker, land, hold, repeat.
#[derive(Clone, Debug)]
pub struct SlotNumber {
    phase: Phase,
    cycle_start: Option<f64>,
    target: u32,
}

impl Default for SlotNumber {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            cycle_start: None,
            target: SLOT_VALUES[0],
        }
    }
}

/// Flicker interval at `elapsed` ms into the spin; shrinks as the spin goes on.
#[inline]
pub fn slot_interval(elapsed: f64) -> f64 {
    (SLOT_MAX_INTERVAL_MS - (elapsed / SLOT_SPIN_MS) * 100.0).max(SLOT_MIN_INTERVAL_MS)
}

fn pick_slot<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    *SLOT_VALUES.choose(rng).unwrap_or(&SLOT_VALUES[0])
}

impl SlotNumber {
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_running() {
            return;
        }
        self.phase = Phase::Running;
        self.cycle_start = None;
        self.target = pick_slot(rng);
    }

    pub fn stop(&mut self) {
        self.phase = Phase::Idle;
        self.cycle_start = None;
    }

    pub fn frame<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> Option<String> {
        if self.phase == Phase::Idle {
            return None;
        }
        let start = *self.cycle_start.get_or_insert(now_ms);
        let elapsed = now_ms - start;
        match self.phase {
            Phase::Running if elapsed < SLOT_SPIN_MS => {
                (elapsed % slot_interval(elapsed) < SLOT_UPDATE_WINDOW_MS)
                    .then(|| pick_slot(rng).to_string())
            }
            Phase::Running => {
                self.phase = Phase::Settled;
                Some(self.target.to_string())
            }
            Phase::Settled if elapsed >= SLOT_SPIN_MS + SLOT_PAUSE_MS => {
                self.phase = Phase::Running;
                self.cycle_start = Some(now_ms);
                self.target = pick_slot(rng);
                Some(pick_slot(rng).to_string())
            }
            _ => None,
        }
    }
}

/// Count-up to a target with an ease-out-cubic curve. Runs once per entry.
#[derive(Clone, Debug)]
pub struct StatCounter {
    target: f64,
    started_at: Option<f64>,
    running: bool,
}

#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Format `value` the way the counter shows `target`: one decimal for
/// fractional targets, a rounded integer otherwise.
pub fn format_count(target: f64, value: f64) -> String {
    if target.fract() != 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value.round() as i64)
    }
}

impl StatCounter {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            started_at: None,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
        self.started_at = None;
    }

    /// Stop and return the reset text.
    pub fn stop(&mut self) -> &'static str {
        self.running = false;
        self.started_at = None;
        "0"
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame(&mut self, now_ms: f64) -> Option<String> {
        if !self.running {
            return None;
        }
        let start = *self.started_at.get_or_insert(now_ms);
        let progress = ((now_ms - start) / STAT_COUNT_MS).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.running = false;
        }
        Some(format_count(
            self.target,
            self.target * ease_out_cubic(progress),
        ))
    }
}
