//! Scramble-to-reveal text animation.
//!
//! Each animated element owns a [`RevealAnimation`] record; a single
//! [`RevealScheduler`] advances every active record from one shared tick so
//! the frontend needs exactly one timer regardless of how many elements are
//! animating. Revealed animations are terminal and never emit again.

use crate::constants::{REVEAL_CURSOR_STEP, SCRAMBLE_ALPHABET};
use rand::Rng;

/// Text an element reveals: a non-empty `data-value` override wins over the
/// element's own content, matching the page markup contract.
pub fn reveal_source<'a>(override_value: Option<&'a str>, content: &'a str) -> &'a str {
    match override_value {
        Some(v) if !v.is_empty() => v,
        _ => content,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Revealing,
    Revealed,
}

/// One element's animation state: the resolved text plus a fractional cursor.
/// Positions left of the cursor are fixed; the rest are redrawn every tick.
#[derive(Clone, Debug)]
pub struct RevealAnimation {
    original: Vec<char>,
    cursor: f32,
    phase: RevealPhase,
}

impl RevealAnimation {
    pub fn new(text: &str) -> Self {
        Self {
            original: text.chars().collect(),
            cursor: 0.0,
            phase: RevealPhase::Revealing,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn original_text(&self) -> String {
        self.original.iter().collect()
    }

    /// Advance one tick. Returns the text to display and whether the
    /// animation just finished, or `None` once the animation is terminal.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Option<(String, bool)> {
        if self.phase == RevealPhase::Revealed {
            return None;
        }
        let len = self.original.len() as f32;
        if self.cursor >= len {
            self.phase = RevealPhase::Revealed;
            return Some((self.original_text(), true));
        }
        let text: String = self
            .original
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if (i as f32) < self.cursor {
                    *c
                } else {
                    SCRAMBLE_ALPHABET[rng.gen_range(0..SCRAMBLE_ALPHABET.len())] as char
                }
            })
            .collect();
        self.cursor += REVEAL_CURSOR_STEP;
        Some((text, false))
    }
}

/// Output of one scheduler tick for one element.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealFrame {
    /// Index returned by [`RevealScheduler::begin`].
    pub slot: usize,
    pub text: String,
    pub done: bool,
}

/// Owns every animation record and advances all of them from one shared tick.
#[derive(Default)]
pub struct RevealScheduler {
    slots: Vec<RevealAnimation>,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new animation and return its slot index. The animation
    /// starts revealing on the next tick.
    pub fn begin(&mut self, text: &str) -> usize {
        self.slots.push(RevealAnimation::new(text));
        self.slots.len() - 1
    }

    /// Advance every active animation one tick, appending a frame per active
    /// slot to `out`. Terminal slots produce nothing.
    pub fn tick<R: Rng>(&mut self, rng: &mut R, out: &mut Vec<RevealFrame>) {
        for (slot, anim) in self.slots.iter_mut().enumerate() {
            if let Some((text, done)) = anim.tick(rng) {
                out.push(RevealFrame { slot, text, done });
            }
        }
    }

    /// Number of animations still revealing.
    pub fn active(&self) -> usize {
        self.slots
            .iter()
            .filter(|a| a.phase() == RevealPhase::Revealing)
            .count()
    }

    /// True when no animation needs further ticks; the driver can stop its
    /// shared timer until the next `begin`.
    pub fn is_idle(&self) -> bool {
        self.active() == 0
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
