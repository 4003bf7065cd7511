//! Transient success/error banner shown above a screen's content.
//!
//! Each `show` bumps a generation counter. The auto-dismiss timer started
//! for a banner passes its generation back to `dismiss`, so a timer that
//! outlives its banner never clears a newer one.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashState {
    pub current: Option<Flash>,
    generation: u64,
}

impl FlashState {
    /// Replace the banner and return its generation.
    pub fn show(&mut self, kind: FlashKind, text: impl Into<String>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(Flash { kind, text: text.into() });
        self.generation
    }

    /// Clear the banner if it is still the one shown at `generation`.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if self.generation != generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
