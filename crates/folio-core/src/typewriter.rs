//! Typewriter phrase cycling.
//!
//! The cycler is a small state machine driven by the caller's timer: each
//! call to [`PhraseCycler::step`] performs one edit and reports how long to
//! wait before the next one.

use crate::constants::{DELETE_STEP_MS, TYPE_PAUSE_MS, TYPE_STEP_MS};
use crate::error::FxError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    /// Full phrase shown; the next step starts deleting.
    Pausing,
    Deleting,
}

/// Result of a single edit: the text to display and the delay before the
/// next step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct PhraseCycler {
    phrases: Vec<String>,
    index: usize,
    visible: usize,
    phase: Phase,
}

impl PhraseCycler {
    pub fn new<I, S>(phrases: I) -> Result<Self, FxError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(FxError::EmptyPhrases);
        }
        Ok(Self {
            phrases,
            index: 0,
            visible: 0,
            phase: Phase::Typing,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Number of characters currently shown.
    pub fn visible_len(&self) -> usize {
        self.visible
    }

    /// Length of the current phrase in characters.
    pub fn phrase_len(&self) -> usize {
        self.phrases[self.index].chars().count()
    }

    /// Currently displayed prefix; never splits a multi-byte character.
    pub fn text(&self) -> &str {
        let phrase = &self.phrases[self.index];
        match phrase.char_indices().nth(self.visible) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    pub fn step(&mut self) -> TypeStep {
        let len = self.phrase_len();
        let delay_ms = match self.phase {
            Phase::Typing => {
                self.visible = (self.visible + 1).min(len);
                if self.visible == len {
                    self.phase = Phase::Pausing;
                    TYPE_PAUSE_MS
                } else {
                    TYPE_STEP_MS
                }
            }
            Phase::Pausing | Phase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    TYPE_STEP_MS
                } else {
                    self.phase = Phase::Deleting;
                    DELETE_STEP_MS
                }
            }
        };
        TypeStep {
            text: self.text().to_owned(),
            delay_ms,
        }
    }
}
