//! FAQ accordion state.

use serde::Serialize;

use crate::{Error, Result};

/// One paragraph of an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnswerBlock {
    Text(&'static str),
    /// Paragraph opening with a bold label, e.g. "For Creators:".
    Lead {
        label: &'static str,
        text: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static [AnswerBlock],
}

/// Open/closed flag per entry. Entries never affect each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqState {
    open: Vec<bool>,
}

impl FaqState {
    /// All `len` entries closed.
    pub fn closed(len: usize) -> Self {
        Self {
            open: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Flip one entry and return its new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let len = self.open.len();
        let slot = self
            .open
            .get_mut(index)
            .ok_or(Error::UnknownFaqEntry { index, len })?;
        *slot = !*slot;
        Ok(*slot)
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|o| **o).count()
    }
}
