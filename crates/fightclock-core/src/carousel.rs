//! One-at-a-time view position over the script's segments.
//!
//! Navigation clamps at both ends and never touches timer state; a running
//! segment keeps counting while another one is shown.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Points at the first segment. A zero-length carousel is tolerated
    /// and simply never moves.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn at_first(&self) -> bool {
        self.index == 0
    }

    pub fn at_last(&self) -> bool {
        self.len == 0 || self.index == self.len - 1
    }

    /// Move one segment forward. Returns false when already at the end.
    pub fn next(&mut self) -> bool {
        if self.at_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move one segment back. Returns false when already at the start.
    pub fn prev(&mut self) -> bool {
        if self.at_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jump straight to a segment. Returns false (and stays put) when the
    /// index is out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }
}
