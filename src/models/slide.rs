//! Slide model.
//!
//! A slide carries display text and the show second at which it should
//! appear. Slides are ordered by urgency: the earlier the display time,
//! the higher the priority, so a max-priority queue yields them in
//! chronological order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A slide scheduled for display.
///
/// # Ordering
/// `a > b` when `a` must be shown before `b`. Slides with the same
/// display time compare equal whatever their text, and `==` follows the
/// same rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// Text shown on screen.
    pub text: String,
    /// Display time in seconds since the show started.
    pub display_time: u32,
}

impl Slide {
    /// Creates a slide.
    pub fn new(text: impl Into<String>, display_time: u32) -> Self {
        Self {
            text: text.into(),
            display_time,
        }
    }

    /// Whether the slide is due at or before `clock` seconds.
    pub fn is_due(&self, clock: u32) -> bool {
        self.display_time <= clock
    }
}

impl PartialEq for Slide {
    fn eq(&self, other: &Self) -> bool {
        self.display_time == other.display_time
    }
}

impl Eq for Slide {}

impl PartialOrd for Slide {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slide {
    fn cmp(&self, other: &Self) -> Ordering {
        // Earlier display time ranks higher.
        other.display_time.cmp(&self.display_time)
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}s", self.text, self.display_time)
    }
}
