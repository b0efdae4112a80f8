//! Slide show configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::MAXIMUM_LENGTH;

/// Limits and cadence of a slide show.
///
/// Display times are whole seconds since the show started. Missing fields
/// deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideShowConfig {
    /// Maximum number of slides accepted through validation.
    pub max_slides: usize,
    /// Earliest admissible display time (s, inclusive).
    pub earliest_time: u32,
    /// Latest admissible display time (s, inclusive).
    pub latest_time: u32,
    /// Interval between clock ticks (ms).
    pub tick_interval_ms: u64,
}

impl SlideShowConfig {
    /// Creates the default configuration: 10 slides, times 1..=10, 1s ticks.
    pub fn new() -> Self {
        Self {
            max_slides: MAXIMUM_LENGTH,
            earliest_time: 1,
            latest_time: 10,
            tick_interval_ms: 1000,
        }
    }

    /// Sets the slide limit.
    pub fn with_max_slides(mut self, max_slides: usize) -> Self {
        self.max_slides = max_slides;
        self
    }

    /// Sets the admissible display-time window.
    pub fn with_time_window(mut self, earliest: u32, latest: u32) -> Self {
        self.earliest_time = earliest;
        self.latest_time = latest;
        self
    }

    /// Sets the tick interval.
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// Tick interval as a [`Duration`].
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Whether `time` lies inside the admissible window.
    pub fn accepts_time(&self, time: u32) -> bool {
        (self.earliest_time..=self.latest_time).contains(&time)
    }
}

impl Default for SlideShowConfig {
    fn default() -> Self {
        Self::new()
    }
}
