//! Headless slide show clock.
//!
//! # Algorithm
//!
//! 1. `start()` arms the show at clock 0.
//! 2. Every `tick()` advances the clock by one second.
//! 3. If the head slide is due, it is removed and put on display.
//! 4. Once the queue is empty the show stops and the clock resets.
//!
//! The caller owns real time: it calls `tick()` every
//! [`SlideShowConfig::tick_interval`](super::SlideShowConfig::tick_interval).

use tracing::debug;

use super::SlideShowQueue;
use crate::models::Slide;

/// Result of one clock tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The show is not running.
    Stopped,
    /// The head slide is not due yet.
    Waiting,
    /// A slide was taken off the queue and is now on display.
    Displayed(Slide),
    /// The queue ran empty; the show stopped and the clock was reset.
    Finished,
}

/// Drives a [`SlideShowQueue`] from a one-second clock.
///
/// # Example
/// ```
/// use u_slideshow::scheduler::{SlideShow, SlideShowQueue, TickOutcome};
///
/// let mut slides = SlideShowQueue::new();
/// slides.add_slide("Hello", 2);
///
/// let mut show = SlideShow::new(slides);
/// show.start();
/// assert_eq!(show.tick(), TickOutcome::Waiting);
/// assert!(matches!(show.tick(), TickOutcome::Displayed(_)));
/// assert_eq!(show.current_text(), Some("Hello"));
/// assert_eq!(show.tick(), TickOutcome::Finished);
/// ```
#[derive(Debug, Clone)]
pub struct SlideShow {
    slides: SlideShowQueue,
    clock: u32,
    running: bool,
    current: Option<Slide>,
}

impl SlideShow {
    /// Creates a stopped show over `slides`.
    pub fn new(slides: SlideShowQueue) -> Self {
        Self {
            slides,
            clock: 0,
            running: false,
            current: None,
        }
    }

    /// Starts the show from clock 0.
    pub fn start(&mut self) {
        self.clock = 0;
        self.running = true;
        self.current = None;
    }

    /// Stops the show and resets the clock and display.
    pub fn stop(&mut self) {
        self.running = false;
        self.clock = 0;
        self.current = None;
    }

    /// Advances the clock by one second and updates the display.
    ///
    /// A head slide whose time has already passed is shown on the next
    /// tick rather than blocking the queue.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Stopped;
        }
        self.clock += 1;

        let due = match self.slides.peek_slide() {
            None => {
                debug!(clock = self.clock, "slide queue drained, stopping show");
                self.stop();
                return TickOutcome::Finished;
            }
            Some(head) => head.is_due(self.clock),
        };
        if !due {
            return TickOutcome::Waiting;
        }

        match self.slides.display_slide() {
            Some(slide) => {
                debug!(clock = self.clock, time = slide.display_time, "displaying slide");
                self.current = Some(slide.clone());
                TickOutcome::Displayed(slide)
            }
            None => TickOutcome::Waiting,
        }
    }

    /// Text of the slide on display.
    pub fn current_text(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.text.as_str())
    }

    /// Seconds elapsed since `start()`.
    pub fn clock(&self) -> u32 {
        self.clock
    }

    /// Whether the show is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The queue still waiting to be shown.
    pub fn slides(&self) -> &SlideShowQueue {
        &self.slides
    }

    /// Mutable access for adding slides between shows.
    pub fn slides_mut(&mut self) -> &mut SlideShowQueue {
        &mut self.slides
    }
}
