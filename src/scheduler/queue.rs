//! Bounded slide queue.

use tracing::debug;

use super::SlideShowConfig;
use crate::models::Slide;
use crate::queue::PriorityQueue;
use crate::validation::{validate_slide, ValidationResult};

/// A priority queue of slides sized for one show.
///
/// The head of the queue is always the slide with the earliest display
/// time. [`add_slide`](Self::add_slide) is a plain pass-through to the
/// underlying queue; [`try_add_slide`](Self::try_add_slide) checks the
/// input against the configuration first.
///
/// # Example
/// ```
/// use u_slideshow::scheduler::SlideShowQueue;
///
/// let mut slides = SlideShowQueue::new();
/// slides.add_slide("Outro", 9);
/// slides.add_slide("Intro", 1);
///
/// assert_eq!(slides.peek_slide().map(|s| s.text.as_str()), Some("Intro"));
/// assert_eq!(slides.display_slide().map(|s| s.display_time), Some(1));
/// assert_eq!(slides.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SlideShowQueue {
    slides: PriorityQueue<Slide>,
    config: SlideShowConfig,
}

impl SlideShowQueue {
    /// Creates a queue with room for [`MAXIMUM_LENGTH`](super::MAXIMUM_LENGTH) slides.
    pub fn new() -> Self {
        Self::with_config(SlideShowConfig::new())
    }

    /// Creates a queue sized by `config.max_slides`.
    pub fn with_config(config: SlideShowConfig) -> Self {
        Self {
            slides: PriorityQueue::new(config.max_slides),
            config,
        }
    }

    /// Builds a slide from its two fields and queues it.
    pub fn add_slide(&mut self, text: impl Into<String>, display_time: u32) {
        self.slides.insert(Slide::new(text, display_time));
    }

    /// Validates the input, then queues the slide.
    ///
    /// All failed checks are reported and nothing is queued on failure.
    pub fn try_add_slide(&mut self, text: &str, display_time: u32) -> ValidationResult {
        validate_slide(text, display_time, self, &self.config)?;
        debug!(display_time, "slide admitted");
        self.add_slide(text, display_time);
        Ok(())
    }

    /// Next slide to display, without removing it.
    pub fn peek_slide(&self) -> Option<&Slide> {
        self.slides.maximum()
    }

    /// Removes and returns the next slide to display.
    pub fn display_slide(&mut self) -> Option<Slide> {
        self.slides.extract_maximum()
    }

    /// Number of queued slides.
    pub fn len(&self) -> usize {
        self.slides.size()
    }

    /// Whether no slide is queued.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Whether the configured slide limit has been reached.
    pub fn is_full(&self) -> bool {
        self.len() >= self.config.max_slides
    }

    /// Whether a queued slide is already scheduled at `display_time`.
    pub fn has_display_time(&self, display_time: u32) -> bool {
        self.slides.iter().any(|s| s.display_time == display_time)
    }

    /// The underlying priority queue.
    pub fn slides_queue(&self) -> &PriorityQueue<Slide> {
        &self.slides
    }

    /// The active configuration.
    pub fn config(&self) -> &SlideShowConfig {
        &self.config
    }
}

impl Default for SlideShowQueue {
    fn default() -> Self {
        Self::new()
    }
}
