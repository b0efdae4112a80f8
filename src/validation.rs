//! Input validation for slides.
//!
//! Checks a slide request against the show configuration and the slides
//! already queued. Detects:
//! - Empty text
//! - Display times outside the configured window
//! - Two slides scheduled at the same second
//! - A queue that already holds the configured number of slides

use crate::scheduler::{SlideShowConfig, SlideShowQueue};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The slide text is empty or whitespace.
    EmptyText,
    /// The display time lies outside the configured window.
    TimeOutOfRange,
    /// Another slide is already scheduled at this time.
    DuplicateTime,
    /// The queue already holds the maximum number of slides.
    QueueFull,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a slide before it is queued.
///
/// Checks:
/// 1. Text is not blank
/// 2. `display_time` is inside `[earliest_time, latest_time]`
/// 3. No queued slide has the same display time
/// 4. The queue holds fewer than `max_slides` slides
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_slide(
    text: &str,
    display_time: u32,
    queue: &SlideShowQueue,
    config: &SlideShowConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    if text.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyText,
            "Slide text must not be empty",
        ));
    }

    if !config.accepts_time(display_time) {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOutOfRange,
            format!(
                "Display time {display_time} is outside {}..={}",
                config.earliest_time, config.latest_time
            ),
        ));
    } else if queue.has_display_time(display_time) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DuplicateTime,
            format!("Display time {display_time} is already taken"),
        ));
    }

    if queue.len() >= config.max_slides {
        errors.push(ValidationError::new(
            ValidationErrorKind::QueueFull,
            format!("Slide show already holds {} slides", config.max_slides),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
