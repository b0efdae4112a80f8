//! Time-ordered slide scheduling.
//!
//! Binds the [`Slide`](crate::models::Slide) entity to a
//! [`PriorityQueue`](crate::queue::PriorityQueue) and drives it from a
//! one-second clock.
//!
//! # Components
//!
//! | Type | Role |
//! |------|------|
//! | `SlideShowConfig` | Slide limit, admissible time window, tick cadence |
//! | `SlideShowQueue` | Bounded slide queue, earliest display time first |
//! | `SlideShow` | Headless clock that pops slides as they fall due |
//!
//! Rendering and real timers belong to the caller; this module only decides
//! which slide is on display after each tick.

mod config;
mod queue;
mod show;

pub use config::SlideShowConfig;
pub use queue::SlideShowQueue;
pub use show::{SlideShow, TickOutcome};

/// Default number of slides a show holds.
pub const MAXIMUM_LENGTH: usize = 10;
