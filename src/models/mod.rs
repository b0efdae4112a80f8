//! Scheduling domain models.
//!
//! The heap and queue layers are generic over any totally ordered type.
//! This module provides the entity the slide scheduler feeds them.
//!
//! # Domain Mappings
//!
//! | u-slideshow | Presentation | Broadcast | Signage |
//! |-------------|--------------|-----------|---------|
//! | Slide | Slide | Caption | Screen message |
//! | display_time | Talk second | Cue time | Rotation slot |

mod slide;

pub use slide::Slide;
