//! Tuning knobs for navigation and the carousel.
//!
//! Every struct deserializes with `#[serde(default)]`, so a page config only
//! has to name the values it overrides.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wheel thresholds shared by the classifier and the navigator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Deltas below this are always trackpad-style.
    pub small_delta: f64,
    /// Deltas below this are trackpad-style when they arrive in a burst.
    pub medium_delta: f64,
    /// Max gap (ms) between events that counts as a burst.
    pub burst_gap_ms: f64,
    /// Accumulated trackpad travel needed for one section step.
    pub accumulate_threshold: f64,
    /// Idle time (ms) after which the accumulator is zeroed.
    pub accumulator_reset_ms: u32,
    /// Min spacing (ms) between discrete wheel notches.
    pub notch_interval_ms: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            small_delta: 50.0,
            medium_delta: 120.0,
            burst_gap_ms: 80.0,
            accumulate_threshold: 250.0,
            accumulator_reset_ms: 120,
            notch_interval_ms: 150.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Min time (ms) between two recognised swipes.
    pub cooldown_ms: f64,
    /// Touches longer than this (ms) are not swipes.
    pub max_duration_ms: f64,
    /// Min vertical travel for a swipe.
    pub min_distance: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 250.0,
            max_duration_ms: 500.0,
            min_distance: 50.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// How long (ms) the navigator stays busy after accepting a request.
    pub settle_ms: u32,
    /// Resize debounce (ms) before the current section is re-aligned.
    pub resize_settle_ms: u32,
    pub wheel: WheelConfig,
    pub swipe: SwipeConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            settle_ms: 500,
            resize_settle_ms: 100,
            wheel: WheelConfig::default(),
            swipe: SwipeConfig::default(),
        }
    }
}

impl NavConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms as u64)
    }

    pub fn resize_settle(&self) -> Duration {
        Duration::from_millis(self.resize_settle_ms as u64)
    }

    pub fn accumulator_reset(&self) -> Duration {
        Duration::from_millis(self.wheel.accumulator_reset_ms as u64)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub slide_count: usize,
    /// Auto-advance period in ms.
    pub interval_ms: u32,
    /// Delay (ms) after the pointer leaves the last pause source before
    /// auto-advance resumes.
    pub resume_delay_ms: u32,
    /// Id of the section that hosts the carousel. Arrow left/right drive the
    /// carousel while this section is active.
    pub section: Option<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slide_count: 3,
            interval_ms: 4000,
            resume_delay_ms: 200,
            section: Some("portfolio".to_string()),
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms as u64)
    }

    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms as u64)
    }
}
