//! Wheel input classification: trackpad gestures vs mouse-wheel notches.

use crate::config::WheelConfig;

/// Unit of a wheel event's delta, as reported by the DOM `deltaMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeltaMode {
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    /// Map the DOM `WheelEvent.deltaMode` code. Unknown codes are treated as
    /// lines, the coarsest unit browsers commonly send for physical wheels.
    pub fn from_dom(code: u32) -> Self {
        match code {
            0 => DeltaMode::Pixel,
            2 => DeltaMode::Page,
            _ => DeltaMode::Line,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    /// Many small continuous deltas; handled by accumulation.
    Trackpad,
    /// Discrete notches; each one may step a section.
    Wheel,
}

/// Classify one wheel event.
///
/// `since_last_ms` is the time since the previous wheel event. An event is
/// trackpad-style if its magnitude is tiny, if it is moderate and arrives in a
/// burst, or if the device reports pixel deltas.
pub fn classify(delta_y: f64, mode: DeltaMode, since_last_ms: f64, cfg: &WheelConfig) -> DeviceClass {
    let abs = delta_y.abs();
    let tiny = abs < cfg.small_delta;
    let burst = abs < cfg.medium_delta && since_last_ms < cfg.burst_gap_ms;
    if tiny || burst || mode == DeltaMode::Pixel {
        DeviceClass::Trackpad
    } else {
        DeviceClass::Wheel
    }
}
