//! Capabilities the controllers consume from whatever hosts them.
//!
//! The browser shell implements both traits over the DOM; tests use an
//! in-memory host with a virtual clock.

use std::time::Duration;

/// Every cancelable scheduled task. A host keeps at most one pending task per
/// variant; controllers cancel before rescheduling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Timer {
    /// Ends the navigator's transition window.
    SectionSettle,
    /// Zeroes the trackpad accumulator after inactivity.
    WheelReset,
    /// Re-aligns the current section once resizing stops.
    ResizeSettle,
    /// Repeating carousel auto-advance.
    SlideAdvance,
    /// Debounced restart of auto-advance after hover ends.
    SlideResume,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delay {
    Once(Duration),
    Every(Duration),
}

pub trait Scheduler {
    /// Arrange for `Timer` to be delivered back after `delay`. Replaces any
    /// pending task of the same kind.
    fn schedule(&mut self, timer: Timer, delay: Delay);
    /// Drop a pending task. No-op when none is pending.
    fn cancel(&mut self, timer: Timer);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    /// Animated; used for user-initiated navigation.
    Smooth,
    /// Jump; used on load and resize.
    Instant,
}

pub trait View {
    fn scroll_to_section(&mut self, index: usize, mode: ScrollMode);
    /// Mark the navigation link that points at `id` as active.
    fn highlight_section(&mut self, id: &str);
    /// Current location fragment without the leading `#`; `None` when empty.
    fn location_fragment(&self) -> Option<String>;
    /// Replace the fragment without adding a history entry.
    fn replace_fragment(&mut self, id: &str);
    fn show_slide(&mut self, index: usize);
}
