//! Section navigation state machine.
//!
//! `Navigator` owns the current section index and the transition gate. It
//! turns wheel, keyboard, touch, link and history input into at most one
//! in-flight section transition, and keeps the active-link highlight and the
//! location fragment in step with the current section.

use crate::classify::{classify, DeviceClass};
use crate::config::NavConfig;
use crate::host::{Delay, Scheduler, ScrollMode, Timer, View};
use crate::input::{Direction, Handling, Key, WheelInput};
use crate::sections::SectionList;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A transition is in flight; every request is dropped until the settle
    /// timer fires.
    Transitioning,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct TouchStart {
    y: f64,
    at_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    pub current: usize,
    pub phase: Phase,
    pub accumulator: f64,
    last_wheel_ms: f64,
    last_swipe_ms: f64,
    touch_start: Option<TouchStart>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: 0,
            phase: Phase::Idle,
            accumulator: 0.0,
            // Infinitely far in the past, so the first event never looks like
            // part of a burst.
            last_wheel_ms: f64::NEG_INFINITY,
            last_swipe_ms: f64::NEG_INFINITY,
            touch_start: None,
        }
    }
}

pub struct Navigator {
    sections: SectionList,
    cfg: NavConfig,
    state: NavigationState,
}

impl Navigator {
    pub fn new(sections: SectionList, cfg: NavConfig) -> Self {
        Self { sections, cfg, state: NavigationState::default() }
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current(&self) -> usize {
        self.state.current
    }

    pub fn current_id(&self) -> Option<&str> {
        self.sections.id(self.state.current)
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.phase == Phase::Transitioning
    }

    pub fn accumulator(&self) -> f64 {
        self.state.accumulator
    }

    // ── Core transitions ──────────────────────────────────────────────────────

    /// Restore the section named by the location fragment (falling back to
    /// the first section) and jump to it without animating.
    pub fn load<H: View + Scheduler>(&mut self, host: &mut H) {
        let restored = host
            .location_fragment()
            .and_then(|f| self.sections.resolve_fragment(&f));
        self.state.current = restored.unwrap_or(0);
        if self.sections.is_empty() {
            return;
        }
        self.refresh_highlight(host);
        self.sync_fragment(host);
        host.scroll_to_section(self.state.current, ScrollMode::Instant);
        log::debug!("Loaded at section {} ({:?})", self.state.current, self.current_id());
    }

    /// Request a transition to `index`. Accepted only when idle and in range.
    pub fn request<H: View + Scheduler>(&mut self, index: usize, mode: ScrollMode, host: &mut H) -> bool {
        if index >= self.sections.len() {
            log::debug!("Dropping request for section {index}: out of range");
            return false;
        }
        if self.is_transitioning() {
            log::trace!("Dropping request for section {index}: transition in flight");
            return false;
        }

        self.state.phase = Phase::Transitioning;
        self.state.current = index;
        host.scroll_to_section(index, mode);
        self.refresh_highlight(host);
        self.sync_fragment(host);

        host.cancel(Timer::SectionSettle);
        host.schedule(Timer::SectionSettle, Delay::Once(self.cfg.settle()));
        log::debug!("Navigating to section {index} ({:?})", self.current_id());
        true
    }

    /// Step one section in `dir`. No-op at either end of the list.
    pub fn step<H: View + Scheduler>(&mut self, dir: Direction, host: &mut H) -> bool {
        let target = match dir {
            Direction::Forward => Some(self.state.current + 1).filter(|&i| i < self.sections.len()),
            Direction::Backward => self.state.current.checked_sub(1),
        };
        match target {
            Some(i) => self.request(i, ScrollMode::Smooth, host),
            None => false,
        }
    }

    fn refresh_highlight<H: View>(&self, host: &mut H) {
        if let Some(id) = self.current_id() {
            host.highlight_section(id);
        }
    }

    fn sync_fragment<H: View>(&self, host: &mut H) {
        let Some(id) = self.current_id() else { return };
        if host.location_fragment().as_deref() != Some(id) {
            host.replace_fragment(id);
        }
    }

    // ── Input handlers ────────────────────────────────────────────────────────

    pub fn on_wheel<H: View + Scheduler>(&mut self, input: WheelInput, now_ms: f64, host: &mut H) -> Handling {
        if self.is_transitioning() || self.sections.is_empty() {
            return Handling::Ignored;
        }

        let since_last = now_ms - self.state.last_wheel_ms;
        match classify(input.delta_y, input.mode, since_last, &self.cfg.wheel) {
            DeviceClass::Trackpad => {
                self.state.accumulator += input.delta_y;
                host.cancel(Timer::WheelReset);
                host.schedule(Timer::WheelReset, Delay::Once(self.cfg.accumulator_reset()));

                if self.state.accumulator.abs() >= self.cfg.wheel.accumulate_threshold {
                    if let Some(dir) = Direction::from_sign(self.state.accumulator) {
                        if self.step(dir, host) {
                            self.state.accumulator = 0.0;
                        }
                    }
                }
            }
            DeviceClass::Wheel => {
                // Rate-limited notches leave the timestamp untouched.
                if since_last < self.cfg.wheel.notch_interval_ms {
                    log::trace!("Wheel notch suppressed ({since_last:.0} ms after previous)");
                    return Handling::Consumed;
                }
                if let Some(dir) = Direction::from_sign(input.delta_y) {
                    self.step(dir, host);
                }
            }
        }
        self.state.last_wheel_ms = now_ms;
        Handling::Consumed
    }

    /// Section keys. Arrow left/right are not section keys; see `Site::on_key`.
    pub fn on_key<H: View + Scheduler>(&mut self, key: Key, host: &mut H) -> Handling {
        if self.is_transitioning() {
            return Handling::Ignored;
        }
        match key {
            Key::ArrowDown | Key::PageDown | Key::Space => {
                self.step(Direction::Forward, host);
            }
            Key::ArrowUp | Key::PageUp => {
                self.step(Direction::Backward, host);
            }
            Key::Home => {
                self.request(0, ScrollMode::Smooth, host);
            }
            Key::End => {
                if let Some(last) = self.sections.last_index() {
                    self.request(last, ScrollMode::Smooth, host);
                }
            }
            Key::ArrowLeft | Key::ArrowRight => return Handling::Ignored,
        }
        Handling::Consumed
    }

    pub fn on_touch_start(&mut self, y: f64, now_ms: f64) {
        self.state.touch_start = Some(TouchStart { y, at_ms: now_ms });
    }

    /// Finish a touch at `y`. Returns true when it was recognised as a swipe
    /// and moved to a new section.
    pub fn on_touch_end<H: View + Scheduler>(&mut self, y: f64, now_ms: f64, host: &mut H) -> bool {
        if self.is_transitioning() {
            return false;
        }
        let Some(start) = self.state.touch_start else { return false };
        let swipe = &self.cfg.swipe;

        let duration = now_ms - start.at_ms;
        if now_ms - self.state.last_swipe_ms < swipe.cooldown_ms || duration > swipe.max_duration_ms {
            return false;
        }

        // Finger moving up (start below end) scrolls forward.
        let travel = start.y - y;
        if travel.abs() < swipe.min_distance {
            return false;
        }
        self.state.last_swipe_ms = now_ms;
        match Direction::from_sign(travel) {
            Some(dir) => self.step(dir, host),
            None => false,
        }
    }

    /// Follow a same-page link (`#id`). Unknown targets are ignored.
    pub fn on_link<H: View + Scheduler>(&mut self, href: &str, host: &mut H) -> bool {
        match self.sections.resolve_fragment(href) {
            Some(index) => self.request(index, ScrollMode::Smooth, host),
            None => {
                log::debug!("Link {href:?} does not name a section");
                false
            }
        }
    }

    /// Back/forward navigation: adopt the fragment's section without
    /// animating and without touching the transition gate.
    pub fn on_popstate<H: View>(&mut self, host: &mut H) {
        let Some(index) = host
            .location_fragment()
            .and_then(|f| self.sections.resolve_fragment(&f))
        else {
            return;
        };
        self.state.current = index;
        self.refresh_highlight(host);
    }

    pub fn on_resize<H: Scheduler>(&mut self, host: &mut H) {
        host.cancel(Timer::ResizeSettle);
        host.schedule(Timer::ResizeSettle, Delay::Once(self.cfg.resize_settle()));
    }

    /// Deliver one of the navigator's timers. Returns false for timers it
    /// does not own.
    pub fn on_timer<H: View + Scheduler>(&mut self, timer: Timer, host: &mut H) -> bool {
        match timer {
            Timer::SectionSettle => {
                self.state.phase = Phase::Idle;
            }
            Timer::WheelReset => {
                self.state.accumulator = 0.0;
            }
            Timer::ResizeSettle => {
                if self.is_transitioning() {
                    log::trace!("Resize re-align skipped: transition in flight");
                } else if !self.sections.is_empty() {
                    host.scroll_to_section(self.state.current, ScrollMode::Instant);
                    self.refresh_highlight(host);
                }
            }
            Timer::SlideAdvance | Timer::SlideResume => return false,
        }
        true
    }
}
