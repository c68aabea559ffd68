//! Auto-advancing slide carousel.
//!
//! The slide index cycles through `[0, slide_count)`. A repeating
//! `SlideAdvance` timer moves it forward while no pause source is hovered;
//! once the last hovered source is left, auto-advance restarts after the
//! `SlideResume` debounce.

use std::collections::BTreeSet;
use crate::config::CarouselConfig;
use crate::host::{Delay, Scheduler, Timer, View};

/// Elements whose hover suppresses auto-advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PauseSource {
    Container,
    Section,
    Slide(usize),
    Prev,
    Next,
    Dot(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hover {
    Enter,
    Leave,
}

pub struct Carousel {
    cfg: CarouselConfig,
    current: usize,
    /// True iff the `SlideAdvance` timer is scheduled.
    advancing: bool,
    hovered: BTreeSet<PauseSource>,
    resume_pending: bool,
}

impl Carousel {
    /// `None` when the config describes no slides.
    pub fn new(cfg: CarouselConfig) -> Option<Self> {
        if cfg.slide_count == 0 {
            log::warn!("Carousel configured with zero slides; disabled");
            return None;
        }
        Some(Self {
            cfg,
            current: 0,
            advancing: false,
            hovered: BTreeSet::new(),
            resume_pending: false,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.cfg.slide_count
    }

    pub fn is_advancing(&self) -> bool {
        self.advancing
    }

    pub fn is_paused(&self) -> bool {
        !self.hovered.is_empty()
    }

    pub fn resume_pending(&self) -> bool {
        self.resume_pending
    }

    /// Render the initial slide and begin auto-advance.
    pub fn init<H: View + Scheduler>(&mut self, host: &mut H) {
        host.show_slide(self.current);
        self.start(host);
    }

    pub fn next<H: View>(&mut self, host: &mut H) {
        self.current = (self.current + 1) % self.cfg.slide_count;
        self.render(host);
    }

    pub fn prev<H: View>(&mut self, host: &mut H) {
        let n = self.cfg.slide_count;
        self.current = (self.current + n - 1) % n;
        self.render(host);
    }

    /// Jump to slide `index`. Out-of-range indices are ignored.
    pub fn go_to<H: View>(&mut self, index: usize, host: &mut H) -> bool {
        if index >= self.cfg.slide_count {
            log::debug!("Ignoring slide {index}: only {} slides", self.cfg.slide_count);
            return false;
        }
        self.current = index;
        self.render(host);
        true
    }

    fn render<H: View>(&self, host: &mut H) {
        log::trace!("Showing slide {}", self.current);
        host.show_slide(self.current);
    }

    // ── Auto-advance ──────────────────────────────────────────────────────────

    /// Begin auto-advance. No-op while already running.
    pub fn start<H: Scheduler>(&mut self, host: &mut H) {
        if self.advancing {
            return;
        }
        host.schedule(Timer::SlideAdvance, Delay::Every(self.cfg.interval()));
        self.advancing = true;
    }

    pub fn stop<H: Scheduler>(&mut self, host: &mut H) {
        if self.advancing {
            host.cancel(Timer::SlideAdvance);
            self.advancing = false;
        }
    }

    pub fn on_hover<H: Scheduler>(&mut self, source: PauseSource, hover: Hover, host: &mut H) {
        match hover {
            Hover::Enter => {
                self.hovered.insert(source);
                self.cancel_resume(host);
                self.stop(host);
            }
            Hover::Leave => {
                self.hovered.remove(&source);
                if self.hovered.is_empty() {
                    self.cancel_resume(host);
                    host.schedule(Timer::SlideResume, Delay::Once(self.cfg.resume_delay()));
                    self.resume_pending = true;
                }
            }
        }
    }

    fn cancel_resume<H: Scheduler>(&mut self, host: &mut H) {
        if self.resume_pending {
            host.cancel(Timer::SlideResume);
            self.resume_pending = false;
        }
    }

    /// Deliver one of the carousel's timers. Returns false for timers it does
    /// not own.
    pub fn on_timer<H: View + Scheduler>(&mut self, timer: Timer, host: &mut H) -> bool {
        match timer {
            Timer::SlideAdvance => {
                if self.advancing {
                    self.next(host);
                }
            }
            Timer::SlideResume => {
                self.resume_pending = false;
                if self.hovered.is_empty() {
                    self.start(host);
                }
            }
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeHost;

    fn carousel() -> Carousel {
        Carousel::new(CarouselConfig::default()).unwrap()
    }

    fn advance(c: &mut Carousel, host: &mut FakeHost, ms: f64) {
        host.advance(ms, |h, t| {
            c.on_timer(t, h);
        });
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut c = carousel();
        let mut host = FakeHost::new();
        c.prev(&mut host);
        assert_eq!(c.current(), 2);
        c.next(&mut host);
        assert_eq!(c.current(), 0);
        for _ in 0..7 {
            c.next(&mut host);
        }
        assert_eq!(c.current(), 7 % 3);
        assert_eq!(host.slides, vec![2, 0, 1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut c = carousel();
        let mut host = FakeHost::new();
        assert!(c.go_to(2, &mut host));
        assert!(!c.go_to(3, &mut host));
        assert_eq!(c.current(), 2);
        assert_eq!(host.slides, vec![2]);
    }

    #[test]
    fn test_zero_slides_disables() {
        assert!(Carousel::new(CarouselConfig { slide_count: 0, ..CarouselConfig::default() }).is_none());
    }

    #[test]
    fn test_auto_advance_ticks() {
        let mut c = carousel();
        let mut host = FakeHost::new();
        c.init(&mut host);
        assert_eq!(host.slides, vec![0]);
        advance(&mut c, &mut host, 4000.0);
        assert_eq!(c.current(), 1);
        advance(&mut c, &mut host, 8000.0);
        assert_eq!(c.current(), 0);
        assert_eq!(host.slides, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_start_twice_is_idempotent() {
        let mut c = carousel();
        let mut host = FakeHost::new();
        c.start(&mut host);
        advance(&mut c, &mut host, 1000.0);
        c.start(&mut host);
        assert_eq!(host.pending_count(), 1);
        // The first schedule is kept: the tick still lands at 4000.
        advance(&mut c, &mut host, 3000.0);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_hover_pauses_and_resumes_after_debounce() {
        let mut c = carousel();
        let mut host = FakeHost::new();
        c.init(&mut host);

        advance(&mut c, &mut host, 3000.0);
        c.on_hover(PauseSource::Slide(0), Hover::Enter, &mut host);
        assert!(!c.is_advancing());
        advance(&mut c, &mut host, 7000.0);
        assert_eq!(c.current(), 0);

        c.on_hover(PauseSource::Slide(0), Hover::Leave, &mut host);
        assert!(c.resume_pending());
        advance(&mut c, &mut host, 199.0);
        assert!(!c.is_advancing());
        advance(&mut c, &mut host, 1.0);
        assert!(c.is_advancing());

        advance(&mut c, &mut host, 4000.0);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn test_moving_between_targets_stays_paused() {
        let mut c = carousel();
        let mut host = FakeHost::new();
        c.init(&mut host);

        c.on_hover(PauseSource::Section, Hover::Enter, &mut host);
        c.on_hover(PauseSource::Container, Hover::Enter, &mut host);
        c.on_hover(PauseSource::Next, Hover::Enter, &mut host);
        c.on_hover(PauseSource::Next, Hover::Leave, &mut host);
        assert!(c.is_paused());
        assert!(!c.resume_pending());

        c.on_hover(PauseSource::Container, Hover::Leave, &mut host);
        c.on_hover(PauseSource::Section, Hover::Leave, &mut host);
        assert!(c.resume_pending());

        // Pointer comes straight back onto a dot before the debounce expires.
        advance(&mut c, &mut host, 100.0);
        c.on_hover(PauseSource::Dot(1), Hover::Enter, &mut host);
        assert!(!c.resume_pending());
        advance(&mut c, &mut host, 10_000.0);
        assert!(!c.is_advancing());
        assert_eq!(c.current(), 0);
        assert_eq!(host.pending_count(), 0);
    }

    #[test]
    fn test_at_most_one_timer_per_concern() {
        let mut c = carousel();
        let mut host = FakeHost::new();
        c.init(&mut host);
        for i in 0..5 {
            c.on_hover(PauseSource::Dot(i), Hover::Enter, &mut host);
            c.on_hover(PauseSource::Dot(i), Hover::Leave, &mut host);
            assert!(host.pending_count() <= 2);
        }
        assert!(host.is_pending(Timer::SlideResume));
        assert!(!host.is_pending(Timer::SlideAdvance));
    }

    #[test]
    fn test_manual_navigation_during_pause() {
        let mut c = carousel();
        let mut host = FakeHost::new();
        c.init(&mut host);
        c.on_hover(PauseSource::Prev, Hover::Enter, &mut host);
        c.prev(&mut host);
        assert_eq!(c.current(), 2);
        assert!(!c.is_advancing());
    }
}
