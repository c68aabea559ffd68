//! In-memory host with a virtual clock, for controller tests.

use std::collections::BTreeMap;
use std::time::Duration;
use crate::host::{Delay, Scheduler, ScrollMode, Timer, View};

#[derive(Default)]
pub struct FakeHost {
    pub now: f64,
    /// timer -> (due_ms, repeat period)
    pending: BTreeMap<Timer, (f64, Option<f64>)>,
    pub scrolls: Vec<(usize, ScrollMode)>,
    pub highlighted: Option<String>,
    pub fragment: Option<String>,
    pub fragment_writes: usize,
    pub slides: Vec<usize>,
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fragment(fragment: &str) -> Self {
        Self { fragment: Some(fragment.to_string()), ..Self::default() }
    }

    pub fn is_pending(&self, timer: Timer) -> bool {
        self.pending.contains_key(&timer)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Pop the earliest task due at or before `until`, moving the clock to
    /// its deadline. Repeating tasks are re-armed.
    fn pop_due(&mut self, until: f64) -> Option<Timer> {
        let (timer, due, period) = self
            .pending
            .iter()
            .filter(|(_, (due, _))| *due <= until)
            .min_by(|a, b| a.1 .0.partial_cmp(&b.1 .0).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(t, (due, period))| (*t, *due, *period))?;
        self.now = due;
        match period {
            Some(p) => {
                self.pending.insert(timer, (due + p, Some(p)));
            }
            None => {
                self.pending.remove(&timer);
            }
        }
        Some(timer)
    }

    /// Advance the clock by `delta_ms`, delivering every task that falls due
    /// on the way through `deliver`.
    pub fn advance(&mut self, delta_ms: f64, mut deliver: impl FnMut(&mut FakeHost, Timer)) {
        let target = self.now + delta_ms;
        while let Some(timer) = self.pop_due(target) {
            deliver(self, timer);
        }
        self.now = target;
    }
}

impl Scheduler for FakeHost {
    fn schedule(&mut self, timer: Timer, delay: Delay) {
        let entry = match delay {
            Delay::Once(d) => (self.now + ms(d), None),
            Delay::Every(d) => (self.now + ms(d), Some(ms(d))),
        };
        self.pending.insert(timer, entry);
    }

    fn cancel(&mut self, timer: Timer) {
        self.pending.remove(&timer);
    }
}

impl View for FakeHost {
    fn scroll_to_section(&mut self, index: usize, mode: ScrollMode) {
        self.scrolls.push((index, mode));
    }

    fn highlight_section(&mut self, id: &str) {
        self.highlighted = Some(id.to_string());
    }

    fn location_fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn replace_fragment(&mut self, id: &str) {
        self.fragment = Some(id.to_string());
        self.fragment_writes += 1;
    }

    fn show_slide(&mut self, index: usize) {
        self.slides.push(index);
    }
}
