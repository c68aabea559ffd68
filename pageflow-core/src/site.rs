use crate::carousel::{Carousel, Hover, PauseSource};
use crate::config::{CarouselConfig, NavConfig};
use crate::host::{Scheduler, Timer, View};
use crate::input::{Handling, Key, WheelInput};
use crate::navigator::Navigator;
use crate::sections::SectionList;

/// Everything interactive on the page: the section navigator plus the
/// optional carousel. The shell forwards raw input here and never reaches
/// into controller state directly.
pub struct Site {
    nav: Navigator,
    carousel: Option<Carousel>,
    /// Index of the section hosting the carousel, when both exist.
    carousel_section: Option<usize>,
}

impl Site {
    /// `carousel` is `None` when the page has no slider.
    pub fn new(sections: SectionList, nav_cfg: NavConfig, carousel: Option<CarouselConfig>) -> Self {
        let carousel_section = carousel
            .as_ref()
            .and_then(|c| c.section.as_deref())
            .and_then(|id| sections.index_of(id));
        Self {
            nav: Navigator::new(sections, nav_cfg),
            carousel: carousel.and_then(Carousel::new),
            carousel_section,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn load<H: View + Scheduler>(&mut self, host: &mut H) {
        self.nav.load(host);
        if let Some(c) = self.carousel.as_mut() {
            c.init(host);
        }
    }

    fn carousel_active(&self) -> bool {
        self.carousel.is_some() && self.carousel_section == Some(self.nav.current())
    }

    pub fn on_wheel<H: View + Scheduler>(&mut self, input: WheelInput, now_ms: f64, host: &mut H) -> Handling {
        self.nav.on_wheel(input, now_ms, host)
    }

    pub fn on_key<H: View + Scheduler>(&mut self, key: Key, host: &mut H) -> Handling {
        if self.nav.is_transitioning() {
            return Handling::Ignored;
        }
        if self.carousel_active() {
            if let Some(c) = self.carousel.as_mut() {
                match key {
                    Key::ArrowLeft => {
                        c.prev(host);
                        return Handling::Consumed;
                    }
                    Key::ArrowRight => {
                        c.next(host);
                        return Handling::Consumed;
                    }
                    _ => {}
                }
            }
        }
        self.nav.on_key(key, host)
    }

    pub fn on_touch_start(&mut self, y: f64, now_ms: f64) {
        self.nav.on_touch_start(y, now_ms);
    }

    pub fn on_touch_end<H: View + Scheduler>(&mut self, y: f64, now_ms: f64, host: &mut H) -> bool {
        self.nav.on_touch_end(y, now_ms, host)
    }

    pub fn on_link<H: View + Scheduler>(&mut self, href: &str, host: &mut H) -> bool {
        self.nav.on_link(href, host)
    }

    pub fn on_popstate<H: View>(&mut self, host: &mut H) {
        self.nav.on_popstate(host);
    }

    pub fn on_resize<H: Scheduler>(&mut self, host: &mut H) {
        self.nav.on_resize(host);
    }

    pub fn on_hover<H: Scheduler>(&mut self, source: PauseSource, hover: Hover, host: &mut H) {
        if let Some(c) = self.carousel.as_mut() {
            c.on_hover(source, hover, host);
        }
    }

    pub fn next_slide<H: View>(&mut self, host: &mut H) {
        if let Some(c) = self.carousel.as_mut() {
            c.next(host);
        }
    }

    pub fn prev_slide<H: View>(&mut self, host: &mut H) {
        if let Some(c) = self.carousel.as_mut() {
            c.prev(host);
        }
    }

    pub fn go_to_slide<H: View>(&mut self, index: usize, host: &mut H) {
        if let Some(c) = self.carousel.as_mut() {
            c.go_to(index, host);
        }
    }

    pub fn on_timer<H: View + Scheduler>(&mut self, timer: Timer, host: &mut H) {
        let handled = match timer {
            Timer::SectionSettle | Timer::WheelReset | Timer::ResizeSettle => self.nav.on_timer(timer, host),
            Timer::SlideAdvance | Timer::SlideResume => match self.carousel.as_mut() {
                Some(c) => c.on_timer(timer, host),
                None => false,
            },
        };
        if !handled {
            log::debug!("Stray timer {timer:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ScrollMode;
    use crate::testing::FakeHost;

    fn site(with_carousel: bool) -> Site {
        Site::new(
            SectionList::new(["home", "about", "portfolio", "contact"]),
            NavConfig::default(),
            with_carousel.then(CarouselConfig::default),
        )
    }

    fn advance(site: &mut Site, host: &mut FakeHost, ms: f64) {
        host.advance(ms, |h, t| site.on_timer(t, h));
    }

    #[test]
    fn test_arrows_drive_carousel_on_its_section() {
        let mut site = site(true);
        let mut host = FakeHost::with_fragment("portfolio");
        site.load(&mut host);
        assert_eq!(site.navigator().current(), 2);

        assert!(site.on_key(Key::ArrowRight, &mut host).consumed());
        assert!(site.on_key(Key::ArrowRight, &mut host).consumed());
        assert_eq!(site.carousel().map(|c| c.current()), Some(2));
        assert!(site.on_key(Key::ArrowLeft, &mut host).consumed());
        assert_eq!(site.carousel().map(|c| c.current()), Some(1));
        assert_eq!(site.navigator().current(), 2);
    }

    #[test]
    fn test_arrows_ignored_elsewhere() {
        let mut site = site(true);
        let mut host = FakeHost::new();
        site.load(&mut host);
        assert_eq!(site.on_key(Key::ArrowRight, &mut host), Handling::Ignored);
        assert_eq!(site.carousel().map(|c| c.current()), Some(0));
    }

    #[test]
    fn test_arrows_ignored_without_slider() {
        let mut site = site(false);
        let mut host = FakeHost::with_fragment("portfolio");
        site.load(&mut host);
        assert!(site.carousel().is_none());
        assert_eq!(site.on_key(Key::ArrowLeft, &mut host), Handling::Ignored);
    }

    #[test]
    fn test_carousel_keys_respect_transition_gate() {
        let mut site = site(true);
        let mut host = FakeHost::new();
        site.load(&mut host);
        assert!(site.on_link("#portfolio", &mut host));
        assert_eq!(site.on_key(Key::ArrowRight, &mut host), Handling::Ignored);
        advance(&mut site, &mut host, 500.0);
        assert!(site.on_key(Key::ArrowRight, &mut host).consumed());
        assert_eq!(site.carousel().map(|c| c.current()), Some(1));
    }

    #[test]
    fn test_carousel_and_navigator_run_side_by_side() {
        let mut site = site(true);
        let mut host = FakeHost::new();
        site.load(&mut host);
        site.on_key(Key::ArrowDown, &mut host);
        advance(&mut site, &mut host, 4000.0);
        assert!(!site.navigator().is_transitioning());
        assert_eq!(site.navigator().current(), 1);
        assert_eq!(site.carousel().map(|c| c.current()), Some(1));
        assert_eq!(host.scrolls, vec![(0, ScrollMode::Instant), (1, ScrollMode::Smooth)]);
    }

    #[test]
    fn test_hover_without_carousel_is_noop() {
        let mut site = site(false);
        let mut host = FakeHost::new();
        site.on_hover(PauseSource::Container, Hover::Leave, &mut host);
        site.next_slide(&mut host);
        assert_eq!(host.pending_count(), 0);
        assert!(host.slides.is_empty());
    }
}
