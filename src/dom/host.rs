use std::collections::HashMap;
use leptos::prelude::{
    document, set_interval_with_handle, set_timeout_with_handle, window, IntervalHandle, TimeoutHandle,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use pageflow_core::{Delay, Scheduler, ScrollMode, Timer, View};
use crate::config::Markup;
use crate::dom::{deliver_timer, query_all};

enum TimerHandle {
    Once(TimeoutHandle),
    Every(IntervalHandle),
}

impl TimerHandle {
    fn clear(&self) {
        match self {
            TimerHandle::Once(h) => h.clear(),
            TimerHandle::Every(h) => h.clear(),
        }
    }
}

/// The live page as seen by the controllers.
pub struct DomHost {
    markup: Markup,
    sections: Vec<Element>,
    section_ids: Vec<String>,
    nav_links: Vec<Element>,
    slider: Option<HtmlElement>,
    dots: Vec<HtmlElement>,
    timers: HashMap<Timer, TimerHandle>,
}

impl DomHost {
    /// Collect the elements the host renders into. Sections without a
    /// unique id are skipped so element and id lists stay index-aligned.
    pub fn discover(markup: &Markup) -> Self {
        let doc = document();

        let mut sections = Vec::new();
        let mut section_ids: Vec<String> = Vec::new();
        for el in query_all(doc.query_selector_all(&markup.section_selector), &markup.section_selector) {
            let id = el.id();
            if id.is_empty() || section_ids.contains(&id) {
                log::debug!("Skipping section without a unique id");
                continue;
            }
            section_ids.push(id);
            sections.push(el);
        }

        let nav_links = query_all(doc.query_selector_all(&markup.nav_link_selector), &markup.nav_link_selector);
        let slider = doc
            .get_element_by_id(&markup.slider_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let dots = query_all(doc.query_selector_all(&markup.dot_selector), &markup.dot_selector)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();

        Self {
            markup: markup.clone(),
            sections,
            section_ids,
            nav_links,
            slider,
            dots,
            timers: HashMap::new(),
        }
    }

    pub fn section_ids(&self) -> &[String] {
        &self.section_ids
    }

    pub fn has_slider(&self) -> bool {
        self.slider.is_some()
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    /// Forget a one-shot handle whose callback is running now.
    pub fn expire(&mut self, timer: Timer) {
        if matches!(self.timers.get(&timer), Some(TimerHandle::Once(_))) {
            self.timers.remove(&timer);
        }
    }
}

impl Scheduler for DomHost {
    fn schedule(&mut self, timer: Timer, delay: Delay) {
        self.cancel(timer);
        let handle = match delay {
            Delay::Once(d) => set_timeout_with_handle(move || deliver_timer(timer), d).map(TimerHandle::Once),
            Delay::Every(d) => set_interval_with_handle(move || deliver_timer(timer), d).map(TimerHandle::Every),
        };
        match handle {
            Ok(h) => {
                self.timers.insert(timer, h);
            }
            Err(e) => log::error!("Failed to schedule {timer:?}: {e:?}"),
        }
    }

    fn cancel(&mut self, timer: Timer) {
        if let Some(h) = self.timers.remove(&timer) {
            h.clear();
        }
    }
}

impl View for DomHost {
    fn scroll_to_section(&mut self, index: usize, mode: ScrollMode) {
        let Some(el) = self.sections.get(index) else { return };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(match mode {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Auto,
        });
        opts.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }

    fn highlight_section(&mut self, id: &str) {
        let target = format!("#{id}");
        let active = &self.markup.nav_active_class;
        let idle = &self.markup.nav_idle_class;
        for link in &self.nav_links {
            let classes = link.class_list();
            let is_current = link.get_attribute("href").as_deref() == Some(target.as_str());
            let (on, off) = if is_current { (active, idle) } else { (idle, active) };
            let _ = classes.remove_1(off);
            let _ = classes.add_1(on);
        }
    }

    fn location_fragment(&self) -> Option<String> {
        let hash = window().location().hash().ok()?;
        let id = hash.strip_prefix('#').unwrap_or(&hash);
        (!id.is_empty()).then(|| id.to_string())
    }

    fn replace_fragment(&mut self, id: &str) {
        let url = format!("#{id}");
        let result = window()
            .history()
            .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = result {
            log::warn!("Failed to update location fragment: {e:?}");
        }
    }

    fn show_slide(&mut self, index: usize) {
        let Some(slider) = &self.slider else { return };
        let offset = format!("translateX(-{}%)", index * 100);
        if let Err(e) = slider.style().set_property("transform", &offset) {
            log::warn!("Failed to move slider: {e:?}");
        }

        let active = &self.markup.dot_active_class;
        let idle = &self.markup.dot_idle_class;
        for (i, dot) in self.dots.iter().enumerate() {
            let classes = dot.class_list();
            let (on, off, scale) = if i == index {
                (active, idle, "scale(1.3)")
            } else {
                (idle, active, "scale(1)")
            };
            let _ = classes.remove_1(off);
            let _ = classes.add_1(on);
            let _ = dot.style().set_property("transform", scale);
        }
    }
}
