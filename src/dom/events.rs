//! Event registration. Every listener translates the DOM event into a core
//! input and hands it to the mounted `Site`; nothing here holds state.

use std::cell::RefCell;
use leptos::ev;
use leptos::prelude::{document, window, window_event_listener, WindowListenerHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, KeyboardEvent, TouchEvent, WheelEvent};
use pageflow_core::{CarouselConfig, DeltaMode, Hover, Key, PauseSource, WheelInput};
use crate::config::Markup;
use crate::dom::{listen, now_ms, query_all, with_page};

thread_local! {
    static WINDOW_LISTENERS: RefCell<Vec<WindowListenerHandle>> = const { RefCell::new(Vec::new()) };
    static WHEEL_HANDLER: RefCell<Option<Closure<dyn FnMut(WheelEvent)>>> = const { RefCell::new(None) };
}

pub fn register(markup: &Markup, carousel: &CarouselConfig) {
    register_wheel();
    register_window();
    register_links(markup);
    register_carousel(markup, carousel);
}

// ── Window input ──────────────────────────────────────────────────────────────

/// Wheel needs `passive: false` to cancel native scrolling, which the window
/// listener helper cannot express.
fn register_wheel() {
    let handler = Closure::<dyn FnMut(WheelEvent)>::new(move |e: WheelEvent| {
        let input = WheelInput {
            delta_y: e.delta_y(),
            mode: DeltaMode::from_dom(e.delta_mode()),
        };
        let handled = with_page(|site, host| site.on_wheel(input, now_ms(), host));
        if handled.is_some_and(|h| h.consumed()) {
            e.prevent_default();
        }
    });

    let opts = AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Err(e) = window().add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        handler.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::error!("Failed to listen for wheel: {e:?}");
        return;
    }
    WHEEL_HANDLER.with(|h| *h.borrow_mut() = Some(handler));
}

fn first_touch_y(e: &TouchEvent) -> Option<f64> {
    e.changed_touches().get(0).map(|t| t.screen_y() as f64)
}

fn register_window() {
    let handles = vec![
        window_event_listener(ev::keydown, |e: KeyboardEvent| {
            let Some(key) = Key::parse(&e.key()) else { return };
            let handled = with_page(|site, host| site.on_key(key, host));
            if handled.is_some_and(|h| h.consumed()) {
                e.prevent_default();
            }
        }),
        window_event_listener(ev::touchstart, |e: TouchEvent| {
            let Some(y) = first_touch_y(&e) else { return };
            with_page(|site, _| site.on_touch_start(y, now_ms()));
        }),
        window_event_listener(ev::touchend, |e: TouchEvent| {
            let Some(y) = first_touch_y(&e) else { return };
            with_page(|site, host| site.on_touch_end(y, now_ms(), host));
        }),
        window_event_listener(ev::resize, |_| {
            with_page(|site, host| site.on_resize(host));
        }),
        window_event_listener(ev::popstate, |_| {
            with_page(|site, host| site.on_popstate(host));
        }),
    ];
    WINDOW_LISTENERS.with(|l| l.borrow_mut().extend(handles));
}

// ── In-page links ─────────────────────────────────────────────────────────────

fn register_links(markup: &Markup) {
    let anchors = query_all(document().query_selector_all(&markup.anchor_selector), &markup.anchor_selector);
    for anchor in &anchors {
        let link = anchor.clone();
        listen(anchor, "click", move |e: Event| {
            e.prevent_default();
            let Some(href) = link.get_attribute("href") else { return };
            with_page(|site, host| site.on_link(&href, host));
        });
    }
    log::debug!("Wired {} in-page links", anchors.len());
}

// ── Carousel controls and pause sources ───────────────────────────────────────

fn watch_hover(el: &Element, source: PauseSource) {
    listen(el, "mouseenter", move |_| {
        with_page(|site, host| site.on_hover(source, Hover::Enter, host));
    });
    listen(el, "mouseleave", move |_| {
        with_page(|site, host| site.on_hover(source, Hover::Leave, host));
    });
}

fn register_carousel(markup: &Markup, carousel: &CarouselConfig) {
    let doc = document();
    let Some(slider) = doc.get_element_by_id(&markup.slider_id) else { return };

    if let Some(container) = slider.parent_element() {
        watch_hover(&container, PauseSource::Container);
    }
    if let Some(section) = carousel.section.as_deref().and_then(|id| doc.get_element_by_id(id)) {
        watch_hover(&section, PauseSource::Section);
    }
    let slides = query_all(doc.query_selector_all(&markup.slide_selector), &markup.slide_selector);
    for (i, slide) in slides.iter().enumerate() {
        watch_hover(slide, PauseSource::Slide(i));
    }

    // Clicks are wired only when both buttons exist.
    let prev = doc.get_element_by_id(&markup.prev_id);
    let next = doc.get_element_by_id(&markup.next_id);
    if let (Some(prev), Some(next)) = (&prev, &next) {
        listen(prev, "click", |_| {
            with_page(|site, host| site.prev_slide(host));
        });
        listen(next, "click", |_| {
            with_page(|site, host| site.next_slide(host));
        });
    }
    if let Some(prev) = &prev {
        watch_hover(prev, PauseSource::Prev);
    }
    if let Some(next) = &next {
        watch_hover(next, PauseSource::Next);
    }

    let dots = query_all(doc.query_selector_all(&markup.dot_selector), &markup.dot_selector);
    for (i, dot) in dots.iter().enumerate() {
        listen(dot, "click", move |_| {
            with_page(|site, host| site.go_to_slide(i, host));
        });
        watch_hover(dot, PauseSource::Dot(i));
    }
    log::debug!("Carousel wired: {} slides, {} dots", slides.len(), dots.len());
}
