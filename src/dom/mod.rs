pub mod events;
pub mod host;
pub mod menu;

use std::cell::RefCell;
use leptos::prelude::document;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement, NodeList};
use pageflow_core::{SectionList, Site, Timer};
use crate::config::{PageConfig, CONFIG_ELEMENT_ID};
use host::DomHost;

struct Page {
    site: Site,
    host: DomHost,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    /// Element listeners live as long as the page.
    static LISTENERS: RefCell<Vec<Closure<dyn FnMut(Event)>>> = const { RefCell::new(Vec::new()) };
}

/// Run `f` against the mounted page. Returns `None` before mounting or if
/// the page is already borrowed further up the stack.
pub(crate) fn with_page<R>(f: impl FnOnce(&mut Site, &mut DomHost) -> R) -> Option<R> {
    PAGE.with(|p| {
        let Ok(mut guard) = p.try_borrow_mut() else {
            log::warn!("Dropping re-entrant page event");
            return None;
        };
        let page = guard.as_mut()?;
        Some(f(&mut page.site, &mut page.host))
    })
}

pub(crate) fn deliver_timer(timer: Timer) {
    with_page(|site, host| {
        host.expire(timer);
        site.on_timer(timer, host);
    });
}

/// Milliseconds since the epoch, the clock every input timestamp uses.
pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub(crate) fn query_all(list: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    let list = match list {
        Ok(l) => l,
        Err(e) => {
            log::warn!("Bad selector {selector:?}: {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` to `target` for the page's lifetime.
pub(crate) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("Failed to listen for {event}: {e:?}");
        return;
    }
    LISTENERS.with(|l| l.borrow_mut().push(closure));
}

fn read_config() -> PageConfig {
    document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .map(|text| PageConfig::parse(&text))
        .unwrap_or_default()
}

/// Sections replace native scrolling: the document itself never scrolls,
/// only `<main>` overflows.
fn lock_page_scroll() {
    let doc = document();
    let mut targets: Vec<(HtmlElement, &str)> = Vec::new();
    if let Some(body) = doc.body() {
        targets.push((body, "hidden"));
    }
    if let Some(root) = doc.document_element().and_then(|el| el.dyn_into::<HtmlElement>().ok()) {
        targets.push((root, "hidden"));
    }
    if let Some(main) = doc
        .query_selector("main")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        targets.push((main, "visible"));
    }
    for (el, value) in targets {
        if let Err(e) = el.style().set_property("overflow", value) {
            log::warn!("Failed to set overflow: {e:?}");
        }
    }
}

/// Discover the page, build the controllers and wire every event source.
pub fn mount() {
    let already = PAGE.with(|p| p.borrow().is_some());
    if already {
        log::warn!("Page already mounted");
        return;
    }

    let config = read_config();
    log::set_max_level(config.log_level().to_level_filter());

    lock_page_scroll();
    menu::init(&config.markup);

    let host = DomHost::discover(&config.markup);
    let sections = SectionList::new(host.section_ids().iter().cloned());
    if sections.is_empty() {
        log::info!("No addressable sections; section navigation disabled");
    }

    let carousel = if host.has_slider() {
        if host.dot_count() > 0 && host.dot_count() != config.carousel.slide_count {
            log::warn!(
                "Carousel has {} dots but {} slides configured",
                host.dot_count(),
                config.carousel.slide_count
            );
        }
        Some(config.carousel.clone())
    } else {
        log::debug!("No slider #{}; carousel disabled", config.markup.slider_id);
        None
    };

    let section_count = sections.len();
    let site = Site::new(sections, config.navigation.clone(), carousel);
    PAGE.with(|p| *p.borrow_mut() = Some(Page { site, host }));

    events::register(&config.markup, &config.carousel);
    with_page(|site, host| site.load(host));

    log::info!("pageflow mounted: {section_count} sections");
}
