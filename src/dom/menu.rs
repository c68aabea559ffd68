use leptos::prelude::document;
use crate::config::Markup;
use crate::dom::{listen, query_all};

/// Mobile menu: the toggle button shows and hides the panel, and following
/// any link inside the panel closes it.
pub fn init(markup: &Markup) {
    let doc = document();
    let (Some(button), Some(panel)) = (
        doc.get_element_by_id(&markup.menu_button_id),
        doc.get_element_by_id(&markup.menu_id),
    ) else {
        log::debug!("No mobile menu on this page");
        return;
    };

    {
        let panel = panel.clone();
        let hidden = markup.hidden_class.clone();
        listen(&button, "click", move |_| {
            if let Err(e) = panel.class_list().toggle(&hidden) {
                log::warn!("Failed to toggle mobile menu: {e:?}");
            }
        });
    }

    let links = query_all(panel.query_selector_all("a"), "a");
    for link in &links {
        let panel = panel.clone();
        let hidden = markup.hidden_class.clone();
        listen(link, "click", move |_| {
            let _ = panel.class_list().add_1(&hidden);
        });
    }
    log::debug!("Mobile menu wired with {} links", links.len());
}
