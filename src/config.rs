//! Page configuration.
//!
//! Read from an optional `<script type="application/json" id="pageflow-config">`
//! block. Every field has a default, so pages only override what differs
//! from the stock markup.

use pageflow_core::{CarouselConfig, NavConfig};
use serde::Deserialize;
use std::str::FromStr;

/// Id of the element holding the JSON config.
pub const CONFIG_ELEMENT_ID: &str = "pageflow-config";

/// Selectors, ids and class names the shell binds to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Markup {
    pub section_selector: String,
    pub nav_link_selector: String,
    pub nav_active_class: String,
    pub nav_idle_class: String,
    /// Same-page anchors whose clicks become section requests.
    pub anchor_selector: String,

    pub menu_button_id: String,
    pub menu_id: String,
    pub hidden_class: String,

    /// Slide track; its parent element is the carousel container.
    pub slider_id: String,
    pub prev_id: String,
    pub next_id: String,
    pub dot_selector: String,
    pub dot_active_class: String,
    pub dot_idle_class: String,
    pub slide_selector: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            section_selector: "section".into(),
            nav_link_selector: ".nav-link".into(),
            nav_active_class: "text-amber-600".into(),
            nav_idle_class: "text-gray-700".into(),
            anchor_selector: r##"a[href^="#"]"##.into(),
            menu_button_id: "mobile-menu-btn".into(),
            menu_id: "mobile-menu".into(),
            hidden_class: "hidden".into(),
            slider_id: "portfolio-slider".into(),
            prev_id: "prev-btn".into(),
            next_id: "next-btn".into(),
            dot_selector: ".portfolio-dot".into(),
            dot_active_class: "bg-amber-600".into(),
            dot_idle_class: "bg-white/40".into(),
            slide_selector: "#portfolio .group".into(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub navigation: NavConfig,
    pub carousel: CarouselConfig,
    pub markup: Markup,
    pub log_level: Option<String>,
}

impl PageConfig {
    /// Parse a JSON config block. Malformed input falls back to defaults.
    pub fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str(text) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Ignoring malformed page config: {e}");
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|s| log::Level::from_str(s).ok())
            .unwrap_or(log::Level::Info)
    }
}
