//! Board Configuration
//!
//! Defaults match the static site layout; the host page may override any
//! field through a `window.TECHSOI_CONFIG` object.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::models::Kind;

/// Global the host page may define before the bundle loads
const HOST_CONFIG_KEY: &str = "TECHSOI_CONFIG";

/// Characters `encodeURIComponent` leaves untouched
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetailPages {
    pub proposals: String,
    pub issues: String,
}

impl Default for DetailPages {
    fn default() -> Self {
        Self {
            proposals: "./pages/proposal-detail.html".to_string(),
            issues: "./pages/issue-detail.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Directory holding the index documents
    pub data_path: String,
    pub items_per_page: usize,
    pub detail_pages: DetailPages,
    /// Count-up animation tick
    pub count_tick_ms: u32,
    /// Ticks a count-up takes to reach its target
    pub count_steps: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_path: "./data".to_string(),
            items_per_page: 12,
            detail_pages: DetailPages::default(),
            count_tick_ms: 50,
            count_steps: 20,
        }
    }
}

impl BoardConfig {
    /// Read the host override, falling back to defaults
    pub fn from_host() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(HOST_CONFIG_KEY))
            .unwrap_or(JsValue::UNDEFINED);
        if value.is_undefined() || value.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value::<BoardConfig>(value) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                web_sys::console::warn_1(&format!("[CONFIG] Ignoring {}: {}", HOST_CONFIG_KEY, e).into());
                Self::default()
            }
        }
    }

    /// Zero sizes would make every page empty; restore the defaults instead
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.items_per_page == 0 {
            self.items_per_page = defaults.items_per_page;
        }
        if self.count_steps == 0 {
            self.count_steps = defaults.count_steps;
        }
        self
    }

    pub fn index_url(&self, kind: Kind) -> String {
        format!("{}/{}", self.data_path.trim_end_matches('/'), kind.index_file())
    }

    pub fn detail_page(&self, kind: Kind) -> &str {
        match kind {
            Kind::Proposal => &self.detail_pages.proposals,
            Kind::Issue => &self.detail_pages.issues,
        }
    }

    /// `<detail page>?id=<encoded id>`
    pub fn detail_url(&self, kind: Kind, id: &str) -> String {
        format!("{}?id={}", self.detail_page(kind), utf8_percent_encode(id, URI_COMPONENT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_urls() {
        let config = BoardConfig::default();
        assert_eq!(config.index_url(Kind::Proposal), "./data/proposals-index.json");
        assert_eq!(config.index_url(Kind::Issue), "./data/issues-index.json");

        let config = BoardConfig { data_path: "/static/data/".into(), ..BoardConfig::default() };
        assert_eq!(config.index_url(Kind::Issue), "/static/data/issues-index.json");
    }

    #[test]
    fn detail_url_encodes_like_encode_uri_component() {
        let config = BoardConfig::default();
        assert_eq!(
            config.detail_url(Kind::Proposal, "prop-001"),
            "./pages/proposal-detail.html?id=prop-001"
        );
        assert_eq!(
            config.detail_url(Kind::Issue, "a b&c=d/é"),
            "./pages/issue-detail.html?id=a%20b%26c%3Dd%2F%C3%A9"
        );
        assert_eq!(config.detail_url(Kind::Issue, "x_(1)!"), "./pages/issue-detail.html?id=x_(1)!");
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config: BoardConfig =
            serde_json::from_str(r#"{"itemsPerPage": 6, "detailPages": {"issues": "/issue.html"}}"#).unwrap();
        assert_eq!(config.items_per_page, 6);
        assert_eq!(config.data_path, "./data");
        assert_eq!(config.detail_pages.issues, "/issue.html");
        assert_eq!(config.detail_pages.proposals, "./pages/proposal-detail.html");
    }

    #[test]
    fn zero_sizes_are_restored() {
        let config = BoardConfig { items_per_page: 0, count_steps: 0, ..BoardConfig::default() }.sanitized();
        assert_eq!(config.items_per_page, 12);
        assert_eq!(config.count_steps, 20);
    }
}
