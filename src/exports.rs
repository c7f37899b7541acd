//! Host Exports
//!
//! Formatting helpers shared with the detail pages, which render single
//! records with the same icons, status classes and escaping as the board.

use wasm_bindgen::prelude::*;

use crate::config::BoardConfig;
use crate::format;
use crate::models::Kind;

#[wasm_bindgen(js_name = escapeHtml)]
pub fn escape_html(text: Option<String>) -> String {
    format::escape_opt(text.as_deref())
}

#[wasm_bindgen(js_name = proposalIcon)]
pub fn proposal_icon(category: Option<String>) -> String {
    format::icon_for(Kind::Proposal, category.as_deref()).to_string()
}

#[wasm_bindgen(js_name = issueIcon)]
pub fn issue_icon(category: Option<String>) -> String {
    format::icon_for(Kind::Issue, category.as_deref()).to_string()
}

#[wasm_bindgen(js_name = statusClass)]
pub fn status_class(status: Option<String>) -> String {
    format::status_class(status.as_deref()).to_string()
}

/// `kind` is a tab identifier (`"proposals"` or `"issues"`)
#[wasm_bindgen(js_name = detailUrl)]
pub fn detail_url(kind: &str, id: &str) -> Option<String> {
    let kind = Kind::from_tab_id(kind)?;
    Some(BoardConfig::from_host().detail_url(kind, id))
}
