//! Collection Rendering
//!
//! Markup for one grid, fully derived from its collection state. Interaction
//! is wired by the caller: cards carry `data-id`/`data-type`, pagination
//! buttons carry `data-page`.

use std::fmt::Write;

use crate::format::{escape, escape_opt, icon_for, status_class};
use crate::models::{Kind, Record};
use crate::pagination::{build_page_control, PageControl, PageIndicator};
use crate::store::{CollectionState, LoadStatus};

pub fn render_collection(state: &CollectionState, kind: Kind) -> String {
    match state.status() {
        LoadStatus::Loading => render_loading(),
        LoadStatus::Failed => render_error(kind),
        LoadStatus::Ready if state.records().is_empty() => render_empty(kind),
        LoadStatus::Ready => {
            let mut html = String::from(r#"<div class="cards-container">"#);
            for record in state.current_items() {
                html.push_str(&render_card(record, kind));
            }
            html.push_str("</div>");
            if let Some(control) = build_page_control(state.current_page(), state.total_pages()) {
                html.push_str(&render_page_control(&control));
            }
            html
        }
    }
}

pub fn render_card(record: &Record, kind: Kind) -> String {
    let icon = icon_for(kind, record.category.as_deref());
    let status = record.status.as_deref();
    format!(
        concat!(
            r#"<article class="card" data-id="{id}" data-type="{kind}">"#,
            r#"<div class="card-header">"#,
            r#"<div class="card-icon">{icon}</div>"#,
            r#"<div class="card-title-group">"#,
            r#"<h4 class="card-title">{title}</h4>"#,
            r#"<span class="card-category">{category}</span>"#,
            "</div></div>",
            r#"<div class="card-body"><p class="card-description">{summary}</p></div>"#,
            r#"<div class="card-footer">"#,
            r#"<span class="card-status {status_class}">{status}</span>"#,
            r#"<span class="card-arrow">→</span>"#,
            "</div></article>",
        ),
        id = escape(&record.id),
        kind = kind.card_type(),
        icon = icon,
        title = escape(&record.title),
        category = escape_opt(record.category.as_deref()),
        summary = escape_opt(record.summary.as_deref()),
        status_class = status_class(status),
        status = escape_opt(status),
    )
}

pub fn render_page_control(control: &PageControl) -> String {
    let mut html = String::from(r#"<div class="pagination">"#);
    push_step_button(&mut html, control.previous.target, control.previous.disabled, "← Prev");

    html.push_str(r#"<div class="pagination-numbers">"#);
    for indicator in &control.indicators {
        match indicator {
            PageIndicator::Page { number, active } => {
                let class = if *active { "pagination-num active" } else { "pagination-num" };
                let _ = write!(html, r#"<button class="{class}" data-page="{number}">{number}</button>"#);
            }
            PageIndicator::Ellipsis => html.push_str(r#"<span class="pagination-ellipsis">...</span>"#),
        }
    }
    html.push_str("</div>");

    push_step_button(&mut html, control.next.target, control.next.disabled, "Next →");
    html.push_str("</div>");
    html
}

fn push_step_button(html: &mut String, target: usize, disabled: bool, label: &str) {
    if disabled {
        let _ = write!(html, r#"<button class="pagination-btn disabled" data-page="{target}" disabled>{label}</button>"#);
    } else {
        let _ = write!(html, r#"<button class="pagination-btn" data-page="{target}">{label}</button>"#);
    }
}

pub fn render_empty(kind: Kind) -> String {
    match kind {
        Kind::Proposal => empty_state(
            "💡",
            "No Proposals Yet",
            "Be the first to submit a technology proposal for Bangladesh!",
        ),
        Kind::Issue => empty_state(
            "📋",
            "No Issues Documented",
            "Help us identify problems that need technology solutions!",
        ),
    }
}

pub fn render_error(kind: Kind) -> String {
    let message = match kind {
        Kind::Proposal => "Failed to load proposals",
        Kind::Issue => "Failed to load issues",
    };
    empty_state("⚠️", "Oops! Something went wrong", message)
}

pub fn render_loading() -> String {
    r#"<div class="loading-state"><div class="spinner"></div><p>Loading...</p></div>"#.to_string()
}

fn empty_state(icon: &str, title: &str, message: &str) -> String {
    format!(
        r#"<div class="empty-state"><div class="empty-state-icon">{icon}</div><h4>{title}</h4><p>{message}</p></div>"#
    )
}
