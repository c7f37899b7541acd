//! TechSoi Board View Controller
//!
//! Binds to the regions the host page provides, mounts one grid per
//! collection, wires the tab buttons and runs the one-time index load.

use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::components::{CollectionGrid, CountUp};
use crate::config::BoardConfig;
use crate::loader;
use crate::models::Kind;
use crate::store::Board;

/// Scrolled into view after a page change
const CONTENT_SELECTOR: &str = ".tab-content";

/// Which kind of page loaded the bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostPage {
    /// Both grids present
    Board,
    /// Some board regions missing; a broken host page
    Partial,
    /// No grids at all; detail pages load the bundle only for the exports
    Detail,
}

impl HostPage {
    fn classify(has_proposals_grid: bool, has_issues_grid: bool) -> Self {
        match (has_proposals_grid, has_issues_grid) {
            (true, true) => HostPage::Board,
            (false, false) => HostPage::Detail,
            _ => HostPage::Partial,
        }
    }
}

/// Host page elements, looked up once at startup
struct HostDom {
    proposals_grid: HtmlElement,
    issues_grid: HtmlElement,
    proposal_count: Option<Element>,
    issue_count: Option<Element>,
    tab_buttons: Vec<Element>,
    tab_panes: Vec<Element>,
}

impl HostDom {
    fn bind(document: &Document) -> Option<Self> {
        let html_by_id = |id: &str| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        };
        let page = HostPage::classify(
            document.get_element_by_id("proposals-grid").is_some(),
            document.get_element_by_id("issues-grid").is_some(),
        );
        if page == HostPage::Detail {
            web_sys::console::log_1(&"[APP] No board regions on this page".into());
            return None;
        }
        let Some(proposals_grid) = html_by_id("proposals-grid") else {
            web_sys::console::error_1(&"[APP] #proposals-grid not found".into());
            return None;
        };
        let Some(issues_grid) = html_by_id("issues-grid") else {
            web_sys::console::error_1(&"[APP] #issues-grid not found".into());
            return None;
        };
        Some(Self {
            proposals_grid,
            issues_grid,
            proposal_count: document.get_element_by_id("proposal-count"),
            issue_count: document.get_element_by_id("issue-count"),
            tab_buttons: query_all(document, ".tab-btn"),
            tab_panes: query_all(document, ".tab-pane"),
        })
    }

    fn grid(&self, kind: Kind) -> &HtmlElement {
        match kind {
            Kind::Proposal => &self.proposals_grid,
            Kind::Issue => &self.issues_grid,
        }
    }

    fn count(&self, kind: Kind) -> Option<&Element> {
        match kind {
            Kind::Proposal => self.proposal_count.as_ref(),
            Kind::Issue => self.issue_count.as_ref(),
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Entry point: bind, mount, then load
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        web_sys::console::error_1(&"[APP] No document; board not started".into());
        return;
    };
    let Some(host) = HostDom::bind(&document) else {
        return;
    };

    let config = BoardConfig::from_host();
    let board = Board::new(config.clone());

    for kind in Kind::ALL {
        let grid = host.grid(kind).clone();
        // Replace the host's static placeholder with the reactive grid
        grid.set_inner_html("");
        mount_to(grid, move || view! { <CollectionGrid board=board kind=kind /> }).forget();
    }

    bind_tabs(&host, board);

    let counters: Vec<(Kind, CountUp)> = Kind::ALL
        .into_iter()
        .filter_map(|kind| {
            let el = host.count(kind)?.clone();
            Some((kind, CountUp::new(el, config.count_tick_ms, config.count_steps)))
        })
        .collect();

    spawn_local(async move {
        let result = loader::load(&config).await;
        match &result {
            Ok(loaded) => web_sys::console::log_1(
                &format!(
                    "[APP] Loaded {} proposals, {} issues",
                    loaded.proposals.records.len(),
                    loaded.issues.records.len()
                )
                .into(),
            ),
            Err(e) => web_sys::console::error_1(&format!("[APP] Error loading data: {}", e).into()),
        }
        if board.apply_load(result) {
            for (kind, counter) in &counters {
                counter.start(board.peek_collection(*kind, |c| c.reported_total()));
            }
        }
    });
}

fn bind_tabs(host: &HostDom, board: Board) {
    for button in &host.tab_buttons {
        let Some(kind) = button
            .get_attribute("data-tab")
            .and_then(|id| Kind::from_tab_id(&id))
        else {
            web_sys::console::warn_1(&"[APP] Tab button without a known data-tab".into());
            continue;
        };

        let buttons = host.tab_buttons.clone();
        let panes = host.tab_panes.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            board.set_active_tab(kind);
            show_tab(&buttons, &panes, board.active_tab());
        });
        let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

fn show_tab(buttons: &[Element], panes: &[Element], kind: Kind) {
    for button in buttons {
        let is_active = button.get_attribute("data-tab").as_deref() == Some(kind.tab_id());
        let _ = button.class_list().toggle_with_force("active", is_active);
    }
    for pane in panes {
        let _ = pane.class_list().toggle_with_force("active", pane.id() == kind.tab_id());
    }
}

/// Smooth-scroll the tab content region into view
pub fn scroll_to_content() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(Some(content)) = document.query_selector(CONTENT_SELECTOR) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        content.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Full-page redirect to a detail view
pub fn navigate_to_detail(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        web_sys::console::error_2(&"[APP] Navigation failed:".into(), &e);
    }
}
