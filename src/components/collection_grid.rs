//! Collection Grid Component
//!
//! Mounted inside a host grid region. Re-renders its markup whenever the
//! collection changes and handles clicks through one delegated listener.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::app::{navigate_to_detail, scroll_to_content};
use crate::models::Kind;
use crate::render::render_collection;
use crate::store::Board;

/// What a click inside the grid asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    ChangePage(usize),
    OpenDetail(String),
}

impl GridAction {
    /// Resolve from the `data-page` / card `data-id` nearest the click
    pub fn resolve(page_attr: Option<String>, card_id: Option<String>) -> Option<Self> {
        match (page_attr, card_id) {
            (Some(page), _) => page.trim().parse().ok().map(GridAction::ChangePage),
            (None, Some(id)) => Some(GridAction::OpenDetail(id)),
            (None, None) => None,
        }
    }

    fn from_target(target: &Element) -> Option<Self> {
        let page_attr = closest(target, "[data-page]").and_then(|el| el.get_attribute("data-page"));
        let card_id = closest(target, ".card[data-id]").and_then(|el| el.get_attribute("data-id"));
        Self::resolve(page_attr, card_id)
    }
}

fn closest(target: &Element, selector: &str) -> Option<Element> {
    target.closest(selector).ok().flatten()
}

#[component]
pub fn CollectionGrid(board: Board, kind: Kind) -> impl IntoView {
    let markup = move || board.with_collection(kind, |state| render_collection(state, kind));

    let on_click = move |ev: MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        match GridAction::from_target(&target) {
            Some(GridAction::ChangePage(page)) => {
                if board.change_page(kind, page) {
                    scroll_to_content();
                }
            }
            Some(GridAction::OpenDetail(id)) => {
                let url = board.with_config(|config| config.detail_url(kind, &id));
                navigate_to_detail(&url);
            }
            None => {}
        }
    };

    view! {
        <div class="collection-view" style="display: contents" on:click=on_click inner_html=markup></div>
    }
}
