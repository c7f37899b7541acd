//! Index Loader
//!
//! Fetches both index documents concurrently, once per session.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::config::BoardConfig;
use crate::models::{IndexDocument, Kind};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no window available")]
    NoWindow,

    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read body of {url}: {message}")]
    Body { url: String, message: String },

    #[error("malformed index {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// Both index documents of a successful load
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub proposals: IndexDocument,
    pub issues: IndexDocument,
}

impl Loaded {
    pub fn document(&self, kind: Kind) -> &IndexDocument {
        match kind {
            Kind::Proposal => &self.proposals,
            Kind::Issue => &self.issues,
        }
    }
}

/// Fetch both indexes; a failure of either fails the whole load
pub async fn load(config: &BoardConfig) -> Result<Loaded> {
    let (proposals, issues) = futures::join!(
        fetch_index(config, Kind::Proposal),
        fetch_index(config, Kind::Issue),
    );
    combine(proposals, issues)
}

pub(crate) fn combine(proposals: Result<IndexDocument>, issues: Result<IndexDocument>) -> Result<Loaded> {
    match (proposals, issues) {
        (Ok(proposals), Ok(issues)) => Ok(Loaded { proposals, issues }),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        (Err(first), Err(second)) => {
            // Only one error is returned; keep the other visible
            web_sys::console::error_1(&format!("[LOADER] {}", second).into());
            Err(first)
        }
    }
}

pub async fn fetch_index(config: &BoardConfig, kind: Kind) -> Result<IndexDocument> {
    let url = config.index_url(kind);
    let body = fetch_text(&url).await?;
    IndexDocument::parse(kind, &body).map_err(|source| LoadError::Parse { url, source })
}

async fn fetch_text(url: &str) -> Result<String> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;

    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .and_then(|value| value.dyn_into())
        .map_err(|e| LoadError::Network { url: url.to_string(), message: js_message(&e) })?;

    if !response.ok() {
        return Err(LoadError::Status { url: url.to_string(), status: response.status() });
    }

    let body_error = |e: JsValue| LoadError::Body { url: url.to_string(), message: js_message(&e) };
    let text = JsFuture::from(response.text().map_err(body_error)?)
        .await
        .map_err(body_error)?;
    text.as_string()
        .ok_or_else(|| LoadError::Body { url: url.to_string(), message: "body is not text".to_string() })
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
