//! Application State Store
//!
//! Uses Leptos reactive_stores so each collection re-renders independently.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::BoardConfig;
use crate::loader::{self, Loaded};
use crate::models::{IndexDocument, Kind, Record};
use crate::pagination::{is_valid_page, page_items, total_pages};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

/// Records of one kind plus their pagination cursor
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionState {
    records: Vec<Record>,
    current_page: usize,
    page_size: usize,
    /// Total reported by the index document, not the embedded length
    reported_total: u64,
    status: LoadStatus,
}

impl CollectionState {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
            reported_total: 0,
            status: LoadStatus::Loading,
        }
    }

    /// Replace the (still loading) collection with a loaded index document
    pub fn load(&mut self, doc: IndexDocument) {
        self.records = doc.records;
        self.reported_total = doc.total_count;
        self.current_page = 1;
        self.status = LoadStatus::Ready;
    }

    pub fn fail(&mut self) {
        self.status = LoadStatus::Failed;
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reported_total(&self) -> u64 {
        self.reported_total
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.records.len(), self.page_size)
    }

    pub fn current_items(&self) -> &[Record] {
        page_items(&self.records, self.current_page, self.page_size)
    }

    /// Move to `page`; out-of-range requests leave the cursor untouched
    pub fn change_page(&mut self, page: usize) -> bool {
        if !is_valid_page(page, self.total_pages()) {
            return false;
        }
        self.current_page = page;
        true
    }
}

/// Whole-board state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    pub proposals: CollectionState,
    pub issues: CollectionState,
    pub active_tab: Kind,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        Self {
            proposals: CollectionState::new(page_size),
            issues: CollectionState::new(page_size),
            active_tab: Kind::Proposal,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Handle threaded through the view controller and components
#[derive(Clone, Copy)]
pub struct Board {
    store: AppStore,
    config: StoredValue<BoardConfig>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            store: Store::new(AppState::new(config.items_per_page)),
            config: StoredValue::new(config),
        }
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&BoardConfig) -> R) -> R {
        self.config.with_value(f)
    }

    /// Tracked read of one collection
    pub fn with_collection<R>(&self, kind: Kind, f: impl FnOnce(&CollectionState) -> R) -> R {
        match kind {
            Kind::Proposal => f(&self.store.proposals().read()),
            Kind::Issue => f(&self.store.issues().read()),
        }
    }

    /// Untracked read, for event handlers
    pub fn peek_collection<R>(&self, kind: Kind, f: impl FnOnce(&CollectionState) -> R) -> R {
        match kind {
            Kind::Proposal => f(&self.store.proposals().read_untracked()),
            Kind::Issue => f(&self.store.issues().read_untracked()),
        }
    }

    fn update_collection<R>(&self, kind: Kind, f: impl FnOnce(&mut CollectionState) -> R) -> R {
        match kind {
            Kind::Proposal => f(&mut self.store.proposals().write()),
            Kind::Issue => f(&mut self.store.issues().write()),
        }
    }

    pub fn populate(&self, kind: Kind, doc: IndexDocument) {
        self.update_collection(kind, |c| c.load(doc));
    }

    pub fn fail(&self, kind: Kind) {
        self.update_collection(kind, CollectionState::fail);
    }

    /// Populate both collections, or fail both when the joint load failed.
    /// Returns whether the load succeeded.
    pub fn apply_load(&self, result: loader::Result<Loaded>) -> bool {
        match result {
            Ok(loaded) => {
                self.populate(Kind::Proposal, loaded.proposals);
                self.populate(Kind::Issue, loaded.issues);
                true
            }
            Err(_) => {
                for kind in Kind::ALL {
                    self.fail(kind);
                }
                false
            }
        }
    }

    /// Validated page change; only a valid request notifies subscribers
    pub fn change_page(&self, kind: Kind, page: usize) -> bool {
        let valid = self.peek_collection(kind, |c| is_valid_page(page, c.total_pages()));
        valid && self.update_collection(kind, |c| c.change_page(page))
    }

    pub fn active_tab(&self) -> Kind {
        self.store.active_tab().get_untracked()
    }

    pub fn set_active_tab(&self, kind: Kind) {
        self.store.active_tab().set(kind);
    }
}
