//! UI Components
//!
//! Leptos components mounted into host page regions.

mod collection_grid;
mod count_up;

pub use collection_grid::CollectionGrid;
pub use count_up::CountUp;
