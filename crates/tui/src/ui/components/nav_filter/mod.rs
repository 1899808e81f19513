mod nav_filter_component;
pub mod state;

pub use nav_filter_component::NavFilterComponent;
pub use state::{NavFilterState, NavGroupNode, NavItemNode, NavRow, SearchField};
