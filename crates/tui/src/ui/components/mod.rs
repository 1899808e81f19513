//! UI components: navigation sidebar and content pane.

pub mod common;
pub mod component;
pub mod content;
pub mod nav_filter;

pub(crate) use component::Component;
