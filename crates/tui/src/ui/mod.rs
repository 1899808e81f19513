//! UI layer: components, key routing, theming and the terminal runtime.

pub mod components;
pub mod hotkey;
pub mod main_component;
pub mod runtime;
pub mod theme;
