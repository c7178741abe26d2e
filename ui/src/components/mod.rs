//! Shared building blocks of the widget. Each one reads the controller
//! through `use_view_handle` or takes an already rendered piece of the
//! `VisualTree` as a prop.
pub mod catalog_tree;
pub mod controls;
pub mod empty_state;
pub mod pico;
pub mod symbol_button;
