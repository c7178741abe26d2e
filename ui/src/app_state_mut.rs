//! Defines the mutable, reactive state for the widget.

use dioxus::prelude::*;

use crate::capabilities::WidgetContext;

/// A reactive state provided as a Dioxus context once the catalog is loaded.
///
/// The controller lives inside a `Signal` so that every transition it runs
/// (filter, toggle) re-renders the components that read it. It is separate
/// from the immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub view: Signal<WidgetContext>,
}
