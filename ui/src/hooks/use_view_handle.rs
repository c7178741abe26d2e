use api::layout::Layout;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::app_state_mut::AppStateMut;
use crate::capabilities::WidgetContext;

/// Routes user interactions to the controller held in [`AppStateMut`].
#[derive(Clone, Copy)]
pub struct ViewHandle {
    view: Signal<WidgetContext>,
}

impl ViewHandle {
    /// Layout toggle clicked.
    pub fn toggle_layout(&mut self, layout: Layout) {
        if self.view.peek().layout() != layout {
            debug!("layout toggled to {layout}");
        }
        self.view.write().toggle_layout(layout);
    }

    /// Filter box changed.
    pub fn set_filter(&mut self, raw: String) {
        self.view.write().set_filter(raw);
    }

    /// Emoji image clicked. Does not subscribe the caller to anything.
    pub fn activate(&self, name: &str) {
        let shortcode = self.view.peek().activate(name);
        debug!("copied {shortcode}");
    }

    /// Returns the signal holding the controller.
    /// Call .read() on this in a component to subscribe to changes.
    pub fn view(&self) -> Signal<WidgetContext> {
        self.view
    }
}

pub fn use_view_handle() -> ViewHandle {
    let state = use_context::<AppStateMut>();
    ViewHandle { view: state.view }
}
