use api::layout::Layout;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::pico::ToggleButton;
use crate::hooks::use_view_handle::use_view_handle;

/// Filter box plus the grid/list toggles.
#[component]
pub fn Controls() -> Element {
    let mut handle = use_view_handle();
    let view = handle.view();
    let filter = view.read().filter().to_string();

    rsx! {
        div {
            class: "emoji-toolbar",
            input {
                id: "emoji-filter",
                r#type: "search",
                placeholder: "Filter emojies, e.g. :smile:",
                autocomplete: "off",
                value: "{filter}",
                oninput: move |evt| handle.set_filter(evt.value()),
            }
            div {
                role: "group",
                for layout in Layout::iter() {
                    LayoutToggle { key: "{layout}", layout }
                }
            }
        }
    }
}

#[component]
fn LayoutToggle(layout: Layout) -> Element {
    let mut handle = use_view_handle();
    let active = handle.view().read().layout() == layout;

    rsx! {
        ToggleButton {
            class: layout.toggle_class().to_string(),
            active,
            on_click: move |_| handle.toggle_layout(layout),
            "{layout.label()}"
        }
    }
}
