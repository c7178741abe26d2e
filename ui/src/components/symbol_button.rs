use api::view::SymbolControl;
use dioxus::prelude::*;

use crate::hooks::use_view_handle::use_view_handle;

/// An emoji image that copies its shortcode when clicked.
///
/// There is deliberately no visual feedback after a copy.
#[component]
pub fn SymbolButton(control: SymbolControl) -> Element {
    let handle = use_view_handle();
    let name = control.name.clone();

    rsx! {
        button {
            class: "emoji-button",
            title: "{control.title}",
            onclick: move |_| handle.activate(&name),
            img {
                class: "emoji-icon",
                src: "{control.url}",
                alt: "{control.name}",
                "loading": "lazy",
            }
        }
    }
}
