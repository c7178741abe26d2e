//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ToggleButtonProps {
    children: Element,
    /// Extra classes, space separated.
    #[props(default)]
    class: String,
    #[props(default = false)]
    active: bool,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
}

/// An outline button that is filled while `active`.
///
/// Active buttons carry the `active` class and `aria-pressed="true"`.
pub fn ToggleButton(props: ToggleButtonProps) -> Element {
    let class_str = match (props.class.is_empty(), props.active) {
        (true, true) => "active".to_string(),
        (true, false) => "outline".to_string(),
        (false, true) => format!("{} active", props.class),
        (false, false) => format!("{} outline", props.class),
    };
    rsx! {
        button {
            class: "{class_str}",
            "aria-pressed": if props.active { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
