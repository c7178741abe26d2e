//=============================================================================
// File: src/components/catalog_tree.rs
//=============================================================================
use api::view::VisualTree;
use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::symbol_button::SymbolButton;

/// Displays one committed tree. The caller places it in the output region.
#[component]
pub fn CatalogTree(tree: VisualTree) -> Element {
    match tree {
        VisualTree::List { header, rows } => rsx! {
            table {
                class: "emoji-list",
                thead {
                    tr {
                        for heading in header {
                            th { "{heading}" }
                        }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            key: "{row.control.name}",
                            td {
                                SymbolButton { control: row.control.clone() }
                            }
                            td { "{row.label}" }
                        }
                    }
                }
            }
        },
        VisualTree::Grid { items } => rsx! {
            ul {
                class: "emoji-grid",
                for control in items {
                    li {
                        key: "{control.name}",
                        SymbolButton { control: control.clone() }
                    }
                }
            }
        },
        VisualTree::Empty { message } => rsx! {
            EmptyState { message: message.to_string() }
        },
    }
}
