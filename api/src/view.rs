//! Pure rendering of a catalog into a display-independent tree.
//!
//! [`render`] decides *what* is shown for a filtered catalog and a layout.
//! The `ui` crate turns the resulting [`VisualTree`] into DOM nodes; nothing
//! here knows about Dioxus.

use crate::catalog::Shortcode;
use crate::catalog::SymbolCatalog;
use crate::layout::Layout;

/// Text shown when no emoji matches the filter.
pub const EMPTY_MESSAGE: &str = "No emojies found.";

/// Column headings of the list layout.
pub const LIST_HEADER: [&str; 2] = ["Emoji", "Name"];

/// A clickable emoji image that copies its shortcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolControl {
    pub name: String,
    pub url: String,
    /// Tooltip, e.g. `Click to copy :smile:`.
    pub title: String,
    pub shortcode: Shortcode,
}

/// One body row of the list layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub control: SymbolControl,
    /// Name cell text, e.g. `:smile:`.
    pub label: String,
}

/// Everything that can occupy the output region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualTree {
    List {
        header: [&'static str; 2],
        rows: Vec<ListRow>,
    },
    Grid {
        items: Vec<SymbolControl>,
    },
    Empty {
        message: &'static str,
    },
}

impl VisualTree {
    /// Number of emoji shown by this tree.
    pub fn visible_count(&self) -> usize {
        match self {
            Self::List { rows, .. } => rows.len(),
            Self::Grid { items } => items.len(),
            Self::Empty { .. } => 0,
        }
    }

    /// The layout this tree was rendered for, `None` for the empty state.
    pub fn layout(&self) -> Option<Layout> {
        match self {
            Self::List { .. } => Some(Layout::List),
            Self::Grid { .. } => Some(Layout::Grid),
            Self::Empty { .. } => None,
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

pub fn render_symbol_control(url: &str, name: &str) -> SymbolControl {
    let shortcode = Shortcode::for_name(name);
    SymbolControl {
        name: name.to_string(),
        url: url.to_string(),
        title: format!("Click to copy {shortcode}"),
        shortcode,
    }
}

pub fn render_list(catalog: &SymbolCatalog) -> VisualTree {
    let rows = catalog
        .iter()
        .map(|(name, url)| {
            let control = render_symbol_control(url, name);
            ListRow {
                label: control.shortcode.to_string(),
                control,
            }
        })
        .collect();

    VisualTree::List {
        header: LIST_HEADER,
        rows,
    }
}

pub fn render_grid(catalog: &SymbolCatalog) -> VisualTree {
    VisualTree::Grid {
        items: catalog
            .iter()
            .map(|(name, url)| render_symbol_control(url, name))
            .collect(),
    }
}

pub fn render_empty_state() -> VisualTree {
    VisualTree::Empty {
        message: EMPTY_MESSAGE,
    }
}

/// Status line for `count` visible emoji.
pub fn render_status(count: usize) -> String {
    match count {
        1 => "Showing 1 emoji".to_string(),
        n => format!("Showing {n} emojies"),
    }
}

/// Renders an already filtered catalog in `layout`.
pub fn render(filtered: &SymbolCatalog, layout: Layout) -> VisualTree {
    if filtered.is_empty() {
        return render_empty_state();
    }
    match layout {
        Layout::Grid => render_grid(filtered),
        Layout::List => render_list(filtered),
    }
}

/// The output region.
///
/// Holds at most one tree. [`Outlet::commit`] swaps the old tree for the new
/// one in a single step so no reader ever sees two trees or a half-built one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outlet {
    tree: Option<VisualTree>,
}

impl Outlet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the current tree. Clearing an empty outlet does nothing.
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Replaces whatever was shown with `tree`.
    pub fn commit(&mut self, tree: VisualTree) {
        self.clear();
        self.tree = Some(tree);
    }

    pub fn tree(&self) -> Option<&VisualTree> {
        self.tree.as_ref()
    }
}
