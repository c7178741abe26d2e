//! The interaction controller.
//!
//! A [`ViewContext`] owns everything a render cycle needs: the catalog, the
//! raw filter text, the active layout and the injected capabilities. Every
//! user interaction ends in [`ViewContext::refresh`], which filters, renders
//! and commits a new tree to the outlet.

use crate::catalog::Shortcode;
use crate::catalog::SymbolCatalog;
use crate::clipboard::ClipboardWriter;
use crate::error::CatalogError;
use crate::filter::Query;
use crate::layout::Layout;
use crate::prefs;
use crate::prefs::PreferenceStore;
use crate::source::CatalogSource;
use crate::view;
use crate::view::Outlet;
use crate::view::VisualTree;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;

pub struct ViewContext<S, C> {
    catalog: SymbolCatalog,
    filter: String,
    layout: Layout,
    store: S,
    clipboard: C,
    outlet: Outlet,
    status: Option<String>,
}

impl<S: PreferenceStore, C: ClipboardWriter> ViewContext<S, C> {
    /// Fetches the catalog from `source` and performs the initial render.
    ///
    /// A failed fetch is returned unchanged; there is no retry.
    pub async fn start(
        source: &impl CatalogSource,
        store: S,
        clipboard: C,
    ) -> Result<Self, CatalogError> {
        let catalog = source.fetch_catalog().await?;
        Ok(Self::from_catalog(catalog, store, clipboard))
    }

    /// Builds a context around an already fetched catalog, using the
    /// persisted layout and an empty filter.
    pub fn from_catalog(catalog: SymbolCatalog, store: S, clipboard: C) -> Self {
        let layout = prefs::read_layout(&store);
        let mut ctx = Self {
            catalog,
            filter: String::new(),
            layout,
            store,
            clipboard,
            outlet: Outlet::new(),
            status: None,
        };
        ctx.refresh();
        ctx
    }

    /// Switches to `layout`, persists it and re-renders with the current
    /// filter text.
    pub fn toggle_layout(&mut self, layout: Layout) {
        self.layout = layout;
        if let Err(e) = prefs::write_layout(&self.store, layout) {
            warn!("could not persist layout {layout}: {e}");
        }
        self.refresh();
    }

    /// Replaces the filter text and re-renders.
    ///
    /// The layout is re-read from the preference store rather than taken from
    /// the last toggle; storage is the source of truth.
    pub fn set_filter(&mut self, raw: impl Into<String>) {
        self.filter = raw.into();
        self.layout = prefs::read_layout(&self.store);
        self.refresh();
    }

    /// Copies the shortcode of `name` to the clipboard.
    ///
    /// Touches nothing else: catalog, filter, layout and outlet stay as they
    /// are.
    pub fn activate(&self, name: &str) -> Shortcode {
        let shortcode = Shortcode::for_name(name);
        self.clipboard.write_text(shortcode.as_str());
        shortcode
    }

    /// Runs one filter, clear, render, commit cycle.
    ///
    /// When nothing matches, the empty state is committed and the status line
    /// keeps whatever it said before.
    pub fn refresh(&mut self) {
        let query = self.query();
        let filtered = self.catalog.filtered(&query);
        let tree = view::render(&filtered, self.layout);

        debug!(
            "render cycle: layout={} query={:?} visible={}",
            self.layout,
            query.as_str(),
            filtered.len()
        );

        if !tree.is_empty_state() {
            self.status = Some(view::render_status(filtered.len()));
        }
        self.outlet.commit(tree);
    }

    pub fn query(&self) -> Query {
        Query::normalize(&self.filter)
    }

    /// The filtered catalog for the current filter text.
    pub fn filtered(&self) -> SymbolCatalog {
        self.catalog.filtered(&self.query())
    }
}

impl<S, C> ViewContext<S, C> {
    pub fn catalog(&self) -> &SymbolCatalog {
        &self.catalog
    }

    /// The raw filter text as typed.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The committed tree. Present once construction has finished.
    pub fn tree(&self) -> Option<&VisualTree> {
        self.outlet.tree()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;
    use crate::prefs::LAYOUT_KEY;
    use crate::testing::RecordingClipboard;
    use crate::testing::StaticSource;
    use crate::testing::FailingSource;
    use crate::testing::RejectingStore;
    use pretty_assertions::assert_eq;

    fn sample() -> SymbolCatalog {
        [("smile", "u1"), ("smiley_cat", "u2"), ("dog", "u3")]
            .into_iter()
            .collect()
    }

    fn context(store: MemoryStore) -> ViewContext<MemoryStore, RecordingClipboard> {
        ViewContext::from_catalog(sample(), store, RecordingClipboard::default())
    }

    fn labels(ctx: &ViewContext<impl PreferenceStore, impl ClipboardWriter>) -> Vec<String> {
        match ctx.tree() {
            Some(VisualTree::List { rows, .. }) => rows.iter().map(|r| r.label.clone()).collect(),
            other => panic!("expected a list, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn start_renders_grid_by_default() {
        let ctx = ViewContext::start(
            &StaticSource(sample()),
            MemoryStore::new(),
            RecordingClipboard::default(),
        )
        .await
        .unwrap();

        assert_eq!(ctx.layout(), Layout::Grid);
        assert_eq!(ctx.filter(), "");
        assert_eq!(ctx.tree().map(VisualTree::visible_count), Some(3));
        assert_eq!(ctx.tree().and_then(VisualTree::layout), Some(Layout::Grid));
        assert_eq!(ctx.status(), Some("Showing 3 emojies"));
    }

    #[tokio::test]
    async fn start_propagates_fetch_failure() {
        let result = ViewContext::start(
            &FailingSource(503),
            MemoryStore::new(),
            RecordingClipboard::default(),
        )
        .await;

        assert!(matches!(result, Err(CatalogError::Status(503))));
    }

    #[test]
    fn start_uses_persisted_layout() {
        let store = MemoryStore::new();
        store.set(LAYOUT_KEY, "list").unwrap();

        let ctx = context(store);
        assert_eq!(ctx.layout(), Layout::List);
        assert_eq!(labels(&ctx), vec![":smile:", ":smiley_cat:", ":dog:"]);
    }

    #[test]
    fn toggle_persists_and_keeps_filter() {
        let store = MemoryStore::new();
        let mut ctx = context(store.clone());

        ctx.set_filter("smi");
        ctx.toggle_layout(Layout::List);

        assert_eq!(store.get(LAYOUT_KEY).as_deref(), Some("list"));
        assert_eq!(ctx.filter(), "smi");
        assert_eq!(labels(&ctx), vec![":smile:", ":smiley_cat:"]);
    }

    #[test]
    fn toggle_never_changes_the_filtered_set() {
        let mut ctx = context(MemoryStore::new());
        ctx.set_filter("a");
        let before = ctx.filtered();

        for layout in [Layout::List, Layout::Grid, Layout::List] {
            ctx.toggle_layout(layout);
            assert_eq!(ctx.filtered(), before);
            assert_eq!(ctx.tree().map(VisualTree::visible_count), Some(before.len()));
        }
    }

    #[test]
    fn toggled_layout_survives_a_fresh_start() {
        let store = MemoryStore::new();
        let mut ctx = context(store.clone());
        ctx.toggle_layout(Layout::List);
        drop(ctx);

        let fresh = context(store);
        assert_eq!(fresh.layout(), Layout::List);
        assert_eq!(fresh.tree().and_then(VisualTree::layout), Some(Layout::List));
    }

    #[test]
    fn filter_input_trusts_storage_over_last_toggle() {
        let store = MemoryStore::new();
        let mut ctx = context(store.clone());
        ctx.toggle_layout(Layout::List);

        // another writer changed the stored value behind our back
        store.set(LAYOUT_KEY, "grid").unwrap();
        ctx.set_filter("dog");

        assert_eq!(ctx.layout(), Layout::Grid);
        assert_eq!(ctx.tree().and_then(VisualTree::layout), Some(Layout::Grid));
    }

    #[test]
    fn colon_wrapped_query_matches_exact_entry() {
        let store = MemoryStore::new();
        store.set(LAYOUT_KEY, "list").unwrap();
        let mut ctx = context(store);

        ctx.set_filter(" :dog: ");
        assert_eq!(labels(&ctx), vec![":dog:"]);
        assert_eq!(ctx.status(), Some("Showing 1 emoji"));
    }

    #[test]
    fn no_match_shows_empty_state_and_keeps_status() {
        let mut ctx = context(MemoryStore::new());
        ctx.set_filter("smi");
        assert_eq!(ctx.status(), Some("Showing 2 emojies"));

        ctx.set_filter("unicorn");
        assert_eq!(ctx.tree(), Some(&view::render_empty_state()));
        assert_eq!(ctx.status(), Some("Showing 2 emojies"));

        ctx.toggle_layout(Layout::List);
        assert_eq!(ctx.tree(), Some(&view::render_empty_state()));
    }

    #[test]
    fn empty_catalog_always_renders_empty_state() {
        let mut ctx = ViewContext::from_catalog(
            SymbolCatalog::new(),
            MemoryStore::new(),
            RecordingClipboard::default(),
        );
        assert!(ctx.tree().is_some_and(VisualTree::is_empty_state));
        assert_eq!(ctx.status(), None);

        ctx.toggle_layout(Layout::List);
        assert!(ctx.tree().is_some_and(VisualTree::is_empty_state));
        ctx.set_filter("");
        assert!(ctx.tree().is_some_and(VisualTree::is_empty_state));
    }

    #[test]
    fn mixed_case_names_need_lowercase_stored_form() {
        let catalog: SymbolCatalog = [("Octocat", "u1"), ("octopus", "u2")].into_iter().collect();
        let mut ctx = ViewContext::from_catalog(catalog, MemoryStore::new(), RecordingClipboard::default());

        ctx.set_filter("Octo");
        let names: Vec<String> = ctx.filtered().names().map(str::to_string).collect();
        assert_eq!(names, vec!["octopus"]);
    }

    #[test]
    fn activate_writes_shortcode_once_and_nothing_else() {
        let clipboard = RecordingClipboard::default();
        let store = MemoryStore::new();
        let mut ctx = ViewContext::from_catalog(sample(), store.clone(), clipboard.clone());
        ctx.set_filter("smi");
        let tree_before = ctx.tree().cloned();

        let shortcode = ctx.activate("smiley_cat");

        assert_eq!(shortcode.as_str(), ":smiley_cat:");
        assert_eq!(clipboard.writes(), vec![":smiley_cat:".to_string()]);
        assert_eq!(ctx.tree().cloned(), tree_before);
        assert_eq!(ctx.filter(), "smi");
        assert_eq!(ctx.catalog(), &sample());
        assert_eq!(store.get(LAYOUT_KEY), None);
    }

    #[test]
    fn failed_persist_still_renders() {
        let mut ctx = ViewContext::from_catalog(sample(), RejectingStore, RecordingClipboard::default());
        ctx.toggle_layout(Layout::List);

        assert_eq!(ctx.layout(), Layout::List);
        assert_eq!(ctx.tree().and_then(VisualTree::layout), Some(Layout::List));
    }
}
