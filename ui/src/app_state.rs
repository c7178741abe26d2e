use api::config::WidgetConfig;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub config: WidgetConfig,
}

/// Immutable, app-wide settings shared through a Dioxus context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: WidgetConfig) -> Self {
        Self(Arc::new(AppStateData { config }))
    }
}
