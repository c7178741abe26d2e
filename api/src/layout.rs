//! Defines the two ways the catalog can be laid out.

use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

/// How the catalog is displayed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    /// Icons only.
    #[default]
    Grid,
    /// Icon and shortcode, one row per emoji.
    List,
}

impl Layout {
    /// The text stored in the preference store for this layout.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Interprets a stored preference value.
    ///
    /// Absent or unrecognized values fall back to [`Layout::Grid`]. Matching
    /// is exact: `"List"` is not a recognized value.
    pub fn from_stored(value: Option<&str>) -> Self {
        value
            .and_then(|v| Layout::from_str(v).ok())
            .unwrap_or_default()
    }

    /// Label shown on the toggle control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::List => "List",
        }
    }

    /// CSS class identifying the toggle control for this layout.
    pub fn toggle_class(&self) -> &'static str {
        match self {
            Self::Grid => "view-grid",
            Self::List => "view-list",
        }
    }
}
