//! View configuration.

use serde::Deserialize;

use weft_types::error::{Result, WeftError};

/// Grid and scroll parameters for a view.
///
/// Every field has a default, so a TOML overlay may name any subset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Viewport width in layout units.
    pub width: i32,
    /// Viewport height in layout units.
    pub height: i32,
    /// Horizontal cell advance (also the left margin).
    pub hstep: i32,
    /// Vertical line advance (also the top margin).
    pub vstep: i32,
    /// Offset change per scroll event.
    pub scroll_step: i32,
    /// Page loaded when the shell is started without a URL.
    pub home_url: Option<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            hstep: 13,
            vstep: 18,
            scroll_step: 100,
            home_url: None,
        }
    }
}

/// Parse a TOML view-config overlay.
pub fn parse_view_config(toml_str: &str) -> Result<ViewConfig> {
    toml::from_str(toml_str).map_err(|e| WeftError::Config(format!("view config: {e}")))
}
