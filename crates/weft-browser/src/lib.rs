//! Page viewer engine.
//!
//! Ties the pipeline together: URL resolution, the HTTP/file
//! transport, markup-stripping text extraction, fixed-pitch grid
//! layout, and the scroll viewport, wrapped up in [`BrowserView`] --
//! the component an embedding shell drives with input events and a
//! rendering capability.

pub mod config;
pub mod fetch;
pub mod headers;
pub mod layout;
pub mod scroll;
pub mod text;
pub mod url;

#[cfg(test)]
pub(crate) mod test_utils;

// -----------------------------------------------------------------------
// Public re-exports
// -----------------------------------------------------------------------

pub use config::{ViewConfig, parse_view_config};
pub use fetch::{Response, fetch};
pub use headers::Headers;
pub use layout::{DisplayItem, layout};
pub use scroll::Viewport;
pub use text::extract_text;
pub use url::{Scheme, Url};

use weft_net::tls::TlsProvider;
use weft_types::backend::Renderer;
use weft_types::error::Result;
use weft_types::input::InputEvent;

// -----------------------------------------------------------------------
// BrowserView
// -----------------------------------------------------------------------

/// One scrollable view over one loaded document.
///
/// The view owns the display list and viewport state. It never draws
/// directly: every redraw goes through the injected [`Renderer`], and
/// every scroll arrives as an [`InputEvent`] from the shell's event
/// source. A failed load propagates its error and leaves the
/// previously rendered content untouched.
pub struct BrowserView {
    config: ViewConfig,
    viewport: Viewport,
    display: Vec<DisplayItem>,
    current: Option<Url>,
    /// HTTPS capability; plain-http views work without one.
    tls: Option<Box<dyn TlsProvider>>,
}

impl BrowserView {
    pub fn new(config: ViewConfig) -> Self {
        let viewport = Viewport::new(
            config.width,
            config.height,
            config.vstep,
            config.scroll_step,
        );
        Self {
            config,
            viewport,
            display: Vec::new(),
            current: None,
            tls: None,
        }
    }

    pub fn with_tls(config: ViewConfig, tls: Box<dyn TlsProvider>) -> Self {
        let mut view = Self::new(config);
        view.tls = Some(tls);
        view
    }

    /// Resolve, fetch, extract, and lay out a document.
    ///
    /// For a `view-source:` URL the raw fetched text goes straight to
    /// layout; everything else is stripped of markup first.
    pub fn load(&mut self, raw: &str, extra: &Headers) -> Result<()> {
        let url = Url::resolve(raw)?;
        log::info!("loading {url}");
        let response = fetch::fetch(&url, extra, self.tls.as_deref())?;

        let content = if url.view_source {
            response.body
        } else {
            extract_text(&response.body)
        };

        self.display = layout(
            &content,
            self.config.width,
            self.config.hstep,
            self.config.vstep,
        );
        self.viewport.reset();
        self.current = Some(url);
        log::debug!("laid out {} glyphs", self.display.len());
        Ok(())
    }

    /// Redraw the visible subset through the rendering capability.
    ///
    /// Records are translated by the scroll offset; visibility is
    /// recomputed from scratch each time.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.clear();
        for item in self.viewport.visible(&self.display) {
            renderer.draw_char(item.x, item.y - self.viewport.scroll_y, item.ch);
        }
        renderer.present();
    }

    /// Apply one input event, redrawing if it changed the viewport.
    pub fn handle_event(&mut self, event: InputEvent, renderer: &mut dyn Renderer) {
        if self.viewport.handle_event(event) {
            self.draw(renderer);
        }
    }

    /// The full display list for the loaded document.
    pub fn display_list(&self) -> &[DisplayItem] {
        &self.display
    }

    /// The URL of the currently loaded document, if any.
    pub fn current_url(&self) -> Option<&Url> {
        self.current.as_ref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
