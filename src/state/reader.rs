//! Reader host: owns per-document state and drives the outline.
//!
//! The reader plays the part of the page hosting the outline. It keeps a
//! simulated window (scroll offset and height), applies scroll commands the way
//! a browser would (clamped to the scrollable range, followed by a scroll
//! notification), and re-renders the outline on resize, content growth and
//! bookmark changes. Re-renders are not coalesced: every notification triggers
//! a full layout.

use super::bookmarks::{self, BookmarkHandle};
use super::document::{Document, DocumentError};
use super::error::ReaderError;
use super::store::BookmarkStore;
use crate::model::{Color, NodeId, SharedState};
use crate::palette::{ColorAllocator, PaletteSet};
use crate::view_state::{
    Measurements, Outline, OutlineError, OutlineParams, PointerOutcome, PointerSource,
    ScrollCommand,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Color of nodes that precede the first section start.
pub const DEFAULT_NODE_COLOR: &str = "#444";

/// Everything a reader needs besides the document and the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderSettings {
    /// Palettes section colors are drawn from.
    pub palettes: PaletteSet,
    /// Color of nodes before the first section start.
    pub default_color: Color,
    /// Outline gap and indicator floor.
    pub outline: OutlineParams,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            palettes: PaletteSet::default(),
            default_color: Color::from_literal(DEFAULT_NODE_COLOR),
            outline: OutlineParams::default(),
        }
    }
}

/// Simulated browser window.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Window {
    scroll_top: f64,
    height: f64,
}

/// A document open in the reader, with its outline and bookmarks.
#[derive(Debug)]
pub struct Reader<S: BookmarkStore> {
    document: Document,
    state: SharedState,
    colors: ColorAllocator,
    default_color: Color,
    outline: Outline,
    window: Window,
    store: S,
}

impl<S: BookmarkStore> Reader<S> {
    /// Open `document` in a window of `viewport_height` pixels, scrolled to
    /// the top, restoring any bookmarks stored under the document title.
    ///
    /// # Errors
    ///
    /// Fails if `viewport_height` is not a positive finite number, or if the
    /// store cannot be read or holds a corrupt mapping.
    pub fn new(
        document: Document,
        settings: ReaderSettings,
        store: S,
        viewport_height: f64,
    ) -> Result<Self, ReaderError> {
        check_viewport(viewport_height)?;
        let mut state = SharedState::new();
        state.bookmarks = bookmarks::restore(&store, &document)?;

        Ok(Self {
            colors: ColorAllocator::new(&settings.palettes),
            default_color: settings.default_color,
            outline: Outline::new(settings.outline),
            window: Window {
                scroll_top: 0.0,
                height: viewport_height,
            },
            document,
            state,
            store,
        })
    }

    /// Assign section colors and draw the outline.
    ///
    /// Safe to call again: color assignment restarts from a reset allocator.
    pub fn start(&mut self) -> Result<(), ReaderError> {
        self.assign_colors()?;
        self.render_outline()?;
        info!(
            title = self.document.title(),
            nodes = self.document.len(),
            "Reader started"
        );
        Ok(())
    }

    /// Walk nodes in order; each section start draws the next unkeyed color
    /// and every node takes the current section color.
    fn assign_colors(&mut self) -> Result<(), ReaderError> {
        self.colors.reset();
        self.state.colors.clear();

        let mut color = self.default_color.clone();
        for (id, kind) in self.document.nodes() {
            if kind.starts_section() {
                color = self.colors.next_color(None)?;
            }
            self.state.colors.insert(id.clone(), color.clone());
        }

        debug!(
            assigned = self.state.colors.len(),
            "Section colors assigned"
        );
        Ok(())
    }

    /// Current viewport measurements.
    pub fn measurements(&self) -> Measurements {
        Measurements::new(
            self.window.scroll_top,
            self.window.height,
            self.document.content_height() as f64,
        )
    }

    /// Full outline re-layout from current measurements.
    pub fn render_outline(&mut self) -> Result<(), ReaderError> {
        let nodes = self.document.content_nodes();
        let measurements = self.measurements();
        self.outline.render(&nodes, &self.state, measurements)?;
        Ok(())
    }

    /// Scroll notification from the window.
    pub fn on_scroll(&mut self, scroll_top: f64) {
        self.window.scroll_top = scroll_top;
        self.outline.update_visible_area(scroll_top);
    }

    /// Resize notification: new viewport height, full re-render.
    ///
    /// An invalid height is rejected before anything changes.
    pub fn on_resize(&mut self, viewport_height: f64) -> Result<(), ReaderError> {
        check_viewport(viewport_height)?;

        let previous = self.window;
        self.window.height = viewport_height;
        self.window.scroll_top = self.clamp_scroll(self.window.scroll_top);
        debug!(viewport_height, "Window resized");

        if let Err(err) = self.render_outline() {
            self.window = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Content-growth notification (e.g. an image finished loading).
    ///
    /// Shrinking content pulls the scroll offset back into range, as a
    /// browser does when the page gets shorter.
    pub fn on_content_growth(&mut self, id: &NodeId, new_height: usize) -> Result<(), ReaderError> {
        let previous = self.document.set_height(id, new_height)?;
        self.window.scroll_top = self.clamp_scroll(self.window.scroll_top);
        debug!(node = %id, previous, new_height, "Content node resized");
        self.render_outline()
    }

    /// Pointer pressed on the outline at outline-space `y`.
    pub fn pointer_down(&mut self, source: PointerSource, y: f64) -> PointerOutcome {
        let outcome = self.outline.pointer_down(source, y);
        if let Some(command) = outcome.scroll {
            self.apply_scroll(command);
        }
        outcome
    }

    /// Pointer moved anywhere on screen. Returns the applied scroll offset.
    pub fn pointer_move(&mut self, y: f64) -> Option<f64> {
        let command = self.outline.pointer_move(y)?;
        Some(self.apply_scroll(command))
    }

    /// Pointer released anywhere on screen.
    pub fn pointer_up(&mut self) {
        self.outline.pointer_up();
    }

    /// Scroll the window the way a browser does: clamp, then notify.
    fn apply_scroll(&mut self, command: ScrollCommand) -> f64 {
        let offset = self.clamp_scroll(command.offset);
        self.on_scroll(offset);
        offset
    }

    fn clamp_scroll(&self, offset: f64) -> f64 {
        offset.min(self.measurements().max_scroll_top()).max(0.0)
    }

    /// Add or remove the bookmark on `id`, persist and re-render.
    ///
    /// Returns whether the node is bookmarked afterwards.
    pub fn toggle_bookmark(&mut self, id: &NodeId) -> Result<bool, ReaderError> {
        self.toggle_bookmark_at(id, Utc::now())
    }

    /// [`Self::toggle_bookmark`] with an explicit timestamp for new bookmarks.
    pub fn toggle_bookmark_at(
        &mut self,
        id: &NodeId,
        at: DateTime<Utc>,
    ) -> Result<bool, ReaderError> {
        if !self.document.contains(id) {
            return Err(DocumentError::UnknownNode(id.clone()).into());
        }

        let bookmarked = if self.state.remove_bookmark(id) {
            false
        } else {
            self.state.add_bookmark(id.clone(), at);
            true
        };
        info!(node = %id, bookmarked, "Bookmark toggled");

        bookmarks::persist(&mut self.store, self.document.title(), &self.state)?;
        self.render_outline()?;
        Ok(bookmarked)
    }

    /// Bookmark affordances for every section, in document order.
    pub fn bookmark_line(&self) -> Vec<BookmarkHandle> {
        bookmarks::bookmark_line(&self.document, &self.state)
    }

    /// Node under the top edge of the viewport.
    pub fn current_section(&self) -> Option<&NodeId> {
        self.document
            .node_at(self.window.scroll_top.max(0.0) as usize)
    }

    /// The open document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Colors and bookmarks.
    pub fn state(&self) -> &SharedState {
        &self.state
    }

    /// The outline as last rendered.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Backing bookmark store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current window scroll offset.
    pub fn scroll_top(&self) -> f64 {
        self.window.scroll_top
    }

    /// Current window height.
    pub fn viewport_height(&self) -> f64 {
        self.window.height
    }
}

/// Window heights must be positive and finite.
fn check_viewport(viewport_height: f64) -> Result<(), OutlineError> {
    if viewport_height.is_finite() && viewport_height > 0.0 {
        Ok(())
    } else {
        Err(OutlineError::InvalidViewport(viewport_height))
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
