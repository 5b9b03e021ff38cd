//! Outline (minimap) layout and pointer interaction.
//!
//! The outline is a proportionally scaled copy of the document: every content
//! node becomes a box whose height is its real height divided by the
//! [`ScaleFactor`], stacked in document order. A visible-area indicator marks
//! the slice of the document currently in the viewport.
//!
//! # Lifecycle
//!
//! - [`Outline::render`] recomputes everything from fresh measurements. The
//!   host calls it on load, on resize and whenever content grows.
//! - [`Outline::update_visible_area`] only moves the indicator. The host calls
//!   it on every scroll.
//! - Pointer handlers translate presses and drags on the outline into
//!   [`ScrollCommand`]s.
//!
//! Nothing here performs I/O or touches the host document directly.

use super::drag::{DragState, PointerOutcome, PointerSource, ScrollCommand};
use super::layout_params::OutlineParams;
use super::types::{InvalidScaleFactor, Measurements, ScaleFactor};
use crate::model::{Color, ContentNode, NodeId, SharedState};
use thiserror::Error;
use tracing::{debug, trace};

/// Contract violations detected while rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlineError {
    /// Viewport height was zero, negative or not finite.
    #[error("Invalid viewport height: {0}")]
    InvalidViewport(f64),

    /// Content height was negative or not finite.
    #[error("Invalid content height: {0}")]
    InvalidContentHeight(f64),

    /// Content overflows the viewport but no content nodes were supplied.
    #[error("Content overflows the viewport but no content nodes were supplied")]
    NoContentNodes,

    /// Measurements produced an unusable scale factor.
    #[error(transparent)]
    Scale(#[from] InvalidScaleFactor),
}

/// One rendered box in outline space.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineNode {
    /// Content node this box stands for.
    pub id: NodeId,
    /// Offset from the top of the outline.
    pub top: f64,
    /// Rendered box height (scaled height minus the gap, never negative).
    pub height: f64,
    /// Section color, if the host assigned one.
    pub color: Option<Color>,
    /// Whether the node is bookmarked.
    pub highlighted: bool,
}

/// The draggable rectangle marking the viewport, in outline space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleArea {
    /// Offset from the top of the outline. Never negative.
    pub top: f64,
    /// Height, never below the configured minimum.
    pub height: f64,
}

/// Result of a successful non-empty render.
#[derive(Debug, Clone, PartialEq)]
struct Layout {
    scale: ScaleFactor,
    viewport_height: f64,
    nodes: Vec<OutlineNode>,
    total_height: f64,
    indicator: VisibleArea,
}

/// Outline state: last layout plus the pointer state machine.
#[derive(Debug, Clone)]
pub struct Outline {
    params: OutlineParams,
    layout: Option<Layout>,
    drag: DragState,
}

impl Default for Outline {
    fn default() -> Self {
        Self::new(OutlineParams::default())
    }
}

impl Outline {
    /// Create an empty outline. Nothing is drawn until the first render.
    pub fn new(params: OutlineParams) -> Self {
        Self {
            params,
            layout: None,
            drag: DragState::default(),
        }
    }

    /// Recompute the whole outline from current measurements.
    ///
    /// When the viewport is at least as tall as the content, the outline is
    /// cleared and `Ok` is returned: no overview is needed.
    ///
    /// # Errors
    ///
    /// Fails without touching the previous layout when the viewport height is
    /// not a positive finite number, the content height is not a non-negative
    /// finite number, or the content overflows but `nodes` is empty.
    pub fn render(
        &mut self,
        nodes: &[ContentNode],
        state: &SharedState,
        measurements: Measurements,
    ) -> Result<(), OutlineError> {
        let Measurements {
            scroll_top,
            viewport_height,
            content_height,
        } = measurements;

        if !(viewport_height.is_finite() && viewport_height > 0.0) {
            return Err(OutlineError::InvalidViewport(viewport_height));
        }
        if !(content_height.is_finite() && content_height >= 0.0) {
            return Err(OutlineError::InvalidContentHeight(content_height));
        }

        if viewport_height >= content_height {
            debug!(
                viewport_height,
                content_height, "Content fits in viewport, clearing outline"
            );
            self.layout = None;
            return Ok(());
        }

        if nodes.is_empty() {
            return Err(OutlineError::NoContentNodes);
        }

        let scale = ScaleFactor::new(content_height, viewport_height)?;

        let mut offset = 0.0;
        let outline_nodes: Vec<OutlineNode> = nodes
            .iter()
            .map(|node| {
                let step = scale.to_outline(node.outer_height);
                let outline_node = OutlineNode {
                    id: node.id.clone(),
                    top: offset,
                    height: (step - self.params.gap).max(0.0),
                    color: state.color_of(&node.id).cloned(),
                    highlighted: state.is_bookmarked(&node.id),
                };
                offset += step;
                outline_node
            })
            .collect();

        debug!(
            scale = scale.get(),
            nodes = outline_nodes.len(),
            total_height = offset,
            "Outline rendered"
        );

        self.layout = Some(Layout {
            scale,
            viewport_height,
            nodes: outline_nodes,
            total_height: offset,
            indicator: VisibleArea {
                top: 0.0,
                height: self.params.min_indicator_height,
            },
        });
        self.update_visible_area(scroll_top);

        Ok(())
    }

    /// Reposition the indicator for a document scroll offset.
    ///
    /// Returns the new indicator, or `None` if no outline is currently drawn
    /// (before the first overflowing render, or while the content fits).
    pub fn update_visible_area(&mut self, scroll_top: f64) -> Option<VisibleArea> {
        let min_height = self.params.min_indicator_height;
        let layout = self.layout.as_mut()?;

        layout.indicator = VisibleArea {
            top: layout.scale.to_outline(scroll_top).max(0.0),
            height: layout.scale.to_outline(layout.viewport_height).max(min_height),
        };
        Some(layout.indicator)
    }

    /// Handle a pointer-down at outline-space `y`.
    ///
    /// Presses on the body jump immediately: the returned outcome carries the
    /// scroll command for the same event. Ignored while nothing is drawn.
    pub fn pointer_down(&mut self, source: PointerSource, y: f64) -> PointerOutcome {
        let Some(layout) = &self.layout else {
            return PointerOutcome::ignored();
        };

        self.drag.press(source, y, &layout.indicator);
        trace!(?source, y, state = ?self.drag, "Outline drag started");

        let scroll = match source {
            PointerSource::IndicatorHandle => None,
            PointerSource::OutlineBody => self.pointer_move(y),
        };
        PointerOutcome::consumed(scroll)
    }

    /// Handle a pointer-move anywhere on screen.
    ///
    /// Returns a scroll command while dragging, `None` otherwise.
    pub fn pointer_move(&mut self, y: f64) -> Option<ScrollCommand> {
        let scale = self.layout.as_ref()?.scale;
        self.drag.drag_to(y, scale)
    }

    /// Handle a pointer-up anywhere on screen. Always ends the drag.
    pub fn pointer_up(&mut self) {
        if self.drag.is_dragging() {
            trace!("Outline drag ended");
        }
        self.drag.release();
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Rendered nodes in document order; empty when nothing is drawn.
    pub fn nodes(&self) -> &[OutlineNode] {
        self.layout
            .as_ref()
            .map(|layout| layout.nodes.as_slice())
            .unwrap_or_default()
    }

    /// Current indicator, if an outline is drawn.
    pub fn visible_area(&self) -> Option<VisibleArea> {
        self.layout.as_ref().map(|layout| layout.indicator)
    }

    /// Scale factor of the last non-empty render.
    pub fn scale_factor(&self) -> Option<ScaleFactor> {
        self.layout.as_ref().map(|layout| layout.scale)
    }

    /// Height of the outline container: the sum of every node's step.
    pub fn total_height(&self) -> f64 {
        self.layout
            .as_ref()
            .map(|layout| layout.total_height)
            .unwrap_or(0.0)
    }

    /// Whether anything is drawn.
    pub fn is_empty(&self) -> bool {
        self.layout.is_none()
    }
}

#[cfg(test)]
#[path = "outline_tests.rs"]
mod tests;
