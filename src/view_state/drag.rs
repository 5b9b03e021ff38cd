//! Pointer drag state machine for the outline.
//!
//! ## States
//!
//! - `Idle`: pointer moves are ignored
//! - `Dragging { grab_offset }`: every move maps the pointer back into a
//!   document scroll offset
//!
//! ## Transitions
//!
//! 1) pointer-down on the indicator keeps the grabbed point under the cursor:
//!    `grab_offset = y - indicator.top`
//! 2) pointer-down anywhere else on the outline centers the indicator under
//!    the cursor: `grab_offset = indicator.height / 2`
//! 3) pointer-move while dragging: `target = (y - grab_offset) * scale`
//! 4) pointer-up from any state returns to `Idle`
//!
//! Releases are accepted from anywhere, so a drag released outside the widget
//! cannot leave the machine stuck in `Dragging`.

use super::outline::VisibleArea;
use super::types::ScaleFactor;

/// Which part of the outline received a pointer-down.
///
/// Supplied by the event-dispatch boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// The visible-area indicator itself.
    IndicatorHandle,
    /// Anywhere else inside the outline (click-to-jump).
    OutlineBody,
}

/// Document scroll request emitted while dragging.
///
/// Not clamped; the host clamps to its valid scroll range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    /// Target document scroll offset in pixels.
    pub offset: f64,
}

/// What the host should do with a pointer-down event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerOutcome {
    /// Suppress the default action and stop propagation.
    pub consumed: bool,
    /// Scroll to apply immediately (click-to-jump).
    pub scroll: Option<ScrollCommand>,
}

impl PointerOutcome {
    /// Event was not handled by the outline.
    pub fn ignored() -> Self {
        Self {
            consumed: false,
            scroll: None,
        }
    }

    /// Event was handled; optionally scroll right away.
    pub fn consumed(scroll: Option<ScrollCommand>) -> Self {
        Self {
            consumed: true,
            scroll,
        }
    }
}

/// Tracks whether a drag is in progress and where the indicator was grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No button held over the outline.
    #[default]
    Idle,
    /// Dragging; `grab_offset` is the pointer's distance below the indicator top.
    Dragging {
        /// Outline-space offset between the pointer and the indicator top.
        grab_offset: f64,
    },
}

impl DragState {
    /// Begin a drag from a pointer-down at outline-space `y`.
    pub fn press(&mut self, source: PointerSource, y: f64, indicator: &VisibleArea) {
        let grab_offset = match source {
            PointerSource::IndicatorHandle => y - indicator.top,
            PointerSource::OutlineBody => indicator.height / 2.0,
        };
        *self = Self::Dragging { grab_offset };
    }

    /// Map a pointer at outline-space `y` to a scroll command.
    ///
    /// Returns `None` while idle.
    pub fn drag_to(&self, y: f64, scale: ScaleFactor) -> Option<ScrollCommand> {
        match *self {
            Self::Idle => None,
            Self::Dragging { grab_offset } => Some(ScrollCommand {
                offset: scale.to_document(y - grab_offset),
            }),
        }
    }

    /// End any drag.
    pub fn release(&mut self) {
        *self = Self::Idle;
    }

    /// Returns `true` while a drag is active
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
