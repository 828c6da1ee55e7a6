//! Adapter between a generic drag-and-drop library and the board reducer.
//!
//! Any sortable/drag library that reports start/over/end events with element
//! identifiers and bounding rectangles is substitutable; this module only
//! defines the event shapes and the throttling policy, never any pointer
//! mechanics.

use crate::domain::{Item, ItemId, Lane};
use crate::reducer::Action;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Bounding rectangle of a dragged or hovered element, in viewport
/// coordinates. Only `top` and `height` participate in reorder decisions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// The bottom edge of the rectangle
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The entity currently being dragged. At most one session is active at a
/// time; it is cleared unconditionally when the gesture ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DragSession {
    Item(Item),
    Lane(Lane),
}

impl DragSession {
    /// Identifier of the dragged entity
    pub fn id(&self) -> &str {
        match self {
            Self::Item(item) => item.id.as_str(),
            Self::Lane(lane) => lane.id.as_str(),
        }
    }

    pub fn is_lane(&self) -> bool {
        matches!(self, Self::Lane(_))
    }
}

/// Drag-over event as reported by the drag library.
#[derive(Debug, Clone, PartialEq)]
pub struct DragOverEvent {
    pub active_id: String,
    pub over_id: Option<String>,
    pub active_rect: Option<Rect>,
    pub over_rect: Option<Rect>,
}

/// Drag-end event as reported by the drag library. `over_id` is `None` when
/// the entity was dropped on no valid target.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEndEvent {
    pub active_id: String,
    pub over_id: Option<String>,
}

/// Turns raw drag-library events into reducer actions.
///
/// Drag-over previews are throttled to one dispatch per interval so that
/// high-frequency pointer movement does not thrash the reducer. Start and end
/// always pass through; the end of a gesture must never be dropped, or the
/// session would stay stuck in the dragging state.
#[derive(Debug)]
pub struct DragController {
    preview_interval: Duration,
    last_preview: Option<Instant>,
}

impl DragController {
    /// Roughly one preview per animation frame.
    pub const DEFAULT_PREVIEW_INTERVAL: Duration = Duration::from_millis(16);

    pub fn new() -> Self {
        Self::with_preview_interval(Self::DEFAULT_PREVIEW_INTERVAL)
    }

    /// Controller with a custom throttle window. Tests use a zero interval
    /// to make every preview observable.
    pub fn with_preview_interval(preview_interval: Duration) -> Self {
        Self {
            preview_interval,
            last_preview: None,
        }
    }

    /// A drag gesture started on the given entity
    pub fn on_drag_start(&mut self, payload: DragSession) -> Action {
        self.last_preview = None;
        Action::DragStart { payload }
    }

    /// The dragged entity moved over another element.
    ///
    /// Returns `None` when there is no target or the event falls inside the
    /// throttle window; lanes are not live-previewed so this only concerns
    /// item gestures.
    pub fn on_drag_over(&mut self, event: DragOverEvent) -> Option<Action> {
        let over_id = event.over_id?;

        let now = Instant::now();
        if let Some(last) = self.last_preview {
            if now.duration_since(last) < self.preview_interval {
                return None;
            }
        }
        self.last_preview = Some(now);

        Some(Action::DragOver {
            active_id: ItemId::from(event.active_id),
            over_id: ItemId::from(over_id),
            active_rect: event.active_rect,
            over_rect: event.over_rect,
        })
    }

    /// The gesture ended, with or without a valid target. Always yields an
    /// action so the reducer clears the drag session.
    pub fn on_drag_end(&mut self, event: DragEndEvent) -> Action {
        self.last_preview = None;
        Action::DragEnd {
            active_id: event.active_id,
            over_id: event.over_id,
        }
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}
