//! # Tavola Core
//!
//! Board state and synchronization engine for Tavola business dashboards.
//!
//! This crate keeps an interactive, drag-and-drop kanban board consistent
//! with a remote board while the user is actively rearranging items. It
//! reconciles three concurrent truths: the last known server snapshot, an
//! in-flight optimistic local mutation produced by dragging, and the
//! eventual server-confirmed result of a persistence call, while
//! guaranteeing that a fixed set of pinned lanes can never be reordered or
//! lost. Rendering, pointer capture and the remote store itself live behind
//! interfaces; the core has no dependency on any UI or backend.

pub mod context;
pub mod domain;
pub mod drag;
pub mod error;
pub mod reducer;
pub mod store;
pub mod sync;

// Re-export commonly used types
pub use context::BoardContext;
pub use domain::{
    board::{BoardBackground, BoardId, BoardMeta, Member},
    item::{InsertPosition, Item, ItemId},
    lane::{Lane, LaneId},
    pinning::{PinnedLaneEntry, PinnedLaneSpec},
};
pub use drag::{DragController, DragEndEvent, DragOverEvent, DragSession, Rect};
pub use error::{Result, TavolaError};
pub use reducer::{reduce, Action, BoardState, TaskDetails};
pub use store::{memory::MemoryStore, BoardSnapshot, BoardStore, ItemOrder, LaneOrder};
pub use sync::SyncCoordinator;
