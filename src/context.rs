//! Wiring seam between the presentation layer and the core.
//!
//! `BoardContext` owns one board's state, the drag controller and the
//! persistence coordinator, and exposes bound dispatchers plus drag handlers
//! matching the generic drag library's event signatures. It contains no
//! board logic of its own.

use crate::domain::{BoardBackground, BoardId, InsertPosition, ItemId, LaneId, PinnedLaneSpec};
use crate::drag::{DragController, DragEndEvent, DragOverEvent, DragSession};
use crate::error::Result;
use crate::reducer::{reduce, Action, BoardState, TaskDetails};
use crate::store::BoardStore;
use crate::sync::SyncCoordinator;
use std::sync::Arc;

pub struct BoardContext<S> {
    state: BoardState,
    controller: DragController,
    coordinator: SyncCoordinator<S>,
}

impl<S: BoardStore> BoardContext<S> {
    pub fn new(store: Arc<S>, board_id: BoardId, pinned: PinnedLaneSpec) -> Self {
        Self {
            state: BoardState::new(pinned),
            controller: DragController::new(),
            coordinator: SyncCoordinator::new(store, board_id),
        }
    }

    /// Loads the initial snapshot. On failure the state keeps its pinned
    /// placeholder lanes and the error propagates as a loading condition.
    pub async fn load(&mut self) -> Result<()> {
        let action = self.coordinator.refresh().await?;
        self.dispatch(action);
        Ok(())
    }

    /// Re-fetches the snapshot and reconciles, keeping the last good state
    /// if the fetch fails.
    pub async fn refresh(&mut self) -> Result<()> {
        let action = self.coordinator.refresh().await?;
        self.dispatch(action);
        Ok(())
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// The active drag session, for drag-overlay rendering
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.state.drag.as_ref()
    }

    pub fn task_details(&self) -> Option<&TaskDetails> {
        self.state.details.as_ref()
    }

    /// Runs an action through the reducer
    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, action);
    }

    pub fn on_drag_start(&mut self, payload: DragSession) {
        let action = self.controller.on_drag_start(payload);
        self.dispatch(action);
    }

    pub fn on_drag_over(&mut self, event: DragOverEvent) {
        if let Some(action) = self.controller.on_drag_over(event) {
            self.dispatch(action);
        }
    }

    /// Finalizes a gesture: the reducer commits (or rejects) the move and
    /// clears the session, then the coordinator persists the order the UI
    /// now shows and reconciles against a fresh snapshot.
    pub async fn on_drag_end(&mut self, event: DragEndEvent) -> Result<()> {
        let session = self.state.drag.clone();
        let active_id = event.active_id.clone();
        let had_target = event.over_id.is_some();

        let action = self.controller.on_drag_end(event);
        self.dispatch(action);

        match session {
            Some(DragSession::Item(_)) => {
                // The preview may have moved the item even on a cancelled
                // drop, so persist the lane that holds it now.
                let lane = self
                    .state
                    .lanes
                    .iter()
                    .find(|lane| lane.contains(&ItemId::from(active_id.as_str())))
                    .cloned();
                if let Some(lane) = lane {
                    let sync = self.coordinator.finish_item_drag(&lane).await?;
                    self.dispatch(sync);
                }
            }
            Some(DragSession::Lane(_)) if had_target => {
                let lanes = self.state.lanes.clone();
                let sync = self.coordinator.finish_lane_drag(&lanes).await?;
                self.dispatch(sync);
            }
            _ => {}
        }
        Ok(())
    }

    /// Optimistically inserts the item, persists it, and reconciles so the
    /// server-assigned identifier replaces the local placeholder.
    pub async fn add_item(
        &mut self,
        lane_id: LaneId,
        title: &str,
        position: InsertPosition,
    ) -> Result<()> {
        self.dispatch(Action::AddItem {
            lane_id: lane_id.clone(),
            title: title.to_string(),
            position,
        });
        let sync = self.coordinator.create_item(&lane_id, title, position).await?;
        self.dispatch(sync);
        Ok(())
    }

    /// Optimistically inserts the lane, persists it, and reconciles.
    pub async fn add_lane(&mut self, title: &str, index: usize) -> Result<()> {
        self.dispatch(Action::AddLane {
            title: title.to_string(),
            index,
        });
        let sync = self.coordinator.create_lane(title, index as i64).await?;
        self.dispatch(sync);
        Ok(())
    }

    pub fn toggle_compact_mode(&mut self, lane_id: LaneId) {
        self.dispatch(Action::ToggleCompactMode { lane_id });
    }

    pub fn set_lane_title(&mut self, lane_id: LaneId, title: impl Into<String>) {
        self.dispatch(Action::UpdateLaneTitle {
            lane_id,
            title: title.into(),
        });
    }

    pub fn set_board_background(&mut self, background: BoardBackground) {
        self.dispatch(Action::UpdateBoardBackground { background });
    }

    pub fn open_task_details(&mut self, item_id: ItemId) {
        self.dispatch(Action::OpenTaskDetails { item_id });
    }

    pub fn close_task_details(&mut self) {
        self.dispatch(Action::CloseTaskDetails);
    }
}
