//! Persistence coordinator: closes the optimistic-update loop.
//!
//! After the reducer has applied a structural change locally, the coordinator
//! pushes the corresponding mutation to the remote store and then fetches a
//! fresh snapshot. The returned `Sync` action reconciles local and remote
//! truth: on success it confirms the change, on failure it snaps the board
//! back to last-known-good server state. There is no manual rollback path;
//! re-deriving truth from the server replaces compensating transactions.

use crate::domain::{BoardId, InsertPosition, Lane, LaneId};
use crate::error::Result;
use crate::reducer::Action;
use crate::store::{BoardStore, ItemOrder, LaneOrder};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct SyncCoordinator<S> {
    store: Arc<S>,
    board_id: BoardId,
}

impl<S: BoardStore> SyncCoordinator<S> {
    pub fn new(store: Arc<S>, board_id: BoardId) -> Self {
        Self { store, board_id }
    }

    pub fn board_id(&self) -> &BoardId {
        &self.board_id
    }

    /// Fetches a fresh snapshot and returns the sync action that feeds it to
    /// the reducer. A fetch failure propagates so the caller keeps its last
    /// good state instead of blanking the board.
    pub async fn refresh(&self) -> Result<Action> {
        debug!(board = %self.board_id, "refreshing board snapshot");
        let snapshot = self.store.fetch_board(&self.board_id).await?;
        Ok(snapshot.into_sync_action())
    }

    /// Persists the post-drag item order of one lane.
    ///
    /// The order is read directly from the lane the reducer now holds (the
    /// same one the UI shows), never recomputed independently. One batched
    /// call carries a position for every item in the lane. On mutation
    /// failure the error is absorbed and the refresh below restores server
    /// truth.
    pub async fn finish_item_drag(&self, lane: &Lane) -> Result<Action> {
        let orders: Vec<ItemOrder> = lane
            .items
            .iter()
            .enumerate()
            .map(|(position, item)| ItemOrder {
                item_id: item.id.clone(),
                sort_order: position as i64,
            })
            .collect();

        if let Err(err) = self.store.set_item_order(&lane.id, &orders).await {
            warn!(lane = %lane.id, error = %err, "item order persist failed, refreshing");
        }
        self.refresh().await
    }

    /// Persists the post-drag lane order of the whole board, one batched
    /// call carrying a position for every lane.
    pub async fn finish_lane_drag(&self, lanes: &[Lane]) -> Result<Action> {
        let orders: Vec<LaneOrder> = lanes
            .iter()
            .enumerate()
            .map(|(position, lane)| LaneOrder {
                lane_id: lane.id.clone(),
                sort_order: position as i64,
            })
            .collect();

        if let Err(err) = self.store.set_lane_order(&orders).await {
            warn!(error = %err, "lane order persist failed, refreshing");
        }
        self.refresh().await
    }

    /// Creates the item remotely with the same fields the reducer inserted
    /// locally, then refreshes so the server-assigned identifier replaces
    /// the local placeholder on the next sync.
    pub async fn create_item(
        &self,
        lane_id: &LaneId,
        title: &str,
        position: InsertPosition,
    ) -> Result<Action> {
        if let Err(err) = self.store.create_item(lane_id, title, position).await {
            warn!(lane = %lane_id, error = %err, "item create failed, refreshing");
        }
        self.refresh().await
    }

    /// Creates the lane remotely, then refreshes for the server identifier.
    pub async fn create_lane(&self, title: &str, sort_order: i64) -> Result<Action> {
        if let Err(err) = self.store.create_lane(title, sort_order).await {
            warn!(error = %err, "lane create failed, refreshing");
        }
        self.refresh().await
    }
}
