use crate::domain::{BoardId, InsertPosition, Item, ItemId, Lane, LaneId};
use crate::error::{Result, TavolaError};
use crate::store::{BoardSnapshot, BoardStore, ItemOrder, LaneOrder};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// In-memory board store.
///
/// The bundled reference backend: it honors order and create mutations so
/// the full optimistic-update, persist, refresh, reconcile loop can run
/// without a server. Also the workhorse of the crate's own tests.
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

struct MemoryInner {
    snapshot: BoardSnapshot,
    next_id: u64,
}

impl MemoryStore {
    pub fn new(snapshot: BoardSnapshot) -> Self {
        Self {
            inner: Mutex::new(MemoryInner {
                snapshot,
                next_id: 1,
            }),
        }
    }

    /// Replaces the stored snapshot, as an out-of-band remote edit would
    pub async fn replace_snapshot(&self, snapshot: BoardSnapshot) {
        self.inner.lock().await.snapshot = snapshot;
    }
}

#[async_trait]
impl BoardStore for MemoryStore {
    async fn fetch_board(&self, board_id: &BoardId) -> Result<BoardSnapshot> {
        let inner = self.inner.lock().await;
        if &inner.snapshot.board.id != board_id {
            return Err(TavolaError::BoardNotFound(board_id.to_string()));
        }
        Ok(inner.snapshot.clone())
    }

    async fn set_item_order(&self, lane_id: &LaneId, orders: &[ItemOrder]) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let lane = inner
            .snapshot
            .lanes
            .iter_mut()
            .find(|lane| &lane.id == lane_id)
            .ok_or_else(|| TavolaError::LaneNotFound(lane_id.to_string()))?;

        for order in orders {
            if let Some(item) = lane.items.iter_mut().find(|item| item.id == order.item_id) {
                item.sort_order = order.sort_order;
            }
        }
        lane.items.sort_by_key(|item| item.sort_order);
        Ok(())
    }

    async fn set_lane_order(&self, orders: &[LaneOrder]) -> Result<()> {
        let mut inner = self.inner.lock().await;
        for order in orders {
            if let Some(lane) = inner
                .snapshot
                .lanes
                .iter_mut()
                .find(|lane| lane.id == order.lane_id)
            {
                lane.sort_order = order.sort_order;
            }
        }
        inner.snapshot.lanes.sort_by_key(|lane| lane.sort_order);
        Ok(())
    }

    async fn create_item(
        &self,
        lane_id: &LaneId,
        title: &str,
        position: InsertPosition,
    ) -> Result<Item> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let lane = inner
            .snapshot
            .lanes
            .iter_mut()
            .find(|lane| &lane.id == lane_id)
            .ok_or_else(|| TavolaError::LaneNotFound(lane_id.to_string()))?;

        let mut item = Item::new(ItemId::new(format!("item-{id}")), title);
        match position {
            InsertPosition::Top => {
                item.sort_order = lane
                    .items
                    .iter()
                    .map(|i| i.sort_order)
                    .min()
                    .unwrap_or(0)
                    - 1;
                lane.items.insert(0, item.clone());
            }
            InsertPosition::Bottom => {
                item.sort_order = lane
                    .items
                    .iter()
                    .map(|i| i.sort_order)
                    .max()
                    .unwrap_or(0)
                    + 1;
                lane.items.push(item.clone());
            }
        }
        Ok(item)
    }

    async fn create_lane(&self, title: &str, sort_order: i64) -> Result<Lane> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let lane = Lane::new(LaneId::new(format!("lane-{id}")), title).with_sort_order(sort_order);
        inner.snapshot.lanes.push(lane.clone());
        inner.snapshot.lanes.sort_by_key(|lane| lane.sort_order);
        Ok(lane)
    }
}
