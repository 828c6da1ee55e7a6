use crate::domain::{BoardId, BoardMeta, InsertPosition, Item, ItemId, Lane, LaneId};
use crate::error::Result;
use crate::reducer::Action;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod memory;

/// One entry of a batched item-order mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOrder {
    pub item_id: ItemId,
    pub sort_order: i64,
}

/// One entry of a batched lane-order mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneOrder {
    pub lane_id: LaneId,
    pub sort_order: i64,
}

/// A full board snapshot as returned by the remote store.
///
/// Auxiliary items are externally-sourced items that conceptually belong to a
/// lane of a given title (keyed case-insensitively at splice time) without
/// living in the board's own item table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub board: BoardMeta,
    pub lanes: Vec<Lane>,
    #[serde(default)]
    pub auxiliary_items: HashMap<String, Vec<Item>>,
}

impl BoardSnapshot {
    pub fn new(board: BoardMeta, lanes: Vec<Lane>) -> Self {
        Self {
            board,
            lanes,
            auxiliary_items: HashMap::new(),
        }
    }

    /// Converts the snapshot into the sync action that feeds the reducer,
    /// ordering lanes and items by their persisted sort order first.
    pub fn into_sync_action(self) -> Action {
        let mut lanes = self.lanes;
        lanes.sort_by_key(|lane| lane.sort_order);
        for lane in &mut lanes {
            lane.items.sort_by_key(|item| item.sort_order);
        }

        Action::Sync {
            board: self.board,
            lanes,
            auxiliary_items: self.auxiliary_items,
        }
    }
}

/// Remote store contract consumed by the synchronization layer.
///
/// `fetch_board` is the snapshot loader; the remaining calls are the outbound
/// mutations issued after a drag or structural change. Implementations talk
/// to whatever backend hosts the board; the core never sees wire formats.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Fetches the full board snapshot
    async fn fetch_board(&self, board_id: &BoardId) -> Result<BoardSnapshot>;

    /// Persists the item order within one lane, last write wins
    async fn set_item_order(&self, lane_id: &LaneId, orders: &[ItemOrder]) -> Result<()>;

    /// Persists the lane order across the board, last write wins
    async fn set_lane_order(&self, orders: &[LaneOrder]) -> Result<()>;

    /// Creates an item at a lane edge, returning the stored item with its
    /// server-assigned identifier
    async fn create_item(
        &self,
        lane_id: &LaneId,
        title: &str,
        position: InsertPosition,
    ) -> Result<Item>;

    /// Creates an empty lane, returning the stored lane with its
    /// server-assigned identifier
    async fn create_lane(&self, title: &str, sort_order: i64) -> Result<Lane>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_sync_action_orders_by_sort_order() {
        let mut lane_b = Lane::new(LaneId::new("l2"), "B").with_sort_order(2);
        lane_b.items = vec![
            {
                let mut i = Item::new(ItemId::new("y"), "Y");
                i.sort_order = 5;
                i
            },
            {
                let mut i = Item::new(ItemId::new("x"), "X");
                i.sort_order = 1;
                i
            },
        ];
        let lane_a = Lane::new(LaneId::new("l1"), "A").with_sort_order(1);

        let snapshot = BoardSnapshot::new(BoardMeta::default(), vec![lane_b, lane_a]);
        let Action::Sync { lanes, .. } = snapshot.into_sync_action() else {
            panic!("expected sync action");
        };

        assert_eq!(lanes[0].title, "A");
        assert_eq!(lanes[1].title, "B");
        let ids: Vec<&str> = lanes[1].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y"]);
    }
}
