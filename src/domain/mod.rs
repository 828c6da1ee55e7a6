pub mod board;
pub mod item;
pub mod lane;
pub mod ordering;
pub mod pinning;

pub use board::{BoardBackground, BoardId, BoardMeta, Member};
pub use item::{InsertPosition, Item, ItemId};
pub use lane::{Lane, LaneId};
pub use pinning::{PinnedLaneEntry, PinnedLaneSpec};
