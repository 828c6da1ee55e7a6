use crate::domain::item::{Item, ItemId};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a lane (list/column) on a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaneId(String);

impl LaneId {
    const LOCAL_PREFIX: &'static str = "local-";
    const PINNED_PREFIX: &'static str = "pinned-";

    /// Wraps a store-assigned identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a placeholder identifier for a lane created locally,
    /// pending persistence confirmation
    pub fn local() -> Self {
        Self(format!("{}{}", Self::LOCAL_PREFIX, Uuid::new_v4()))
    }

    /// Stable identifier for a synthesized pinned-lane placeholder.
    ///
    /// Derived from the pinned title so that resolving the same spec twice
    /// yields the same identifier.
    pub fn synthetic(title: &str) -> Self {
        let slug: String = title
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect();
        Self(format!("{}{}", Self::PINNED_PREFIX, slug))
    }

    /// Whether this identifier names a synthesized pinned placeholder
    pub fn is_synthetic(&self) -> bool {
        self.0.starts_with(Self::PINNED_PREFIX)
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LaneId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LaneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A lane: an ordered column of items.
///
/// The `items` vector order is the authoritative in-memory order; `sort_order`
/// is the last value the remote store reported and is recomputed from vector
/// positions when an order change is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub id: LaneId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_limit: Option<u32>,
    /// Local UI state, never persisted by the core.
    #[serde(default)]
    pub compact_mode: bool,
    pub sort_order: i64,
    pub items: Vec<Item>,
}

impl Lane {
    pub fn new(id: LaneId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            color: None,
            item_limit: None,
            compact_mode: false,
            sort_order: 0,
            items: Vec::new(),
        }
    }

    /// Creates an empty lane with a local placeholder identifier
    pub fn local(title: impl Into<String>) -> Self {
        Self::new(LaneId::local(), title)
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Index of an item within this lane
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Whether this lane holds the given item
    pub fn contains(&self, id: &ItemId) -> bool {
        self.position_of(id).is_some()
    }
}
