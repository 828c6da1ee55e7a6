use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardId(String);

impl BoardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BoardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board background setting: a solid color or an image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardBackground {
    Color(String),
    Image(String),
}

impl Default for BoardBackground {
    fn default() -> Self {
        Self::Color("#ffffff".to_string())
    }
}

/// A member assignable to items on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
}

/// Board metadata owned by the remote store.
///
/// Read-mostly: the core replaces it wholesale on every sync and only ever
/// mutates the background setting locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardMeta {
    pub id: BoardId,
    pub name: String,
    #[serde(default)]
    pub background: BoardBackground,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl BoardMeta {
    pub fn new(id: BoardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            background: BoardBackground::default(),
            members: Vec::new(),
        }
    }
}

impl Default for BoardMeta {
    fn default() -> Self {
        Self::new(BoardId::new(""), "")
    }
}
