use crate::domain::lane::{Lane, LaneId};
use serde::{Deserialize, Serialize};

/// One pinned-lane definition: a title that must always be present, plus the
/// defaults used when the remote store has no lane of that title yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinnedLaneEntry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl PinnedLaneEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Synthesizes the empty placeholder lane for this entry.
    ///
    /// The identifier is derived from the title so repeated resolution
    /// produces the same lane.
    fn placeholder(&self) -> Lane {
        let mut lane = Lane::new(LaneId::synthetic(&self.title), self.title.clone());
        lane.color = self.color.clone();
        lane
    }

    fn matches(&self, lane: &Lane) -> bool {
        lane.title.trim().eq_ignore_ascii_case(self.title.trim())
            || lane.id == LaneId::synthetic(&self.title)
    }
}

/// The fixed, code-defined ordered list of lanes that must always occupy the
/// first positions of a board, regardless of what the remote store returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinnedLaneSpec {
    entries: Vec<PinnedLaneEntry>,
}

impl PinnedLaneSpec {
    pub fn new(entries: Vec<PinnedLaneEntry>) -> Self {
        Self { entries }
    }

    /// The spec with no pinned lanes; resolution becomes a pass-through.
    pub fn none() -> Self {
        Self::new(Vec::new())
    }

    /// The standard Tavola board layout: proposals and drawings first.
    pub fn standard() -> Self {
        Self::new(vec![
            PinnedLaneEntry::new("Proposals"),
            PinnedLaneEntry::new("Drawings"),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pinned titles in spec order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.title.as_str())
    }

    /// Whether a lane title names a pinned lane (case-insensitive)
    pub fn is_pinned(&self, title: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.title.trim().eq_ignore_ascii_case(title.trim()))
    }

    /// Reorders `remote` so pinned lanes always occupy the first positions.
    ///
    /// Each pinned entry prefers a remote lane of matching title (keeping its
    /// live items and identifier) over the synthesized placeholder. Remote
    /// lanes matching no entry follow in their incoming order. Pure and
    /// idempotent: `resolve(resolve(x)) == resolve(x)`.
    pub fn resolve(&self, remote: &[Lane]) -> Vec<Lane> {
        let mut resolved: Vec<Lane> = Vec::with_capacity(remote.len() + self.entries.len());

        for entry in &self.entries {
            match remote.iter().find(|lane| entry.matches(lane)) {
                Some(lane) => resolved.push(lane.clone()),
                None => resolved.push(entry.placeholder()),
            }
        }

        for lane in remote {
            if !self.entries.iter().any(|entry| entry.matches(lane)) {
                resolved.push(lane.clone());
            }
        }

        resolved
    }
}

impl Default for PinnedLaneSpec {
    fn default() -> Self {
        Self::standard()
    }
}
