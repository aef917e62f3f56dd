//! Traffic roster snapshots
//!
//! The aircraft roster is owned by an external tracking collaborator. Layout
//! computation takes an ordered, by-value snapshot per frame instead of a
//! live shared reference, so the geometry core never observes concurrent
//! mutation and holds no cross-component lifetimes.

use serde::{Deserialize, Serialize};

/// Roster index reserved for the ownship aircraft.
pub const OWNSHIP_ID: u32 = 0;

/// One aircraft in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrafficEntry {
    /// Stable roster index
    pub id: u32,
    /// Bearing to the aircraft in degrees, clockwise from north
    pub bearing: f64,
}

impl TrafficEntry {
    pub fn new(id: u32, bearing: f64) -> Self {
        TrafficEntry { id, bearing }
    }

    /// Whether this entry is the ownship aircraft (index 0).
    pub fn is_ownship(&self) -> bool {
        self.id == OWNSHIP_ID
    }
}

/// An ordered, read-only snapshot of the traffic roster.
///
/// Iteration order matches insertion order and the computed layout
/// preserves it; nothing is sorted by bearing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficSnapshot {
    entries: Vec<TrafficEntry>,
}

impl TrafficSnapshot {
    pub fn new() -> Self {
        TrafficSnapshot::default()
    }

    /// Append one aircraft to the snapshot.
    pub fn push(&mut self, id: u32, bearing: f64) {
        self.entries.push(TrafficEntry::new(id, bearing));
    }

    pub fn entries(&self) -> &[TrafficEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u32, f64)> for TrafficSnapshot {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        TrafficSnapshot {
            entries: iter
                .into_iter()
                .map(|(id, bearing)| TrafficEntry::new(id, bearing))
                .collect(),
        }
    }
}
