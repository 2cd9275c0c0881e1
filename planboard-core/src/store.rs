//! The local event store read by rendering clients.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::lane::Lane;
use crate::record::EventRecord;

/// Point-in-time view of the board: lanes in display order, then records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub lanes: Vec<Lane>,
    pub items: Vec<EventRecord>,
}

/// Ordered, wholesale-replaced collection of lanes and records.
///
/// Deliberately dumb: clear, bulk-insert and snapshot only. All ordering and
/// staleness decisions live in the engine; the single ungated write path is
/// the optimistic [`push_item`](BoardStore::push_item), which the next
/// cycle's clear removes again.
#[derive(Debug, Default)]
pub struct BoardStore {
    inner: RwLock<BoardSnapshot>,
}

impl BoardStore {
    pub fn new() -> Self {
        BoardStore::default()
    }

    /// Drop all lanes and records.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.lanes.clear();
        inner.items.clear();
    }

    pub fn insert_lanes(&self, lanes: Vec<Lane>) {
        self.inner.write().lanes.extend(lanes);
    }

    pub fn insert_items(&self, items: &[EventRecord]) {
        self.inner.write().items.extend_from_slice(items);
    }

    /// Append a single record outside a refresh cycle.
    pub fn push_item(&self, item: EventRecord) {
        self.inner.write().items.push(item);
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.inner.read().clone()
    }

    pub fn item_count(&self) -> usize {
        self.inner.read().items.len()
    }

    pub fn lane_count(&self) -> usize {
        self.inner.read().lanes.len()
    }
}
