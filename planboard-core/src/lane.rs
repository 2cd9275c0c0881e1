//! Lane assignment: mapping calendars onto board rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::remote::RemoteCalendar;

/// One board row, backed by a single remote calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    /// Positional id of the form `lane-N`, valid for one refresh cycle only.
    pub id: String,
    pub calendar_url: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub position: usize,
}

/// Bidirectional lane/calendar lookup for one refresh cycle.
///
/// Lane ids are positional, so they are only meaningful against the calendar
/// list they were computed from. The map is rebuilt from scratch every cycle
/// and never patched incrementally.
#[derive(Debug, Clone, Default)]
pub struct LaneMap {
    lanes: Vec<Lane>,
    url_to_lane: HashMap<String, String>,
    lane_to_url: HashMap<String, String>,
}

impl LaneMap {
    /// Assign lane ids over the calendar list, in listing order.
    pub fn remap(calendars: &[RemoteCalendar]) -> LaneMap {
        let mut map = LaneMap::default();
        for (position, calendar) in calendars.iter().enumerate() {
            let id = format!("lane-{}", position + 1);
            map.url_to_lane.insert(calendar.url.clone(), id.clone());
            map.lane_to_url.insert(id.clone(), calendar.url.clone());
            map.lanes.push(Lane {
                id,
                calendar_url: calendar.url.clone(),
                name: calendar.name.clone(),
                color: calendar.color.clone(),
                position,
            });
        }
        map
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn lane_for_url(&self, url: &str) -> Option<&str> {
        self.url_to_lane.get(url).map(String::as_str)
    }

    pub fn url_for_lane(&self, lane_id: &str) -> Option<&str> {
        self.lane_to_url.get(lane_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}
