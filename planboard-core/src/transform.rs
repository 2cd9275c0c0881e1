//! Remote item to renderable record conversion.
//!
//! The single point where backend items become board records: lane
//! resolution, the inclusive-to-exclusive all-day end shift, and the
//! composite id all happen here, exactly once per item per cycle.

use crate::lane::LaneMap;
use crate::record::{EventRecord, EventStamp, Provenance};
use crate::remote::{EventDraft, RemoteItem};

/// Store-unique composite id for an event.
pub fn local_id(lane_id: &str, calendar_url: &str, event_uid: &str) -> String {
    format!("{}-{}/{}", lane_id, calendar_url, event_uid)
}

/// Convert one backend item into a board record.
///
/// Items whose calendar is missing from the lane map keep the calendar URL
/// as their lane id rather than being dropped.
pub fn transform(item: &RemoteItem, lanes: &LaneMap) -> EventRecord {
    let lane_id = lanes
        .lane_for_url(&item.calendar_url)
        .unwrap_or(&item.calendar_url)
        .to_string();
    let (start, end, all_day) = adjusted_span(item.start, item.end);

    EventRecord {
        local_id: local_id(&lane_id, &item.calendar_url, &item.id),
        remote_uid: item.id.clone(),
        lane_id,
        title: item.title.clone(),
        start,
        end,
        all_day,
        location: item.location.clone(),
        description: item.description.clone(),
        metadata: item.metadata.clone(),
        provenance: Provenance::Confirmed,
    }
}

/// Build the provisional record for an accepted create.
///
/// Same span rules as [`transform`], but the lane has already been resolved
/// by the optimistic layer and the record is marked as such.
pub fn provisional(
    draft: &EventDraft,
    calendar_url: &str,
    uid: &str,
    lane_id: &str,
) -> EventRecord {
    let (start, end, all_day) = adjusted_span(draft.start, draft.end);

    EventRecord {
        local_id: local_id(lane_id, calendar_url, uid),
        remote_uid: uid.to_string(),
        lane_id: lane_id.to_string(),
        title: draft.title.clone(),
        start,
        end,
        all_day,
        location: draft.location.clone(),
        description: draft.description.clone(),
        metadata: draft.metadata.clone(),
        provenance: Provenance::Optimistic,
    }
}

/// The last inclusive day of a record, in the backend's convention.
///
/// Reverses the all-day end shift; timed records come back unchanged. Used
/// when rendering an all-day span for humans and when sending edited ends
/// back to the backend.
pub fn inclusive_end(record: &EventRecord) -> EventStamp {
    if record.all_day {
        record.end.plus_days(-1)
    } else {
        record.end
    }
}

/// Apply the end-shift rules to a raw span.
///
/// All-day means both stamps are date-only; the wire's own flag is not
/// trusted. The record invariant `end >= start` wins over corrupt input:
/// timed spans floor at `start`, all-day spans floor at `start + 1` so the
/// exclusive-end rule still holds.
fn adjusted_span(start: EventStamp, end: EventStamp) -> (EventStamp, EventStamp, bool) {
    let all_day = start.is_date() && end.is_date();
    let (mut end, floor) = if all_day {
        (end.plus_days(1), start.plus_days(1))
    } else {
        (end, start)
    };
    if end.to_utc() < floor.to_utc() {
        end = floor;
    }
    (start, end, all_day)
}
