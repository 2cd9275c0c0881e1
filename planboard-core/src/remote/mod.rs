pub mod http;
pub mod protocol;
pub mod source;

pub use http::HttpCalendarSource;
pub use protocol::{
    ConfirmedEvent, EventDraft, EventPatch, EventQueryResponse, RemoteCalendar, RemoteItem,
    RemoteLane,
};
pub use source::CalendarSource;
