//! Core types and the reconciliation engine for the planboard ecosystem.
//!
//! This crate provides everything shared by planboard-server and
//! planboard-cli:
//! - `Board`, the reconciliation engine mediating between rendering clients
//!   and the calendar backend
//! - `remote` module for the backend HTTP protocol
//! - the store, lane, record and status types rendering clients consume

pub mod board;
pub mod config;
pub mod error;
pub mod generation;
pub mod lane;
pub mod record;
pub mod remote;
pub mod status;
pub mod store;
pub mod transform;
pub mod window;

// Re-export the main surface at crate root for convenience
pub use board::Board;
pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use lane::{Lane, LaneMap};
pub use record::{EventRecord, EventStamp, Provenance};
pub use remote::{
    CalendarSource, ConfirmedEvent, EventDraft, EventPatch, EventQueryResponse,
    HttpCalendarSource, RemoteCalendar, RemoteItem,
};
pub use status::BoardStatus;
pub use store::{BoardSnapshot, BoardStore};
pub use window::{DateWindow, Horizon};
