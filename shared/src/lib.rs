//! Core data and rendering model of the event calendar.
//!
//! Everything here is target-independent: the wasm frontend renders from
//! [`CalendarViewState`] and supplies a browser-backed [`KeyValueStorage`].

pub mod calendar_view;
pub mod config;
pub mod date_utils;
pub mod editor;
pub mod error;
pub mod event_store;
pub mod export;
pub mod filter;
pub mod models;

pub use calendar_view::{CalendarViewState, DayCell};
pub use config::CalendarConfig;
pub use date_utils::{format_full_date, generate_calendar_days, CalendarCell, MonthCursor};
pub use editor::{mint_event_id, EditorState, EventForm, FormErrors};
pub use error::{StoreError, ViewError};
pub use event_store::{EventStore, KeyValueStorage, MemoryStorage};
pub use export::{ExportFile, ExportFormat};
pub use models::{Category, Event};
