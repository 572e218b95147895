//! Calendar view state.
//!
//! Single owner of the event collection and of every piece of user-facing
//! state (visible month, selection, search text, drag source, editor mode).
//! UI layers read from it and route user actions back through its methods;
//! each mutation rewrites the durable store.

use crate::config::CalendarConfig;
use crate::date_utils::{
    format_full_date, format_naive_date, generate_calendar_days, month_title, parse_picker_date,
    CalendarCell, MonthCursor,
};
use crate::editor::EditorState;
use crate::error::{StoreError, ViewError};
use crate::event_store::{self, EventStore, KeyValueStorage};
use crate::export::{month_export_file_name, to_csv, to_json, ExportFile, ExportFormat};
use crate::filter::{events_in_month, events_matching_keyword, events_on_date};
use crate::models::Event;
use chrono::NaiveDate;
use log::{debug, error, info, warn};

/// Render model for one grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub cell: CalendarCell,
    /// `DD-MM-YYYY`, `None` for padding
    pub date: Option<String>,
    pub is_today: bool,
    pub is_selected: bool,
    /// One color per event on this day, in collection order
    pub markers: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct CalendarViewState<S> {
    store: EventStore<S>,
    config: CalendarConfig,
    today: NaiveDate,
    pub current: MonthCursor,
    pub selected_date: String,
    pub events: Vec<Event>,
    pub filter_keyword: String,
    pub dragged_event_id: Option<String>,
    pub editor: EditorState,
}

impl<S: KeyValueStorage> CalendarViewState<S> {
    /// Load the stored collection and focus today's month
    pub fn new(today: NaiveDate, storage: S, config: CalendarConfig) -> Self {
        let store = EventStore::new(storage, config.storage_key.clone());
        let events = store.load();
        info!("Calendar mounted with {} stored events", events.len());

        Self {
            store,
            config,
            today,
            current: MonthCursor::from(today),
            selected_date: format_naive_date(today),
            events,
            filter_keyword: String::new(),
            dragged_event_id: None,
            editor: EditorState::Closed,
        }
    }

    pub fn title(&self) -> String {
        month_title(self.current.year, self.current.month0)
    }

    pub fn previous_month(&mut self) {
        self.current = self.current.previous();
    }

    pub fn next_month(&mut self) {
        self.current = self.current.next();
    }

    /// Jump to a `YYYY-MM-DD` date picker value
    ///
    /// Month, year and selection change together or not at all.
    pub fn jump_to(&mut self, picker_value: &str) -> Result<(), ViewError> {
        let date = parse_picker_date(picker_value)
            .ok_or_else(|| ViewError::InvalidPickerDate(picker_value.to_string()))?;

        self.current = MonthCursor::from(date);
        self.selected_date = format_naive_date(date);
        debug!("Jumped to {}", self.selected_date);
        Ok(())
    }

    /// Select a grid cell; padding cells are not selectable
    pub fn select_day(&mut self, cell: CalendarCell) {
        if let Some(date) = self.date_for(cell) {
            self.selected_date = date;
        }
    }

    pub fn set_filter_keyword(&mut self, keyword: String) {
        self.filter_keyword = keyword;
    }

    pub fn start_drag(&mut self, id: &str) {
        self.dragged_event_id = Some(id.to_string());
    }

    /// Drop the dragged event onto a day cell
    ///
    /// Does nothing without an active drag or on a padding cell. Returns
    /// whether an event was moved.
    pub fn drop_on(&mut self, cell: CalendarCell) -> Result<bool, ViewError> {
        let Some(date) = self.date_for(cell) else {
            return Ok(false);
        };
        let Some(id) = self.dragged_event_id.take() else {
            return Ok(false);
        };

        let relocated = event_store::relocate(&self.events, &id, &date);
        self.commit(relocated)?;
        debug!("Relocated event {} to {}", id, date);
        Ok(true)
    }

    pub fn open_create_editor(&mut self) {
        self.editor = EditorState::Create;
    }

    /// Open the editor for an existing event; unknown ids leave it closed
    pub fn open_edit_editor(&mut self, id: &str) {
        if let Some(event) = self.events.iter().find(|event| event.id == id) {
            self.editor = EditorState::Edit(event.clone());
        }
    }

    pub fn close_editor(&mut self) {
        self.editor = EditorState::Closed;
    }

    /// Store an event produced by the editor and close it
    ///
    /// Create mode appends, edit mode replaces the record with the same id.
    /// A submit while the editor is closed is ignored.
    pub fn submit_editor(&mut self, event: Event) -> Result<(), ViewError> {
        let updated = match &self.editor {
            EditorState::Edit(_) => event_store::update(&self.events, event)?,
            EditorState::Create => event_store::add(&self.events, event)?,
            EditorState::Closed => {
                warn!("Ignoring submit of event {} while the editor is closed", event.id);
                return Ok(());
            }
        };
        self.commit(updated)?;
        self.editor = EditorState::Closed;
        Ok(())
    }

    pub fn delete_event(&mut self, id: &str) -> Result<(), ViewError> {
        let remaining = event_store::remove(&self.events, id);
        if remaining.len() == self.events.len() {
            return Ok(());
        }
        self.commit(remaining)?;
        debug!("Deleted event {}", id);
        Ok(())
    }

    /// Grid render model for the visible month
    pub fn month_cells(&self) -> Vec<DayCell> {
        let today = format_naive_date(self.today);
        generate_calendar_days(self.current.year, self.current.month0)
            .into_iter()
            .map(|cell| {
                let date = self.date_for(cell);
                let markers = date
                    .as_deref()
                    .map(|d| events_on_date(&self.events, d).iter().map(|e| e.category.color()).collect())
                    .unwrap_or_default();

                DayCell {
                    cell,
                    is_today: date.as_deref() == Some(today.as_str()),
                    is_selected: date.as_deref() == Some(self.selected_date.as_str()),
                    date,
                    markers,
                }
            })
            .collect()
    }

    /// Global search results, `None` when no keyword is entered
    pub fn search_results(&self) -> Option<Vec<&Event>> {
        if self.filter_keyword.is_empty() {
            None
        } else {
            Some(events_matching_keyword(&self.events, &self.filter_keyword))
        }
    }

    pub fn selected_day_events(&self) -> Vec<&Event> {
        events_on_date(&self.events, &self.selected_date)
    }

    pub fn visible_month_events(&self) -> Vec<&Event> {
        events_in_month(&self.events, self.current.year, self.current.month0)
    }

    /// Render the visible month's events as a downloadable file
    pub fn month_export(&self, format: ExportFormat) -> Result<ExportFile, ViewError> {
        let events = self.visible_month_events();
        let contents = match format {
            ExportFormat::Json => to_json(events)?,
            ExportFormat::Csv => to_csv(events),
        };

        Ok(ExportFile {
            file_name: month_export_file_name(
                &self.config.export_prefix,
                self.current.year,
                self.current.month0,
                format,
            ),
            mime_type: format.mime_type(),
            contents,
        })
    }

    fn date_for(&self, cell: CalendarCell) -> Option<String> {
        cell.day()
            .map(|day| format_full_date(self.current.year, self.current.month0, day))
    }

    /// Adopt the new collection and write it through
    ///
    /// The in-memory state is updated even when the write fails, so the
    /// user keeps seeing their change for the rest of the session.
    fn commit(&mut self, events: Vec<Event>) -> Result<(), StoreError> {
        self.events = events;
        self.store.save(&self.events).map_err(|e| {
            error!("Failed to persist {} events: {}", self.events.len(), e);
            e
        })
    }
}
