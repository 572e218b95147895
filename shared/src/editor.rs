//! Event editor modal state and form validation.

use crate::models::{parse_clock_time, Category, Event};

pub const START_TIME_ERROR: &str = "Start time must be earlier than end time.";
pub const END_TIME_ERROR: &str = "End time must be later than start time.";
pub const NAME_ERROR: &str = "Event name is required.";
pub const START_TIME_FORMAT_ERROR: &str = "Start time is required (HH:MM).";
pub const END_TIME_FORMAT_ERROR: &str = "End time is required (HH:MM).";

/// Whether the modal is shown, and for what
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Create,
    Edit(Event),
}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }
}

/// Field-level validation messages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    pub name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.start_time.is_none() && self.end_time.is_none()
    }
}

/// Draft values of the event form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventForm {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    /// `None` until the user picks one
    pub category: Option<Category>,
    pub errors: FormErrors,
}

impl EventForm {
    /// Blank form for create mode, pre-populated form for edit mode
    pub fn for_state(state: &EditorState) -> Self {
        match state {
            EditorState::Edit(event) => Self::from_event(event),
            EditorState::Closed | EditorState::Create => Self::default(),
        }
    }

    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            description: event.description.clone(),
            category: Some(event.category.clone()),
            errors: FormErrors::default(),
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.errors.name = None;
    }

    pub fn set_start_time(&mut self, start_time: String) {
        self.start_time = start_time;
        self.errors.start_time = None;
    }

    pub fn set_end_time(&mut self, end_time: String) {
        self.end_time = end_time;
        self.errors.end_time = None;
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Empty selection leaves the category unset
    pub fn set_category(&mut self, label: &str) {
        self.category = if label.is_empty() { None } else { Some(Category::from(label)) };
    }

    /// Recompute every field error, returning true when the form is valid
    pub fn validate(&mut self) -> bool {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some(NAME_ERROR.to_string());
        }

        match (parse_clock_time(&self.start_time), parse_clock_time(&self.end_time)) {
            (Some(start), Some(end)) => {
                if start >= end {
                    errors.start_time = Some(START_TIME_ERROR.to_string());
                    errors.end_time = Some(END_TIME_ERROR.to_string());
                }
            }
            (start, end) => {
                if start.is_none() {
                    errors.start_time = Some(START_TIME_FORMAT_ERROR.to_string());
                }
                if end.is_none() {
                    errors.end_time = Some(END_TIME_FORMAT_ERROR.to_string());
                }
            }
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Build the event to hand back to the calendar
    ///
    /// Edit mode keeps the original id; create mode takes a fresh one from
    /// `mint_id`. The date always comes from the selected calendar day.
    pub fn submit(
        &mut self,
        state: &EditorState,
        selected_date: &str,
        mint_id: impl FnOnce() -> String,
    ) -> Result<Event, FormErrors> {
        if !self.validate() {
            return Err(self.errors.clone());
        }

        let id = match state {
            EditorState::Edit(existing) => existing.id.clone(),
            EditorState::Closed | EditorState::Create => mint_id(),
        };

        Ok(Event {
            id,
            date: selected_date.to_string(),
            name: self.name.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            description: self.description.clone(),
            category: self.category.clone().unwrap_or_default(),
        })
    }
}

/// New event id: current time in epoch milliseconds
pub fn mint_event_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}
