use yew::prelude::*;
use web_sys::MouseEvent;
use shared::{CalendarCell, CalendarConfig, CalendarViewState, Event, ExportFormat};
use crate::services::date_utils::today;
use crate::services::download::download_file;
use crate::services::logging::Logger;
use crate::services::storage::BrowserStorage;

const COMPONENT: &str = "use-calendar";

pub type CalendarState = CalendarViewState<BrowserStorage>;

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub jump_to: Callback<String>,
    pub select_day: Callback<CalendarCell>,
    pub set_filter: Callback<String>,
    pub start_drag: Callback<String>,
    pub drop_on: Callback<CalendarCell>,
    pub open_create: Callback<()>,
    pub open_edit: Callback<String>,
    pub close_editor: Callback<()>,
    pub submit_editor: Callback<Event>,
    pub delete_event: Callback<String>,
    pub export: Callback<ExportFormat>,
}

/// Apply a change to a copy of the current state and publish it
fn modify(state: &UseStateHandle<CalendarState>, change: impl FnOnce(&mut CalendarState)) {
    let mut next = (**state).clone();
    change(&mut next);
    state.set(next);
}

#[hook]
pub fn use_calendar() -> UseCalendarResult {
    // Loaded once at mount; every mutation writes through to localStorage
    let state = use_state(|| CalendarViewState::new(today(), BrowserStorage, CalendarConfig::default()));

    let prev_month = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| modify(&state, |s| s.previous_month()))
    };

    let next_month = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| modify(&state, |s| s.next_month()))
    };

    let jump_to = {
        let state = state.clone();
        Callback::from(move |value: String| {
            modify(&state, |s| {
                if let Err(e) = s.jump_to(&value) {
                    Logger::warn_with_component(COMPONENT, &e.to_string());
                }
            })
        })
    };

    let select_day = {
        let state = state.clone();
        Callback::from(move |cell: CalendarCell| modify(&state, |s| s.select_day(cell)))
    };

    let set_filter = {
        let state = state.clone();
        Callback::from(move |keyword: String| modify(&state, |s| s.set_filter_keyword(keyword)))
    };

    let start_drag = {
        let state = state.clone();
        Callback::from(move |id: String| modify(&state, |s| s.start_drag(&id)))
    };

    let drop_on = {
        let state = state.clone();
        Callback::from(move |cell: CalendarCell| {
            modify(&state, |s| {
                if let Err(e) = s.drop_on(cell) {
                    Logger::error_with_component(COMPONENT, &format!("Failed to move event: {}", e));
                }
            })
        })
    };

    let open_create = {
        let state = state.clone();
        Callback::from(move |_: ()| modify(&state, |s| s.open_create_editor()))
    };

    let open_edit = {
        let state = state.clone();
        Callback::from(move |id: String| modify(&state, |s| s.open_edit_editor(&id)))
    };

    let close_editor = {
        let state = state.clone();
        Callback::from(move |_: ()| modify(&state, |s| s.close_editor()))
    };

    let submit_editor = {
        let state = state.clone();
        Callback::from(move |event: Event| {
            modify(&state, |s| {
                if let Err(e) = s.submit_editor(event) {
                    Logger::error_with_component(COMPONENT, &format!("Failed to save event: {}", e));
                }
            })
        })
    };

    let delete_event = {
        let state = state.clone();
        Callback::from(move |id: String| {
            modify(&state, |s| {
                if let Err(e) = s.delete_event(&id) {
                    Logger::error_with_component(COMPONENT, &format!("Failed to delete event: {}", e));
                }
            })
        })
    };

    let export = {
        let state = state.clone();
        Callback::from(move |format: ExportFormat| {
            let result = state
                .month_export(format)
                .map_err(anyhow::Error::from)
                .and_then(|file| download_file(&file).map(|_| file.file_name));
            match result {
                Ok(file_name) => Logger::info_with_component(COMPONENT, &format!("Exported {}", file_name)),
                Err(e) => Logger::error_with_component(COMPONENT, &format!("Export failed: {}", e)),
            }
        })
    };

    let actions = UseCalendarActions {
        prev_month,
        next_month,
        jump_to,
        select_day,
        set_filter,
        start_drag,
        drop_on,
        open_create,
        open_edit,
        close_editor,
        submit_editor,
        delete_event,
        export,
    };

    UseCalendarResult {
        state: (*state).clone(),
        actions,
    }
}
