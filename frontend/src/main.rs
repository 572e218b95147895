use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::calendar::Calendar;
use components::event_modal::EventModal;
use components::event_panel::EventPanel;
use components::jump_to_date::JumpToDate;
use hooks::use_calendar::use_calendar;

#[function_component(App)]
fn app() -> Html {
    let calendar = use_calendar();
    let state = &calendar.state;
    let actions = calendar.actions.clone();

    let search_results = state
        .search_results()
        .map(|results| results.into_iter().cloned().collect::<Vec<_>>());
    let day_events: Vec<_> = state.selected_day_events().into_iter().cloned().collect();

    html! {
        <main class="calendar-page">
            <div class="calendar-card">
                <Calendar
                    title={state.title()}
                    cells={state.month_cells()}
                    on_prev_month={actions.prev_month.clone()}
                    on_next_month={actions.next_month.clone()}
                    on_select_day={actions.select_day.clone()}
                    on_drop={actions.drop_on.clone()}
                />
                <JumpToDate selected_date={state.selected_date.clone()} on_jump={actions.jump_to.clone()} />
            </div>

            <EventPanel
                selected_date={state.selected_date.clone()}
                filter_keyword={state.filter_keyword.clone()}
                {search_results}
                {day_events}
                on_filter_change={actions.set_filter.clone()}
                on_drag_start={actions.start_drag.clone()}
                on_edit={actions.open_edit.clone()}
                on_delete={actions.delete_event.clone()}
                on_add={actions.open_create.clone()}
                on_export={actions.export.clone()}
            />

            <EventModal
                editor={state.editor.clone()}
                selected_date={state.selected_date.clone()}
                on_submit={actions.submit_editor.clone()}
                on_close={actions.close_editor.clone()}
            />
        </main>
    }
}

fn main() {
    services::logging::init(log::LevelFilter::Debug);
    yew::Renderer::<App>::new().render();
}
