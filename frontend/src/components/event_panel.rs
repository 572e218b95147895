use yew::prelude::*;
use web_sys::{DragEvent, HtmlInputElement, MouseEvent};
use shared::{Event as CalendarEvent, ExportFormat};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct EventPanelProps {
    pub selected_date: String,
    pub filter_keyword: String,
    /// `None` while the search box is empty
    pub search_results: Option<Vec<CalendarEvent>>,
    pub day_events: Vec<CalendarEvent>,
    pub on_filter_change: Callback<String>,
    pub on_drag_start: Callback<String>,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
    pub on_add: Callback<()>,
    pub on_export: Callback<ExportFormat>,
}

fn category_style(event: &CalendarEvent) -> String {
    format!("background-color: {}", event.category.color())
}

#[function_component(EventPanel)]
pub fn event_panel(props: &EventPanelProps) -> Html {
    let on_search_input = {
        let on_filter_change = props.on_filter_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_filter_change.emit(input.value());
        })
    };

    let search_section = match &props.search_results {
        None => html! {},
        Some(results) => html! {
            <div class="search-results">
                <h4>{"Search Results:"}</h4>
                <ul>
                    {if results.is_empty() {
                        html! { <li>{"No matching events found."}</li> }
                    } else {
                        html! {
                            <>{for results.iter().map(|event| html! {
                                <li key={event.id.clone()} class="event-item" style={category_style(event)}>
                                    <h4>{&event.name}</h4>
                                    <p>{format!("Date: {}", event.date)}</p>
                                    <p>{format!("Time: {} - {}", event.start_time, event.end_time)}</p>
                                    {if event.description.is_empty() {
                                        html! {}
                                    } else {
                                        html! { <p>{&event.description}</p> }
                                    }}
                                </li>
                            })}</>
                        }
                    }}
                </ul>
            </div>
        },
    };

    let day_items = props.day_events.iter().map(|event| {
        let ondragstart = {
            let on_drag_start = props.on_drag_start.clone();
            let id = event.id.clone();
            Callback::from(move |e: DragEvent| {
                // Firefox only starts a drag when data is attached
                if let Some(transfer) = e.data_transfer() {
                    if let Err(err) = transfer.set_data("text/plain", &id) {
                        Logger::warn_with_component("event-panel", &format!("Failed to attach drag data: {:?}", err));
                    }
                }
                on_drag_start.emit(id.clone());
            })
        };

        let on_edit_click = {
            let on_edit = props.on_edit.clone();
            let id = event.id.clone();
            Callback::from(move |_: MouseEvent| on_edit.emit(id.clone()))
        };

        let on_delete_click = {
            let on_delete = props.on_delete.clone();
            let id = event.id.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
        };

        html! {
            <li key={event.id.clone()} class="event-item" style={category_style(event)} draggable="true" {ondragstart}>
                <h4>{&event.name}</h4>
                <p>{format!("{} - {}", event.start_time, event.end_time)}</p>
                {if event.description.is_empty() {
                    html! {}
                } else {
                    html! { <p>{&event.description}</p> }
                }}
                <div class="event-actions">
                    <button class="btn btn-link" onclick={on_edit_click}>{"Edit"}</button>
                    <button class="btn btn-link danger" onclick={on_delete_click}>{"Delete"}</button>
                </div>
            </li>
        }
    });

    let on_add_click = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    let export_button = |format: ExportFormat, label: &'static str| {
        let on_export = props.on_export.clone();
        html! {
            <button class="btn btn-secondary" onclick={Callback::from(move |_: MouseEvent| on_export.emit(format))}>
                {label}
            </button>
        }
    };

    html! {
        <aside class="events-panel">
            <input
                type="text"
                class="search-input"
                placeholder="Search events globally"
                value={props.filter_keyword.clone()}
                oninput={on_search_input}
            />
            {search_section}

            <h3>{format!("Events on {}", props.selected_date)}</h3>
            <ul>
                {if props.day_events.is_empty() {
                    html! { <li>{"No events for this date."}</li> }
                } else {
                    html! { <>{for day_items}</> }
                }}
            </ul>

            <button class="btn btn-primary" onclick={on_add_click}>{"Add Event"}</button>

            <div class="export-actions">
                <span class="export-title">{"Export This Month's Events"}</span>
                {export_button(ExportFormat::Json, "Export as JSON")}
                {export_button(ExportFormat::Csv, "Export as CSV")}
            </div>
        </aside>
    }
}
