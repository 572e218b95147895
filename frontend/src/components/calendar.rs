use yew::prelude::*;
use web_sys::{DragEvent, MouseEvent};
use shared::{CalendarCell, DayCell};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub title: String,
    pub cells: Vec<DayCell>,
    pub on_prev_month: Callback<MouseEvent>,
    pub on_next_month: Callback<MouseEvent>,
    pub on_select_day: Callback<CalendarCell>,
    pub on_drop: Callback<CalendarCell>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let calendar_days = props.cells.iter().map(|day_cell| {
        let cell = day_cell.cell;

        let mut day_class = classes!("calendar-day");
        match cell {
            CalendarCell::Padding => day_class.push("empty"),
            CalendarCell::Day(_) => {
                if day_cell.is_today {
                    day_class.push("today");
                }
                if day_cell.is_selected {
                    day_class.push("selected");
                }
            }
        }

        let onclick = {
            let on_select_day = props.on_select_day.clone();
            Callback::from(move |_: MouseEvent| on_select_day.emit(cell))
        };

        // Dropping is only allowed once dragover has been cancelled
        let ondragover = Callback::from(|e: DragEvent| e.prevent_default());

        let ondrop = {
            let on_drop = props.on_drop.clone();
            Callback::from(move |e: DragEvent| {
                e.prevent_default();
                on_drop.emit(cell);
            })
        };

        html! {
            <div class={day_class} {onclick} {ondragover} {ondrop}>
                <div class="day-number">
                    {cell.day().map(|day| day.to_string()).unwrap_or_default()}
                </div>
                <span class="day-markers">
                    {for day_cell.markers.iter().map(|color| html! {
                        <div class="event-marker" style={format!("background-color: {}", color)}></div>
                    })}
                </span>
            </div>
        }
    });

    html! {
        <section class="calendar-section">
            <div class="calendar-header">
                <button class="calendar-nav-btn" onclick={props.on_prev_month.clone()}>{"‹ Previous"}</button>
                <h2 class="calendar-title">{&props.title}</h2>
                <button class="calendar-nav-btn" onclick={props.on_next_month.clone()}>{"Next ›"}</button>
            </div>
            <div class="calendar">
                <div class="calendar-weekdays">
                    {for WEEKDAYS.iter().map(|day| html! { <div class="weekday">{*day}</div> })}
                </div>
                <div class="calendar-grid">
                    {for calendar_days}
                </div>
            </div>
        </section>
    }
}
