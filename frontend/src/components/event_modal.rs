use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};
use shared::{mint_event_id, Category, EditorState, Event as CalendarEvent, EventForm};
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct EventModalProps {
    pub editor: EditorState,
    /// Date every submitted event is stored under
    pub selected_date: String,
    pub on_submit: Callback<CalendarEvent>,
    pub on_close: Callback<()>,
}

fn field_error(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component(EventModal)]
pub fn event_modal(props: &EventModalProps) -> Html {
    let form = use_state(|| EventForm::for_state(&props.editor));

    // Reset the draft whenever the modal switches between create and edit
    use_effect_with(props.editor.clone(), {
        let form = form.clone();
        move |editor| {
            form.set(EventForm::for_state(editor));
            || ()
        }
    });

    let update_form = |change: fn(&mut EventForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            change(&mut next, value);
            form.set(next);
        }
    };

    let on_name_input = {
        let apply = update_form(EventForm::set_name);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            apply(input.value());
        })
    };

    let on_start_change = {
        let apply = update_form(EventForm::set_start_time);
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            apply(input.value());
        })
    };

    let on_end_change = {
        let apply = update_form(EventForm::set_end_time);
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            apply(input.value());
        })
    };

    let on_description_input = {
        let apply = update_form(EventForm::set_description);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            apply(input.value());
        })
    };

    let on_category_change = {
        let apply = update_form(|form, label| form.set_category(&label));
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            apply(select.value());
        })
    };

    let on_submit = {
        let form = form.clone();
        let editor = props.editor.clone();
        let selected_date = props.selected_date.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut draft = (*form).clone();
            match draft.submit(&editor, &selected_date, mint_event_id) {
                Ok(event) => {
                    Logger::debug_with_component("event-modal", &format!("Submitting event {}", event.id));
                    on_submit.emit(event);
                }
                Err(_) => form.set(draft),
            }
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let is_edit = matches!(props.editor, EditorState::Edit(_));
    if !props.editor.is_open() {
        return html! {};
    }

    let categories = Category::ALL;
    let selected_category = form.category.as_ref().map(|c| c.as_str().to_string()).unwrap_or_default();

    html! {
        <div class="event-modal-backdrop" onclick={on_backdrop_click}>
            <div class="event-modal" onclick={on_modal_click}>
                <h2 class="event-modal-title">
                    {format!("{} for {}", if is_edit { "Edit Event" } else { "Add Event" }, props.selected_date)}
                </h2>
                <form class="event-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="event-name">{"Event Name *"}</label>
                        <input
                            id="event-name"
                            type="text"
                            placeholder="Enter event name"
                            value={form.name.clone()}
                            oninput={on_name_input}
                            required=true
                        />
                        {field_error(&form.errors.name)}
                    </div>

                    <div class="form-group">
                        <label for="start-time">{"Start Time *"}</label>
                        <input
                            id="start-time"
                            type="time"
                            value={form.start_time.clone()}
                            onchange={on_start_change}
                            required=true
                        />
                        {field_error(&form.errors.start_time)}
                    </div>

                    <div class="form-group">
                        <label for="end-time">{"End Time *"}</label>
                        <input
                            id="end-time"
                            type="time"
                            value={form.end_time.clone()}
                            onchange={on_end_change}
                            required=true
                        />
                        {field_error(&form.errors.end_time)}
                    </div>

                    <div class="form-group">
                        <label for="description">{"Description"}</label>
                        <textarea
                            id="description"
                            placeholder="Optional description"
                            rows="3"
                            value={form.description.clone()}
                            oninput={on_description_input}
                        />
                    </div>

                    <div class="form-group">
                        <label for="category">{"Category *"}</label>
                        <select id="category" onchange={on_category_change} required=true>
                            <option value="" selected={selected_category.is_empty()}>{"Select a category"}</option>
                            {for categories.iter().map(|category| html! {
                                <option
                                    value={category.as_str().to_string()}
                                    selected={selected_category == category.as_str()}
                                >
                                    {category.to_string()}
                                </option>
                            })}
                        </select>
                    </div>

                    <div class="event-form-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary">
                            {if is_edit { "Update Event" } else { "Add Event" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
