use yew::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent};
use shared::date_utils::to_picker_date;

#[derive(Properties, PartialEq)]
pub struct JumpToDateProps {
    /// Currently selected `DD-MM-YYYY` date, shown as the picker's value
    pub selected_date: String,
    /// Receives the picker's `YYYY-MM-DD` value
    pub on_jump: Callback<String>,
}

#[function_component(JumpToDate)]
pub fn jump_to_date(props: &JumpToDateProps) -> Html {
    let picker_value = use_state(|| to_picker_date(&props.selected_date).unwrap_or_default());

    // Follow selections made elsewhere (grid clicks, earlier jumps)
    use_effect_with(props.selected_date.clone(), {
        let picker_value = picker_value.clone();
        move |selected_date| {
            picker_value.set(to_picker_date(selected_date).unwrap_or_default());
            || ()
        }
    });

    let on_change = {
        let picker_value = picker_value.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            picker_value.set(input.value());
        })
    };

    let on_go = {
        let picker_value = picker_value.clone();
        let on_jump = props.on_jump.clone();
        Callback::from(move |_: MouseEvent| {
            if !picker_value.is_empty() {
                on_jump.emit((*picker_value).clone());
            }
        })
    };

    html! {
        <div class="jump-to-date">
            <label for="jump-to-date" class="form-label">{"Jump to Date:"}</label>
            <input
                id="jump-to-date"
                type="date"
                value={(*picker_value).clone()}
                onchange={on_change}
            />
            <button class="btn btn-primary" onclick={on_go}>{"Go"}</button>
        </div>
    }
}
