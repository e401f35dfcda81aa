use crate::state::parse_bound;
use crate::structs::{FilterCatalog, QuerySlot};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterRowProps {
    pub index: usize,
    pub slot: QuerySlot,
    pub catalog: FilterCatalog,
    pub on_name: Callback<(usize, String)>,
    /// `None` when the input no longer holds a finite number.
    pub on_min: Callback<(usize, Option<f64>)>,
    pub on_max: Callback<(usize, Option<f64>)>,
}

/// Keeps the typed text so partial input like `1.` survives a re-render.
/// Reports the parsed value, or `None` for text that is not a finite number.
#[function_component(BoundInput)]
fn bound_input(props: &BoundInputProps) -> Html {
    let text = use_state(|| props.value.to_string());
    let invalid = props.invalid;

    let oninput = {
        let text = text.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let bound = parse_bound(&value);
            if bound.is_none() {
                log::debug!("rejected bound input {:?}", value);
            }
            on_change.emit(bound);
            text.set(value);
        })
    };

    let border = if invalid { "red" } else { "#aaaaaa" };

    html! {
        <label style="display: flex; flex-direction: column; margin: 0 8px;">
            <span style="font-size: 0.8em;">{ props.label }</span>
            <input
                type="number"
                aria-invalid={invalid.to_string()}
                style={format!("width: 120px; border: 1px solid {};", border)}
                value={(*text).clone()}
                {oninput}
            />
        </label>
    }
}

#[derive(Properties, PartialEq)]
struct BoundInputProps {
    label: &'static str,
    value: f64,
    invalid: bool,
    on_change: Callback<Option<f64>>,
}

#[function_component(FilterRow)]
pub fn filter_row(props: &FilterRowProps) -> Html {
    let index = props.index;

    let on_min = {
        let on_min = props.on_min.clone();
        Callback::from(move |value: Option<f64>| on_min.emit((index, value)))
    };
    let on_max = {
        let on_max = props.on_max.clone();
        Callback::from(move |value: Option<f64>| on_max.emit((index, value)))
    };
    let onchange = {
        let on_name = props.on_name.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_name.emit((index, select.value()));
        })
    };

    html! {
        <div style="display: flex; justify-content: center; align-items: flex-end; margin: 4px 0;">
            <BoundInput
                label="Minimum"
                value={props.slot.min}
                invalid={props.slot.min_invalid}
                on_change={on_min}
            />
            <label style="display: flex; flex-direction: column; margin: 0 8px;">
                <span style="font-size: 0.8em;">{ "Algo Queries" }</span>
                <select style="min-width: 120px;" {onchange}>
                    { for props.catalog.iter().map(|name| html! {
                        <option
                            key={name.clone()}
                            value={name.clone()}
                            selected={*name == props.slot.name}
                        >
                            { name }
                        </option>
                    }) }
                </select>
            </label>
            <BoundInput
                label="Maximum"
                value={props.slot.max}
                invalid={props.slot.max_invalid}
                on_change={on_max}
            />
        </div>
    }
}
