//! Sidebar of indicator checkboxes.

use crate::state::AppState;
use decode_core::name::slugify;
use dioxus::prelude::*;

/// One checkbox per discovered indicator, in catalog order, all unchecked
/// at startup. Toggling writes the selection signal, which drives the
/// re-render effect in the app.
#[component]
pub fn IndicatorSelector() -> Element {
    let state = use_context::<AppState>();
    let indicators = state.indicators.read().clone();
    let selection = state.selection.read().clone();

    rsx! {
        div {
            style: "min-width: 260px; max-width: 320px; padding: 12px; background: #F5F5F5; border-right: 1px solid #E0E0E0;",
            h3 {
                style: "margin: 0 0 12px 0; font-size: 16px;",
                "Select the Economy Indicator"
            }
            for name in indicators.iter() {
                IndicatorCheckbox {
                    key: "{name}",
                    name: name.clone(),
                    checked: selection.is_selected(name),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct IndicatorCheckboxProps {
    name: String,
    checked: bool,
}

#[component]
fn IndicatorCheckbox(props: IndicatorCheckboxProps) -> Element {
    let mut state = use_context::<AppState>();
    let input_id = format!("indicator-{}", slugify(&props.name));
    let name = props.name.clone();

    let on_change = move |evt: Event<FormData>| {
        state.selection.write().set(&name, evt.checked());
    };

    rsx! {
        div {
            style: "margin: 6px 0; font-size: 13px;",
            input {
                id: "{input_id}",
                r#type: "checkbox",
                checked: props.checked,
                onchange: on_change,
            }
            label {
                r#for: "{input_id}",
                style: "margin-left: 6px;",
                "{props.name}"
            }
        }
    }
}
