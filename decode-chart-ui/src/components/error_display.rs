//! Fatal error banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shown instead of the dashboard when startup fails; there is no partial mode.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            h4 { style: "margin: 0 0 4px 0;", "Dashboard unavailable" }
            p { style: "margin: 0; font-size: 13px;", "{props.message}" }
        }
    }
}
