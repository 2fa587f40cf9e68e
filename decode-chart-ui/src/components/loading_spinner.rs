//! Loading indicator shown while the dashboard tables are parsed.

use dioxus::prelude::*;

/// Placeholder shown until the catalog and static tables are loaded.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading indicators..."
        }
    }
}
