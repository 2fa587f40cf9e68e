//! Per-indicator text panel: description plus highest/lowest/average.

use decode_render::report::summary_lines;
use decode_render::IndicatorPanel;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct IndicatorPanelViewProps {
    pub panel: IndicatorPanel,
}

/// Inline messages replace the summary or description when unavailable.
#[component]
pub fn IndicatorPanelView(props: IndicatorPanelViewProps) -> Element {
    let panel = &props.panel;
    let summary = match &panel.summary {
        Ok(summary) => summary_lines(summary),
        Err(message) => vec![message.clone()],
    };

    let description = match &panel.description {
        Ok(d) => rsx! {
            p { style: "margin: 2px 0; font-size: 13px;", strong { "Definition: " } "{d.definition}" }
            p { style: "margin: 2px 0; font-size: 13px;", strong { "Insight: " } "{d.insight}" }
        },
        Err(message) => rsx! {
            p { style: "margin: 2px 0; font-size: 13px; color: #888;", "{message}" }
        },
    };

    rsx! {
        div {
            style: "padding: 8px 12px; margin-bottom: 12px; background: #FAFAFA; border-radius: 4px; border: 1px solid #E0E0E0;",
            h4 {
                style: "margin: 0 0 6px 0;",
                "Indicator: {panel.name}"
            }
            {description}
            for line in summary.iter() {
                p {
                    style: "margin: 2px 0; font-size: 13px;",
                    "{line}"
                }
            }
        }
    }
}
