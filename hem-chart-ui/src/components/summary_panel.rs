//! Summary panel of label/value rows shown above a chart.

use dioxus::prelude::*;

/// One row of the summary panel.
#[derive(Clone, PartialEq)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

impl SummaryRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> SummaryRow {
        SummaryRow {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SummaryPanelProps {
    pub rows: Vec<SummaryRow>,
}

/// Compact panel of window aggregates (total, average, temperature).
#[component]
pub fn SummaryPanel(props: SummaryPanelProps) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 24px; justify-content: center; margin: 8px 0; font-size: 14px;",
            for row in props.rows {
                div {
                    span { style: "color: #666;", "{row.label}: " }
                    strong { "{row.value}" }
                }
            }
        }
    }
}
