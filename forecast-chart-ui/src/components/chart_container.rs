//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Minimum height in pixels
    #[props(default = 400)]
    pub min_height: u32,
}

/// A padded container div for D3.js line charts.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "padding: 40px;",
            div {
                id: "{props.id}",
                style: "{style}",
            }
        }
    }
}
