use super::geometry::{bar_layout, ChartDatum};
use crate::shared::number_format::format_number_int;
use leptos::prelude::*;

const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 240.0;
const LABEL_SPACE: f64 = 24.0;
const VALUE_SPACE: f64 = 16.0;

/// Vertical bar chart, one bar per datum.
#[component]
pub fn BarChart(
    /// Bars in display order
    #[prop(into)]
    data: Signal<Vec<ChartDatum>>,
    /// Bar fill color
    #[prop(optional, into)]
    fill: MaybeProp<String>,
) -> impl IntoView {
    let fill = move || fill.get().unwrap_or_else(|| "#8884d8".to_string());

    view! {
        <div class="chart chart--bar">
            <Show
                when=move || !data.get().is_empty()
                fallback=|| view! { <div class="chart__empty">"No data"</div> }
            >
                <svg
                    viewBox=format!("0 {} {} {}", -VALUE_SPACE, WIDTH, HEIGHT + LABEL_SPACE + VALUE_SPACE)
                    preserveAspectRatio="xMidYMid meet"
                    role="img"
                >
                    <line class="chart__axis" x1="0" y1=HEIGHT.to_string() x2=WIDTH.to_string() y2=HEIGHT.to_string() stroke="#999" />
                    {move || {
                        bar_layout(&data.get(), WIDTH, HEIGHT)
                            .into_iter()
                            .map(|bar| {
                                let center = bar.x + bar.width / 2.0;
                                view! {
                                    <g class="chart__bar">
                                        <rect
                                            x=format!("{:.2}", bar.x)
                                            y=format!("{:.2}", bar.y)
                                            width=format!("{:.2}", bar.width)
                                            height=format!("{:.2}", bar.height)
                                            fill=fill()
                                        />
                                        <text
                                            class="chart__value"
                                            x=format!("{:.2}", center)
                                            y=format!("{:.2}", bar.y - 4.0)
                                            text-anchor="middle"
                                        >
                                            {format_number_int(bar.value)}
                                        </text>
                                        <text
                                            class="chart__label"
                                            x=format!("{:.2}", center)
                                            y=format!("{:.2}", HEIGHT + 16.0)
                                            text-anchor="middle"
                                        >
                                            {bar.label}
                                        </text>
                                    </g>
                                }
                            })
                            .collect_view()
                    }}
                </svg>
            </Show>
        </div>
    }
}
