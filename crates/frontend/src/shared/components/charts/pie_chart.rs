use super::geometry::{pie_slices, ChartDatum};
use crate::shared::number_format::format_number_int;
use leptos::prelude::*;

const SIZE: f64 = 220.0;
const RADIUS: f64 = 100.0;

/// Pie chart with a legend underneath.
#[component]
pub fn PieChart(
    #[prop(into)]
    data: Signal<Vec<ChartDatum>>,
) -> impl IntoView {
    let slices = Memo::new(move |_| pie_slices(&data.get(), SIZE / 2.0, SIZE / 2.0, RADIUS));

    view! {
        <div class="chart chart--pie">
            <Show
                when=move || !slices.get().is_empty()
                fallback=|| view! { <div class="chart__empty">"No data"</div> }
            >
                <svg viewBox=format!("0 0 {} {}", SIZE, SIZE) role="img">
                    {move || {
                        slices
                            .get()
                            .into_iter()
                            .map(|slice| view! { <path d=slice.path fill=slice.color stroke="#fff" /> })
                            .collect_view()
                    }}
                </svg>
                <ul class="chart__legend">
                    {move || {
                        slices
                            .get()
                            .into_iter()
                            .map(|slice| {
                                view! {
                                    <li class="chart__legend-item">
                                        <span
                                            class="chart__swatch"
                                            style=format!("background: {};", slice.color)
                                        ></span>
                                        {format!(
                                            "{} ({}, {:.0}%)",
                                            slice.label,
                                            format_number_int(slice.value),
                                            slice.fraction * 100.0
                                        )}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
