use dioxus::prelude::*;

use crate::chart::timeline::AxisTick;
use crate::core::config::ChartConfig;
use crate::core::format::svg_number;

/// Length of the tick mark below the baseline.
const TICK_SIZE: f64 = 6.0;
const LABEL_ROTATION_DEG: f64 = -60.0;

/// Year axis under the timeline: one tick per band, labels rotated so dense
/// decades stay readable. The baseline itself isn't drawn.
#[component]
pub fn YearAxis(ticks: Vec<AxisTick>) -> Element {
    let config = ChartConfig::default();
    let offset = svg_number(config.axis_offset_y());
    let colour = config.axis_text_colour;
    let tick_len = svg_number(TICK_SIZE);
    let label_y = svg_number(TICK_SIZE + 3.0);
    let rotation = svg_number(LABEL_ROTATION_DEG);

    rsx! {
        g {
            class: "year-axis",
            transform: "translate(0, {offset})",
            fill: "none",
            font_size: "10",
            text_anchor: "middle",
            for AxisTick { year, x } in ticks {
                g {
                    key: "{year}",
                    class: "tick",
                    opacity: "1",
                    style: "color: {colour}",
                    transform: "translate({svg_number(x)}, 0)",
                    line { stroke: "currentColor", y2: "{tick_len}" }
                    text {
                        fill: "{colour}",
                        y: "{label_y}",
                        dx: "-.8em",
                        dy: ".15em",
                        font_size: "0.9em",
                        text_anchor: "end",
                        transform: "rotate({rotation})",
                        "{year}"
                    }
                }
            }
        }
    }
}
