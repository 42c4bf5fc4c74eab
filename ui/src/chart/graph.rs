use dioxus::prelude::*;

use crate::chart::axis::YearAxis;
use crate::chart::detail::DetailLayer;
use crate::chart::timeline::{TimelineLayer, TimelineScene};
use crate::chart::tooltip::AnimeTooltip;
use crate::core::config::ChartConfig;
use crate::core::dataset::Dataset;
use crate::core::format::svg_number;
use crate::core::selection::SelectionState;
use crate::t;

const MAL_URL: &str = "https://myanimelist.net/";

/// The whole visualisation at a fixed width: reading guide, the selected
/// year, and the SVG with its four layers (background, timeline, bubble
/// cluster, axis) plus the hover tooltip.
#[component]
pub fn Graph(width: f64) -> Element {
    let config = ChartConfig::default();
    let selection = use_signal(|| SelectionState::new(config.default_year));
    let dataset = Dataset::shared();
    // Re-render the copy when the platform's language code changes.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // Hover changes only reach the tooltip and the bubbles, not this body.
    let selected_year = use_memo(move || selection.read().selected_year);
    let scene = use_memo(use_reactive((&width,), move |(width,)| timeline_scene(dataset, width)));
    let selected_year = selected_year();
    let scene = scene();

    let svg_width = svg_number(width);
    let svg_height = svg_number(config.height);
    let strip_height = svg_number(config.timeline_height);
    let background = config.background_colour;

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        div { class: "whole-graph-demo",
            h1 { class: "whole-graph-title", {t!("graph-title")} }
            div { class: "whole-graph-subtitle",
                {t!("graph-subtitle")}
                " "
                a { href: MAL_URL, target: "_blank", "MyAnimeList" }
            }
            div { class: "whole-graph-instructions-title", {t!("graph-instructions-title")} }
            ul { class: "whole-graph-instructions",
                li { span { {t!("graph-instruction-size")} } }
                li { span { {t!("graph-instruction-numbers")} } }
                li { span { {t!("graph-instruction-click")} } }
                li { span { {t!("graph-instruction-bubbles")} } }
                li { span { {t!("graph-instruction-hover")} } }
            }
            div { {t!("graph-show-anime-for")} }
            h1 { class: "whole-graph-selected-year", "{selected_year}" }

            div { class: "whole-graph-demo-container",
                svg { width: "{svg_width}", height: "{svg_height}",
                    if let Some(scene) = scene {
                        g { class: "background",
                            rect {
                                rx: "30",
                                ry: "30",
                                width: "{svg_width}",
                                height: "{strip_height}",
                                fill: "{background}",
                            }
                        }
                        TimelineLayer { scene: scene.clone(), selection }
                        DetailLayer { year: selected_year, width, selection }
                        YearAxis { ticks: scene.ticks.clone() }
                    }
                }
                AnimeTooltip { selection }
            }
        }
    }
}

/// Timeline layout for `width`, or `None` when there is nothing to draw.
pub fn timeline_scene(dataset: &Dataset, width: f64) -> Option<TimelineScene> {
    if !dataset.is_ready() {
        tracing::warn!("missing data, skipping chart render");
        return None;
    }
    Some(TimelineScene::build(&dataset.aggregates, width, &ChartConfig::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_skips_the_chart() {
        assert!(timeline_scene(&Dataset::default(), 1000.0).is_none());
    }

    #[test]
    fn scene_depends_on_width_only() {
        let dataset = Dataset::shared();
        let a = timeline_scene(dataset, 1000.0);
        assert!(a.is_some());
        assert_eq!(a, timeline_scene(dataset, 1000.0));
        assert_ne!(a, timeline_scene(dataset, 1400.0));
    }
}
