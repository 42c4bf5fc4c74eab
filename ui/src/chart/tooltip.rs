use dioxus::prelude::*;

use crate::core::format;
use crate::core::selection::SelectionState;
use crate::t;

/// Details for the bubble under the pointer. Renders an empty container when
/// nothing is hovered so the layout doesn't jump.
#[component]
pub fn AnimeTooltip(selection: Signal<SelectionState>) -> Element {
    // Subscribe so the labels follow a language switch.
    if let Some(lang_code) = try_use_context::<Signal<String>>() {
        let _ = lang_code.read();
    }

    let Some(record) = selection.read().hovered.clone() else {
        return rsx! {
            div { class: "whole-graph-demo-tooltip" }
        };
    };

    let title = format::format_text(record.title.as_deref());
    let year = format::format_year(record.release_year);
    let season = format::format_text(record.release_season.as_deref());
    let members = format::format_members(record.popularity);
    let score = format::format_score(record.score);

    rsx! {
        div { class: "whole-graph-demo-tooltip",
            div {
                span { class: "whole-graph-demo-tooltip-title", "{title}" }
                span { class: "whole-graph-demo-tooltip-info", {t!("tooltip-year", year = year)} }
                span { class: "whole-graph-demo-tooltip-info", {t!("tooltip-season", season = season)} }
                span { class: "whole-graph-demo-tooltip-info", {t!("tooltip-members", members = members)} }
                span { class: "whole-graph-demo-tooltip-info", {t!("tooltip-score", score = score)} }
            }
        }
    }
}
