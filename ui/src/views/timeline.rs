use dioxus::events::ResizeEvent;
use dioxus::prelude::*;

use crate::chart::Graph;
use crate::components::LocaleSwitcher;
use crate::core::breakpoint::Breakpoint;
use crate::core::platform;

use super::MobileNotice;

/// Root page. Tracks the viewport width and draws the chart at the matching
/// breakpoint width, or the mobile notice when the viewport is too narrow.
///
/// The browser reports `innerWidth` straight away; every later resize of the
/// page root re-reads it and re-derives the breakpoint. Native builds fall
/// back to the page root's border box. Nothing is drawn until a width is
/// known.
#[component]
pub fn TimelinePage() -> Element {
    let mut viewport = use_signal(platform::viewport_width);
    let breakpoint = viewport().map(Breakpoint::from_width);

    // Subscribe to the global language code (if provided) so the copy is
    // re-rendered on a language switch.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let on_resize = move |evt: ResizeEvent| match evt.get_border_box_size() {
        Ok(size) => {
            let width = platform::measured_width(platform::viewport_width(), size.width);
            let next = Breakpoint::from_width(width);
            let previous = (*viewport.peek()).map(Breakpoint::from_width);
            if previous != Some(next) {
                tracing::debug!(width, breakpoint = ?next, "breakpoint changed");
            }
            viewport.set(Some(width));
        }
        Err(err) => tracing::debug!("resize without a measurable box: {err:?}"),
    };

    let class = match breakpoint {
        Some(b) => format!("page page-timeline {}", b.css_class()),
        None => "page page-timeline".to_string(),
    };

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "{class}", onresize: on_resize,
            LocaleSwitcher {}
            match breakpoint.map(Breakpoint::render_width) {
                Some(Some(width)) => rsx! { Graph { width } },
                Some(None) => rsx! { MobileNotice {} },
                None => rsx! {},
            }
        }
    }
}
