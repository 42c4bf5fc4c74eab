use dioxus::prelude::*;

use crate::chart::color::ColorRamp;
use crate::chart::scale::{BandScale, SqrtScale};
use crate::core::aggregate::YearAggregate;
use crate::core::config::ChartConfig;
use crate::core::dataset::extent;
use crate::core::format::svg_number;
use crate::core::selection::SelectionState;

/// Transient look of a timeline circle. Clicking uses the same enlarged look
/// as hovering; nothing marks the selected year persistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleVisual {
    Resting,
    Enlarged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineCircle {
    pub year: i32,
    pub count: usize,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: String,
}

impl TimelineCircle {
    pub fn radius_for(&self, visual: CircleVisual, enlarge_factor: f64) -> f64 {
        match visual {
            CircleVisual::Resting => self.radius,
            CircleVisual::Enlarged => self.radius * enlarge_factor,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub year: i32,
    pub x: f64,
}

/// Everything needed to draw the timeline strip for one render width.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineScene {
    pub width: f64,
    pub circles: Vec<TimelineCircle>,
    pub ticks: Vec<AxisTick>,
}

/// Scales for one timeline render.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineScales {
    pub years: BandScale<i32>,
    pub radius: SqrtScale,
    pub color: ColorRamp,
}

impl TimelineScales {
    pub fn new(aggregates: &[YearAggregate], width: f64, config: &ChartConfig) -> Self {
        let years = BandScale::new(
            aggregates.iter().map(|a| a.year).collect(),
            (config.margin.left, width - config.margin.right),
            0.1,
        );
        let counts = extent(aggregates.iter().map(|a| a.title_count as f64)).unwrap_or((0.0, 1.0));
        let radius = SqrtScale::new(
            counts,
            (config.min_timeline_radius, config.max_timeline_radius),
        );
        Self {
            years,
            radius,
            color: count_colors(config),
        }
    }
}

/// Colour ramp keyed by titles per year.
pub fn count_colors(config: &ChartConfig) -> ColorRamp {
    ColorRamp::saturated(
        config.low_count_colour,
        config.high_count_colour,
        (0.0, config.colour_domain_max),
    )
}

impl TimelineScene {
    pub fn build(aggregates: &[YearAggregate], width: f64, config: &ChartConfig) -> Self {
        let scales = TimelineScales::new(aggregates, width, config);
        let cy = config.timeline_center_y();

        let mut circles = Vec::with_capacity(aggregates.len());
        let mut ticks = Vec::with_capacity(aggregates.len());
        for aggregate in aggregates {
            let Some(cx) = scales.years.center(&aggregate.year) else {
                continue;
            };
            let count = aggregate.title_count as f64;
            circles.push(TimelineCircle {
                year: aggregate.year,
                count: aggregate.title_count,
                cx,
                cy,
                radius: scales.radius.scale(count),
                color: scales.color.hex(count),
            });
            ticks.push(AxisTick {
                year: aggregate.year,
                x: cx,
            });
        }

        Self {
            width,
            circles,
            ticks,
        }
    }
}

struct CircleView {
    year: i32,
    cx: String,
    cy: String,
    r: String,
    color: String,
    label: String,
}

#[component]
pub fn TimelineLayer(scene: TimelineScene, selection: Signal<SelectionState>) -> Element {
    let mut selection = selection;
    let config = ChartConfig::default();
    let mut enlarged = use_signal(|| Option::<i32>::None);
    let enlarged_year = enlarged();

    let views: Vec<CircleView> = scene
        .circles
        .iter()
        .map(|circle| {
            let visual = if enlarged_year == Some(circle.year) {
                CircleVisual::Enlarged
            } else {
                CircleVisual::Resting
            };
            CircleView {
                year: circle.year,
                cx: svg_number(circle.cx),
                cy: svg_number(circle.cy),
                r: svg_number(circle.radius_for(visual, config.enlarge_factor)),
                color: circle.color.clone(),
                label: circle.count.to_string(),
            }
        })
        .collect();

    let text_colour = config.axis_text_colour;

    rsx! {
        g { class: "timeline",
            for CircleView { year, cx, cy, r, color, label } in views {
                g { key: "{year}",
                    circle {
                        class: "year-circles",
                        r: "{r}",
                        cx: "{cx}",
                        cy: "{cy}",
                        fill: "{color}",
                        fill_opacity: "1",
                        stroke: "{color}",
                        stroke_width: "8",
                        stroke_opacity: "0.5",
                        onmouseenter: move |_| enlarged.set(Some(year)),
                        onmouseleave: move |_| enlarged.set(None),
                        onclick: move |_| {
                            let changed = selection.with_mut(|state| state.select_year(year));
                            if changed {
                                tracing::debug!(year, "timeline year selected");
                            }
                            enlarged.set(Some(year));
                        },
                    }
                    text {
                        class: "circles-text",
                        id: "{year}",
                        x: "{cx}",
                        y: "{cy}",
                        dy: ".35em",
                        fill: "{text_colour}",
                        font_size: "8px",
                        text_anchor: "middle",
                        opacity: "0.8",
                        cursor: "default",
                        pointer_events: "none",
                        "{label}"
                    }
                }
            }
        }
    }
}
