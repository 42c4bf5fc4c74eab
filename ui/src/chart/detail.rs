//! Drill-down bubble cluster for the selected year.
//!
//! A [`BubbleCluster`] holds the titles of one year, their target radii and
//! the collision simulation that spreads them out. [`DetailLayer`] draws the
//! cluster and drives it frame by frame: after a short pause the simulation
//! starts ticking while every bubble grows from a dot to its popularity size.

use dioxus::prelude::*;

use crate::chart::scale::SqrtScale;
use crate::chart::simulation::{CollisionSimulation, Point, SimulationConfig};
use crate::chart::timeline::count_colors;
use crate::core::config::ChartConfig;
use crate::core::dataset::{AnimeRecord, Dataset};
use crate::core::format::svg_number;
use crate::core::platform::spawn_future;
use crate::core::selection::{detail_records, SelectionState};
use crate::core::timing;

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub record: AnimeRecord,
    pub target_radius: f64,
}

#[derive(Debug, Clone)]
pub struct BubbleCluster {
    pub year: i32,
    pub color: String,
    bubbles: Vec<Bubble>,
    simulation: CollisionSimulation,
    initial_radius: f64,
    grow_duration_ms: f64,
    /// Eased growth progress in `[0, 1]`.
    growth: f64,
}

/// Popularity → bubble radius, over the whole collection.
pub fn popularity_scale(dataset: &Dataset, config: &ChartConfig) -> SqrtScale {
    SqrtScale::new(
        dataset.popularity_extent().unwrap_or((0.0, 1.0)),
        (config.min_bubble_radius, config.max_bubble_radius),
    )
}

pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

impl BubbleCluster {
    pub fn build(dataset: &Dataset, year: i32, config: &ChartConfig) -> Self {
        let scale = popularity_scale(dataset, config);
        let floor = scale.domain().0;
        let bubbles: Vec<Bubble> = detail_records(&dataset.all, year)
            .into_iter()
            .map(|record| {
                let popularity = record.popularity.map(|p| p as f64).unwrap_or(floor);
                Bubble {
                    target_radius: scale.scale(popularity),
                    record,
                }
            })
            .collect();

        // Collision radius leaves a one unit gap between neighbours.
        let radii = bubbles.iter().map(|b| 1.0 + b.target_radius).collect();
        let simulation = CollisionSimulation::new(radii, SimulationConfig::default());
        let color = count_colors(config).hex(dataset.year_count(year) as f64);

        Self {
            year,
            color,
            bubbles,
            simulation,
            initial_radius: config.initial_bubble_radius,
            grow_duration_ms: config.grow_duration_ms,
            growth: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn positions(&self) -> Vec<Point> {
        self.simulation.positions()
    }

    pub fn radius(&self, index: usize) -> f64 {
        self.bubbles.get(index).map_or(0.0, |b| {
            self.initial_radius + (b.target_radius - self.initial_radius) * self.growth
        })
    }

    pub fn is_finished(&self) -> bool {
        self.growth >= 1.0 && self.simulation.is_settled()
    }

    /// Advance one frame, `elapsed_ms` after the animation started. Returns
    /// `false` once both the growth and the relaxation are done.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        let t = if self.grow_duration_ms > 0.0 {
            elapsed_ms / self.grow_duration_ms
        } else {
            1.0
        };
        self.growth = ease_cubic_in_out(t);
        self.simulation.tick();
        !self.is_finished()
    }
}

/// Numbers layout runs so a run can tell it has been replaced by a newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRuns {
    latest: u64,
}

impl LayoutRuns {
    /// Start a run; every earlier run is now superseded.
    pub fn start(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, run: u64) -> bool {
        self.latest == run
    }
}

/// One animation frame of `run`. Returns `false` when the loop should stop:
/// the run was superseded, the slot is empty, or the cluster has finished.
/// A superseded run leaves the cluster untouched.
pub fn advance_run(
    runs: &LayoutRuns,
    run: u64,
    slot: &mut Option<BubbleCluster>,
    elapsed_ms: f64,
) -> bool {
    if !runs.is_current(run) {
        tracing::debug!(run, "bubble layout superseded");
        return false;
    }
    match slot {
        Some(cluster) => cluster.advance(elapsed_ms),
        None => false,
    }
}

struct BubbleView {
    id: u64,
    record: AnimeRecord,
    cx: String,
    cy: String,
    r: String,
    outlined: bool,
}

/// Bubble cluster for `year`. A new year throws away the running animation
/// and starts over; re-rendering with the same year keeps it.
#[component]
pub fn DetailLayer(year: i32, width: f64, selection: Signal<SelectionState>) -> Element {
    let mut selection = selection;
    let config = ChartConfig::default();
    let mut cluster = use_signal(|| Option::<BubbleCluster>::None);
    let mut runs = use_signal(LayoutRuns::default);

    let delay_ms = config.layout_delay_ms;
    let frame_ms = config.frame_ms;
    use_effect(use_reactive((&year,), move |(year,)| {
        let run = runs.write().start();
        let next = BubbleCluster::build(Dataset::shared(), year, &ChartConfig::default());
        tracing::debug!(year, bubbles = next.len(), run, "starting bubble layout");
        cluster.set(Some(next));

        spawn_future(async move {
            timing::sleep_ms(delay_ms).await;
            let started = timing::now_ms();
            loop {
                let elapsed = timing::now_ms() - started;
                let current = *runs.peek();
                if !cluster.with_mut(|slot| advance_run(&current, run, slot, elapsed)) {
                    break;
                }
                timing::sleep_ms(frame_ms).await;
            }
        });
    }));

    let (origin_x, origin_y) = config.cluster_origin(width);
    let state = selection.read();
    let guard = cluster.read();
    let (color, views) = match guard.as_ref() {
        Some(cluster) => {
            let views: Vec<BubbleView> = cluster
                .bubbles()
                .iter()
                .zip(cluster.positions())
                .enumerate()
                .map(|(index, (bubble, point))| BubbleView {
                    id: bubble.record.id,
                    record: bubble.record.clone(),
                    cx: svg_number(point.x),
                    cy: svg_number(point.y),
                    r: svg_number(cluster.radius(index)),
                    outlined: state.is_hovered(bubble.record.id),
                })
                .collect();
            (cluster.color.clone(), views)
        }
        None => (String::new(), Vec::new()),
    };
    drop(guard);
    drop(state);

    rsx! {
        g {
            class: "anime-cluster",
            transform: "translate({svg_number(origin_x)}, {svg_number(origin_y)})",
            for BubbleView { id, record, cx, cy, r, outlined } in views {
                circle {
                    key: "{id}",
                    class: "anime-circle",
                    r: "{r}",
                    cx: "{cx}",
                    cy: "{cy}",
                    fill: "{color}",
                    stroke: if outlined { "white" } else { "none" },
                    stroke_width: if outlined { "3" } else { "0" },
                    onmouseenter: move |_| {
                        let record = record.clone();
                        selection.with_mut(|state| state.hover(record));
                    },
                    onmouseleave: move |_| selection.with_mut(|state| state.clear_hover()),
                }
            }
        }
    }
}
