//! SVG chart: scales, the collision layout and the Dioxus layers that draw
//! the timeline and the per-year bubble cluster.

pub mod axis;
pub mod color;
pub mod detail;
pub mod graph;
pub mod scale;
pub mod simulation;
pub mod timeline;
pub mod tooltip;

pub use graph::Graph;
