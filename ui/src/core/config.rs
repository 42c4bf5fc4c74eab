//! Fixed chart configuration. Everything the renderers need to lay out the
//! timeline and the per-year bubble cluster lives here so the numbers are not
//! scattered through the view code.

/// Space reserved around the timeline band scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub right: f64,
    pub left: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Height of the rounded timeline strip at the top of the SVG.
    pub timeline_height: f64,
    /// Total SVG height; the width comes from the active breakpoint.
    pub height: f64,
    pub margin: Margin,
    pub min_timeline_radius: f64,
    pub max_timeline_radius: f64,
    pub min_bubble_radius: f64,
    pub max_bubble_radius: f64,
    /// Radius every bubble starts from before it grows into place.
    pub initial_bubble_radius: f64,
    /// Hover / click enlargement factor for timeline circles.
    pub enlarge_factor: f64,
    pub background_colour: &'static str,
    pub low_count_colour: &'static str,
    pub high_count_colour: &'static str,
    pub axis_text_colour: &'static str,
    /// Upper bound of the colour ramp domain (lower bound is zero).
    pub colour_domain_max: f64,
    /// Years before this are left off the timeline.
    pub min_year: i32,
    pub default_year: i32,
    /// Pause before the bubbles start to relax and grow.
    pub layout_delay_ms: u64,
    pub frame_ms: u64,
    pub grow_duration_ms: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            timeline_height: 100.0,
            height: 800.0,
            margin: Margin {
                top: 0.0,
                bottom: 45.0,
                right: 40.0,
                left: 40.0,
            },
            min_timeline_radius: 2.0,
            max_timeline_radius: 15.0,
            min_bubble_radius: 3.0,
            max_bubble_radius: 20.0,
            initial_bubble_radius: 1.0,
            enlarge_factor: 1.5,
            background_colour: "#010B14",
            low_count_colour: "#4361ee",
            high_count_colour: "#f72585",
            axis_text_colour: "#fff",
            colour_domain_max: 1133.0,
            min_year: 1960,
            default_year: 2020,
            layout_delay_ms: 100,
            frame_ms: 16,
            grow_duration_ms: 250.0,
        }
    }
}

impl ChartConfig {
    /// Vertical centre line of the timeline circles.
    pub fn timeline_center_y(&self) -> f64 {
        self.timeline_height / 3.0
    }

    /// Where the year axis sits, just under the circles.
    pub fn axis_offset_y(&self) -> f64 {
        self.timeline_height - self.margin.bottom
    }

    /// Origin of the bubble cluster for a given render width.
    pub fn cluster_origin(&self, width: f64) -> (f64, f64) {
        (width / 2.0, self.height / 1.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_sits_below_circles() {
        let config = ChartConfig::default();
        assert!(config.axis_offset_y() > config.timeline_center_y());
        assert_eq!(config.axis_offset_y(), 55.0);
    }

    #[test]
    fn cluster_is_centered_horizontally() {
        let config = ChartConfig::default();
        let (x, y) = config.cluster_origin(1000.0);
        assert_eq!(x, 500.0);
        assert!(y > config.timeline_height);
    }
}
