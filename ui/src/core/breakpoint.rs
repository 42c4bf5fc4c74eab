//! Viewport width tiers. The chart is drawn at one of three fixed widths; any
//! narrower viewport gets a notice instead.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Large,
    Medium,
    Small,
    Mobile,
}

impl Breakpoint {
    /// Upper bounds are inclusive: exactly 1400 is Medium, exactly 700 is Mobile.
    pub fn from_width(width: f64) -> Self {
        if !width.is_finite() {
            return Self::Mobile;
        }
        if width > 1400.0 {
            Self::Large
        } else if width > 1000.0 {
            Self::Medium
        } else if width > 700.0 {
            Self::Small
        } else {
            Self::Mobile
        }
    }

    /// Chart width for this tier, `None` when the chart isn't shown.
    pub fn render_width(self) -> Option<f64> {
        match self {
            Self::Large => Some(1400.0),
            Self::Medium => Some(1000.0),
            Self::Small => Some(700.0),
            Self::Mobile => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Large => "breakpoint--large",
            Self::Medium => "breakpoint--medium",
            Self::Small => "breakpoint--small",
            Self::Mobile => "breakpoint--mobile",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representative_widths() {
        assert_eq!(Breakpoint::from_width(1500.0), Breakpoint::Large);
        assert_eq!(Breakpoint::from_width(1200.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(800.0), Breakpoint::Small);
        assert_eq!(Breakpoint::from_width(500.0), Breakpoint::Mobile);
    }

    #[test]
    fn boundaries_fall_into_the_lower_tier() {
        assert_eq!(Breakpoint::from_width(1400.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(1400.5), Breakpoint::Large);
        assert_eq!(Breakpoint::from_width(1000.0), Breakpoint::Small);
        assert_eq!(Breakpoint::from_width(700.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(701.0), Breakpoint::Small);
    }

    #[test]
    fn render_width_is_monotonic_in_viewport_width() {
        let mut last = 0.0;
        for w in (0..3000).step_by(25) {
            let width = Breakpoint::from_width(w as f64).render_width().unwrap_or(0.0);
            assert!(width >= last, "render width shrank at viewport {w}");
            last = width;
        }
    }

    #[test]
    fn odd_widths_hide_the_chart() {
        assert_eq!(Breakpoint::from_width(f64::NAN), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(-10.0).render_width(), None);
    }
}
