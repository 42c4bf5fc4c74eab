//! Scales mapping data values onto SVG coordinates.

/// Evenly spaced bands over an ordered, discrete domain.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl<T: PartialEq> BandScale<T> {
    /// `padding` is used for both the inner gaps and the outer edges; bands are
    /// centred in the range.
    pub fn new(domain: Vec<T>, range: (f64, f64), padding: f64) -> Self {
        let (lo, hi) = range;
        let n = domain.len() as f64;
        let padding = padding.clamp(0.0, 1.0);
        let step = (hi - lo) / (n - padding + padding * 2.0).max(1.0);
        let start = lo + (hi - lo - step * (n - padding)) * 0.5;
        Self {
            domain,
            start,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Left edge of the band for `value`.
    pub fn position(&self, value: &T) -> Option<f64> {
        self.domain
            .iter()
            .position(|d| d == value)
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn center(&self, value: &T) -> Option<f64> {
        self.position(value).map(|x| x + self.bandwidth / 2.0)
    }
}

/// Square-root scale; keeps circle areas proportional to the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Not clamped. A collapsed domain maps everything to the middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = (signed_sqrt(self.domain.0), signed_sqrt(self.domain.1));
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 || !span.is_finite() {
            0.5
        } else {
            (signed_sqrt(value) - d0) / span
        };
        r0 + (r1 - r0) * t
    }
}

fn signed_sqrt(x: f64) -> f64 {
    if x < 0.0 {
        -(-x).sqrt()
    } else {
        x.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_fill_the_range() {
        let scale = BandScale::new(vec![1999, 2000, 2001], (40.0, 660.0), 0.1);
        let first = scale.position(&1999).unwrap();
        let last = scale.position(&2001).unwrap() + scale.bandwidth();
        // Outer padding is symmetric.
        assert!((first - 40.0 - (660.0 - last)).abs() < 1e-9);
        assert!((scale.bandwidth() - scale.step() * 0.9).abs() < 1e-9);
        assert!(scale.position(&1990).is_none());
    }

    #[test]
    fn band_centers_increase_with_domain_order() {
        let years: Vec<i32> = (1960..2021).collect();
        let scale = BandScale::new(years.clone(), (40.0, 1360.0), 0.1);
        let centers: Vec<f64> = years.iter().map(|y| scale.center(y).unwrap()).collect();
        assert!(centers.windows(2).all(|w| w[0] < w[1]));
        assert!(centers[0] > 40.0 && *centers.last().unwrap() < 1360.0);
    }

    #[test]
    fn single_band_is_centred() {
        let scale = BandScale::new(vec![2020], (0.0, 100.0), 0.1);
        assert!((scale.center(&2020).unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn sqrt_scale_hits_its_bounds() {
        let scale = SqrtScale::new((1.0, 1133.0), (2.0, 15.0));
        assert!((scale.scale(1.0) - 2.0).abs() < 1e-9);
        assert!((scale.scale(1133.0) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn sqrt_scale_is_monotonic() {
        let scale = SqrtScale::new((3.0, 2_500_000.0), (3.0, 20.0));
        let mut last = f64::MIN;
        for v in (0..2_500_000).step_by(9_973) {
            let r = scale.scale(v as f64);
            assert!(r >= last);
            last = r;
        }
    }

    #[test]
    fn collapsed_domain_uses_midpoint() {
        let scale = SqrtScale::new((5.0, 5.0), (2.0, 16.0));
        assert_eq!(scale.scale(5.0), 9.0);
        assert_eq!(scale.scale(500.0), 9.0);
    }
}
