//! Two-stop colour ramp used for per-year counts.
//!
//! Both stops get one step of extra saturation (chroma +18 in CIE LCh) before
//! the ramp is built; values are then blended linearly in sRGB and clamped to
//! the domain.

use std::fmt;

const XN: f64 = 0.950_470;
const YN: f64 = 1.0;
const ZN: f64 = 1.088_830;
const T0: f64 = 4.0 / 29.0;
const T1: f64 = 6.0 / 29.0;
const T2: f64 = 3.0 * T1 * T1;
const T3: f64 = T1 * T1 * T1;

/// Chroma added by a single saturation step.
const SATURATE_STEP: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Accepts `#rgb` and `#rrggbb`, with or without the hash.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return None,
        };
        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)? as f64,
            g: channel(2)? as f64,
            b: channel(4)? as f64,
        })
    }

    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    pub fn saturate(self, amount: f64) -> Rgb {
        let (l, c, h) = self.to_lch();
        Rgb::from_lch(l, (c + SATURATE_STEP * amount).max(0.0), h)
    }

    fn to_lab(self) -> (f64, f64, f64) {
        let r = srgb_to_linear(self.r);
        let g = srgb_to_linear(self.g);
        let b = srgb_to_linear(self.b);
        let x = xyz_to_lab((0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b) / XN);
        let y = xyz_to_lab((0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b) / YN);
        let z = xyz_to_lab((0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b) / ZN);
        (116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
    }

    fn from_lab(l: f64, a: f64, b: f64) -> Rgb {
        let y = (l + 16.0) / 116.0;
        let x = y + a / 500.0;
        let z = y - b / 200.0;
        let x = XN * lab_to_xyz(x);
        let y = YN * lab_to_xyz(y);
        let z = ZN * lab_to_xyz(z);
        Rgb {
            r: linear_to_srgb(3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z),
            g: linear_to_srgb(-0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z),
            b: linear_to_srgb(0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z),
        }
    }

    fn to_lch(self) -> (f64, f64, f64) {
        let (l, a, b) = self.to_lab();
        let c = (a * a + b * b).sqrt();
        let h = (b.atan2(a).to_degrees() + 360.0) % 360.0;
        (l, c, h)
    }

    fn from_lch(l: f64, c: f64, h: f64) -> Rgb {
        let h = h.to_radians();
        Rgb::from_lab(l, h.cos() * c, h.sin() * c)
    }

    fn channel(v: f64) -> u8 {
        v.round().clamp(0.0, 255.0) as u8
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            Rgb::channel(self.r),
            Rgb::channel(self.g),
            Rgb::channel(self.b)
        )
    }
}

fn srgb_to_linear(v: f64) -> f64 {
    let v = v / 255.0;
    if v <= 0.040_45 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(v: f64) -> f64 {
    let v = if v <= 0.003_04 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    };
    (255.0 * v).clamp(0.0, 255.0)
}

fn xyz_to_lab(t: f64) -> f64 {
    if t > T3 {
        t.cbrt()
    } else {
        t / T2 + T0
    }
}

fn lab_to_xyz(t: f64) -> f64 {
    if t > T1 {
        t * t * t
    } else {
        T2 * (t - T0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRamp {
    low: Rgb,
    high: Rgb,
    domain: (f64, f64),
}

impl ColorRamp {
    pub fn new(low: Rgb, high: Rgb, domain: (f64, f64)) -> Self {
        Self { low, high, domain }
    }

    /// Ramp between two hex colours, each saturated one step. Unparseable
    /// colours fall back to black.
    pub fn saturated(low: &str, high: &str, domain: (f64, f64)) -> Self {
        let parse = |hex: &str| {
            Rgb::from_hex(hex).unwrap_or_else(|| {
                tracing::warn!(hex, "invalid colour, using black");
                Rgb { r: 0.0, g: 0.0, b: 0.0 }
            })
        };
        Self::new(parse(low).saturate(1.0), parse(high).saturate(1.0), domain)
    }

    /// Position of `value` along the ramp in `[0, 1]`.
    pub fn position(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        if d1 == d0 || !value.is_finite() {
            return 0.0;
        }
        ((value - d0) / (d1 - d0)).clamp(0.0, 1.0)
    }

    pub fn color(&self, value: f64) -> Rgb {
        self.low.lerp(self.high, self.position(value))
    }

    pub fn hex(&self, value: f64) -> String {
        self.color(value).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> ColorRamp {
        ColorRamp::saturated("#4361ee", "#f72585", (0.0, 1133.0))
    }

    #[test]
    fn hex_round_trip() {
        let rgb = Rgb::from_hex("#4361ee").unwrap();
        assert_eq!(rgb.to_string(), "#4361ee");
        assert_eq!(Rgb::from_hex("fff").unwrap().to_string(), "#ffffff");
        assert!(Rgb::from_hex("#12").is_none());
        assert!(Rgb::from_hex("#zzzzzz").is_none());
    }

    #[test]
    fn lab_conversion_is_stable() {
        let rgb = Rgb::from_hex("#f72585").unwrap();
        let (l, a, b) = rgb.to_lab();
        assert_eq!(Rgb::from_lab(l, a, b).to_string(), "#f72585");
    }

    #[test]
    fn saturating_raises_chroma() {
        let rgb = Rgb::from_hex("#4361ee").unwrap();
        let (_, before, _) = rgb.to_lch();
        let (_, after, _) = rgb.saturate(1.0).to_lch();
        assert!(after > before);
    }

    #[test]
    fn ends_of_the_domain_hit_the_stops() {
        let ramp = ramp();
        assert_eq!(ramp.hex(0.0), ramp.low.to_string());
        assert_eq!(ramp.hex(1133.0), ramp.high.to_string());
        // Values outside the domain clamp.
        assert_eq!(ramp.hex(-20.0), ramp.hex(0.0));
        assert_eq!(ramp.hex(5000.0), ramp.hex(1133.0));
    }

    #[test]
    fn intensity_is_monotonic_in_count() {
        let ramp = ramp();
        let mut last = -1.0;
        for count in (0..=1133).step_by(7) {
            let t = ramp.position(count as f64);
            assert!(t >= last);
            last = t;
        }
        // Moving towards pink means more red and less blue.
        let low = ramp.color(100.0);
        let high = ramp.color(900.0);
        assert!(high.r >= low.r);
        assert!(high.b <= low.b);
    }
}
