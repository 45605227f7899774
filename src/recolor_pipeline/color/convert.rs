//! RGB <-> HSV conversion.
//!
//! Both directions work on normalized floating point and round back to
//! integer components. Rounding is half-up, so `-0.5` rounds to `0`. HSV
//! components are whole degrees and whole percents, which makes a full
//! RGB -> HSV -> RGB trip drift by up to 3 units per channel. The other
//! direction keeps value exact, keeps saturation within 1 from 22% value
//! up, and keeps hue within 1 degree once `s * v >= 1500` (percent units).
//! Darker or greyer colors can lose saturation and hue entirely. Achromatic
//! colors (saturation or value 0) always report hue 0.

use crate::recolor_pipeline::color::types::{ColorHsv, ColorRgb, HUE_LIMIT};

const CHANNEL_MAX: f64 = 255.0;

fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn to_channel(normalized: f64) -> u8 {
    round_half_up(normalized * CHANNEL_MAX).clamp(0.0, CHANNEL_MAX) as u8
}

pub fn rgb_to_hsv(rgb: ColorRgb) -> ColorHsv {
    let r = rgb.r as f64 / CHANNEL_MAX;
    let g = rgb.g as f64 / CHANNEL_MAX;
    let b = rgb.b as f64 / CHANNEL_MAX;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let sector = if diff == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / diff) % 6.0
    } else if max == g {
        (b - r) / diff + 2.0
    } else {
        (r - g) / diff + 4.0
    };

    let mut h = round_half_up(sector * 60.0);
    if h < 0.0 {
        h += HUE_LIMIT as f64;
    }
    if h >= HUE_LIMIT as f64 {
        h -= HUE_LIMIT as f64;
    }

    let s = if max == 0.0 {
        0.0
    } else {
        round_half_up(diff / max * 100.0)
    };
    let v = round_half_up(max * 100.0);

    ColorHsv::from_parts(h as u16, s as u8, v as u8)
}

pub fn hsv_to_rgb(hsv: ColorHsv) -> ColorRgb {
    let h = hsv.h() as f64 / HUE_LIMIT as f64;
    let s = hsv.s() as f64 / 100.0;
    let v = hsv.v() as f64 / 100.0;

    let c = v * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 1.0 / 6.0 {
        (c, x, 0.0)
    } else if h < 2.0 / 6.0 {
        (x, c, 0.0)
    } else if h < 3.0 / 6.0 {
        (0.0, c, x)
    } else if h < 4.0 / 6.0 {
        (0.0, x, c)
    } else if h < 5.0 / 6.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    ColorRgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

impl From<ColorRgb> for ColorHsv {
    fn from(rgb: ColorRgb) -> Self {
        rgb_to_hsv(rgb)
    }
}

impl From<ColorHsv> for ColorRgb {
    fn from(hsv: ColorHsv) -> Self {
        hsv_to_rgb(hsv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsv(h: u16, s: u8, v: u8) -> ColorHsv {
        ColorHsv::new(h, s, v).unwrap()
    }

    fn hue_distance(a: u16, b: u16) -> u16 {
        let d = a.abs_diff(b);
        d.min(HUE_LIMIT - d)
    }

    #[test]
    fn primaries_and_secondaries() {
        let cases = [
            ((255, 0, 0), (0, 100, 100)),
            ((0, 255, 0), (120, 100, 100)),
            ((0, 0, 255), (240, 100, 100)),
            ((255, 255, 0), (60, 100, 100)),
            ((0, 255, 255), (180, 100, 100)),
            ((255, 0, 255), (300, 100, 100)),
        ];
        for ((r, g, b), (h, s, v)) in cases {
            let rgb = ColorRgb::new(r, g, b);
            assert_eq!(rgb_to_hsv(rgb), hsv(h, s, v), "{}", rgb);
            assert_eq!(hsv_to_rgb(hsv(h, s, v)), rgb);
        }
    }

    #[test]
    fn achromatic_colors_have_zero_hue() {
        assert_eq!(rgb_to_hsv(ColorRgb::new(0, 0, 0)), hsv(0, 0, 0));
        assert_eq!(rgb_to_hsv(ColorRgb::new(255, 255, 255)), hsv(0, 0, 100));
        assert_eq!(rgb_to_hsv(ColorRgb::new(128, 128, 128)), hsv(0, 0, 50));
        assert_eq!(hsv_to_rgb(hsv(200, 50, 0)), ColorRgb::new(0, 0, 0));
        assert_eq!(hsv_to_rgb(hsv(0, 0, 50)), ColorRgb::new(128, 128, 128));
    }

    #[test]
    fn half_step_values_round_up() {
        // 120deg at 50% value lands exactly on 127.5
        assert_eq!(hsv_to_rgb(hsv(120, 100, 50)), ColorRgb::new(0, 128, 0));
    }

    #[test]
    fn negative_hue_wraps_into_range() {
        assert_eq!(rgb_to_hsv(ColorRgb::new(255, 0, 2)).h(), 0);
        assert_eq!(rgb_to_hsv(ColorRgb::new(255, 0, 3)).h(), 359);
        assert_eq!(hsv_to_rgb(hsv(359, 100, 100)), ColorRgb::new(255, 0, 4));
    }

    #[test]
    fn mixed_colors() {
        assert_eq!(rgb_to_hsv(ColorRgb::new(10, 20, 30)), hsv(210, 67, 12));
        assert_eq!(rgb_to_hsv(ColorRgb::new(200, 100, 50)), hsv(20, 75, 78));
        assert_eq!(rgb_to_hsv(ColorRgb::new(0x12, 0x34, 0x56)), hsv(210, 79, 34));
    }

    #[test]
    fn rgb_round_trip_stays_within_quantization() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let rgb = ColorRgb::new(r, g, b);
                    let back = hsv_to_rgb(rgb_to_hsv(rgb));
                    assert!(back.r.abs_diff(r) <= 3, "{} -> {}", rgb, back);
                    assert!(back.g.abs_diff(g) <= 3, "{} -> {}", rgb, back);
                    assert!(back.b.abs_diff(b) <= 3, "{} -> {}", rgb, back);
                }
            }
        }
    }

    #[test]
    fn hsv_round_trip_bounds() {
        for h in 0..HUE_LIMIT {
            for s in 0..=100u8 {
                for v in 0..=100u8 {
                    let original = hsv(h, s, v);
                    let back = rgb_to_hsv(hsv_to_rgb(original));
                    assert_eq!(back.v(), v, "{} -> {}", original, back);
                    if v >= 22 {
                        assert!(back.s().abs_diff(s) <= 1, "{} -> {}", original, back);
                    }
                    // hue only survives once the chroma spans enough 8-bit steps
                    if s as u32 * v as u32 >= 1500 {
                        assert!(hue_distance(back.h(), h) <= 1, "{} -> {}", original, back);
                    }
                }
            }
        }
    }

    #[test]
    fn dark_colors_lose_saturation_and_hue() {
        let original = hsv(200, 2, 1);
        assert_eq!(hsv_to_rgb(original), ColorRgb::new(2, 3, 3));
        assert_eq!(rgb_to_hsv(ColorRgb::new(2, 3, 3)), hsv(180, 33, 1));

        assert_eq!(rgb_to_hsv(hsv_to_rgb(hsv(54, 20, 21))).h(), 49);
    }
}
