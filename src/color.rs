// src/color.rs

//! Defines the `Rgb` color triple and hex-string parsing helpers.

use log::warn;

/// A single color: three channel values, each in `[0.0, 1.0]`.
///
/// Colormap sources may carry additional channels (e.g. alpha); anything
/// beyond the first three is discarded before a color reaches this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb { r, g, b }
    }

    /// Parses a `#RRGGBB` hex string into an `Rgb` with each channel
    /// scaled from `0..=255` down to `[0.0, 1.0]`.
    ///
    /// Shorthand (`#RGB`) and alpha (`#RRGGBBAA`) forms are not accepted:
    /// palette literals in this crate are always full six-digit hex.
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = match hex.strip_prefix('#') {
            Some(d) => d,
            None => return Err(format!("color '{}' does not start with '#'", hex)),
        };
        if digits.len() != 6 {
            return Err(format!(
                "color '{}' must be #RRGGBB (6 hex digits, got {})",
                hex,
                digits.len()
            ));
        }
        let channel = |range: std::ops::Range<usize>| -> Result<f64, String> {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|e| format!("color '{}' has a non-hex channel: {}", hex, e))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Linear interpolation between `self` and `other` at `t` in `[0, 1]`.
    ///
    /// Stop-table sampling never produces a `t` outside the unit interval,
    /// so an out-of-range value is clamped and logged.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if (0.0..=1.0).contains(&t) {
            t
        } else {
            warn!("Rgb::lerp called with t={} outside [0, 1]; clamping.", t);
            t.clamp(0.0, 1.0)
        };
        Rgb {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}
