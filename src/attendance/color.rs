//! Rate → fill colour.
//!
//! `r = b = 240 - (rate * 8)² - rate * 64`, `g = 240`. Zero attendance is
//! a pale grey; full attendance is green. Channels are not clamped:
//! callers receive the raw values, which leave `0..=255` for rates
//! outside `0..=1`.

use serde::{Deserialize, Serialize};

/// An RGB triple with unclamped `f64` channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// CSS `rgb(r, g, b)` text.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Fill colour for an attendance rate.
pub fn color_for_rate(rate: f64) -> Rgb {
    let scaled = rate * 8.0;
    let r = 240.0 - scaled * scaled - rate * 64.0;
    Rgb { r, g: 240.0, b: r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(
            color_for_rate(0.0),
            Rgb {
                r: 240.0,
                g: 240.0,
                b: 240.0
            }
        );
        assert_eq!(
            color_for_rate(1.0),
            Rgb {
                r: 112.0,
                g: 240.0,
                b: 112.0
            }
        );
    }

    #[test]
    fn test_midpoint() {
        // 240 - 16 - 32
        assert!((color_for_rate(0.5).r - 192.0).abs() < 1e-10);
    }

    #[test]
    fn test_unclamped() {
        // 240 - 256 - 128
        assert!((color_for_rate(2.0).r - -144.0).abs() < 1e-10);
    }

    #[test]
    fn test_css() {
        assert_eq!(color_for_rate(0.0).css(), "rgb(240, 240, 240)");
        assert_eq!(color_for_rate(0.5).css(), "rgb(192, 240, 192)");
    }
}
