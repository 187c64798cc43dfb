//! Aspect sizing and angle conversion.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale to the largest size that fits entirely inside `bounds`,
    /// keeping the aspect ratio.
    #[must_use]
    pub fn scaled_to_fit(self, bounds: Size) -> Size {
        let ratio = (bounds.width / self.width).min(bounds.height / self.height);
        self.scaled_by(ratio)
    }

    /// Scale to the smallest size that covers `bounds` entirely, keeping the
    /// aspect ratio.
    #[must_use]
    pub fn scaled_to_fill(self, bounds: Size) -> Size {
        let ratio = (bounds.width / self.width).max(bounds.height / self.height);
        self.scaled_by(ratio)
    }

    fn scaled_by(self, ratio: f64) -> Size {
        Size {
            width: self.width * ratio,
            height: self.height * ratio,
        }
    }
}

#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}
