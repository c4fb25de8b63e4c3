use serde::{Deserialize, Serialize};
use tsify::Tsify;

use super::r2::R2;

/// Quadratic Bézier segment.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct QuadBezier {
    pub start: R2,
    pub control: R2,
    pub end: R2,
}

impl QuadBezier {
    /// Point at parameter `t ∈ [0, 1]`: `(1-t)²·start + 2t(1-t)·control + t²·end`.
    pub fn at(&self, t: f64) -> R2 {
        let mt = 1. - t;
        self.start * (mt * mt) + self.control * (2. * t * mt) + self.end * (t * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn endpoints_and_midpoint() {
        let b = QuadBezier {
            start: R2::new(0., 0.),
            control: R2::new(1., 2.),
            end: R2::new(2., 0.),
        };
        assert_eq!(b.at(0.), b.start);
        assert_eq!(b.at(1.), b.end);
        assert_eq!(b.at(0.5), R2::new(1., 1.));
    }
}
