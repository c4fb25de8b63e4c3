use std::{ops::{Mul, Div}, fmt::{Display, Formatter, self}};
use approx::{AbsDiffEq, RelativeEq};

use serde::{Deserialize, Serialize};
use tsify::Tsify;

#[derive(
    Debug, Copy, Clone, Default, PartialEq,
    Serialize, Deserialize, Tsify,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Neg,
)]
pub struct R2 {
    pub x: f64,
    pub y: f64,
}

impl R2 {
    pub fn new(x: f64, y: f64) -> Self {
        R2 { x, y }
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, o: &R2) -> f64 {
        (*self - *o).norm()
    }
}

impl Display for R2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl AbsDiffEq for R2 {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for R2 {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative) && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl Mul<f64> for R2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        R2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Div<f64> for R2 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        R2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn arithmetic() {
        let p = R2::new(1., 2.);
        let q = R2::new(4., 6.);
        assert_eq!(q - p, R2::new(3., 4.));
        assert_eq!(q + p, R2::new(5., 8.));
        assert_eq!(-p, R2::new(-1., -2.));
        assert_eq!(p * 2., R2::new(2., 4.));
        assert_eq!(q / 2., R2::new(2., 3.));
        assert_eq!(p.distance(&q), 5.);
        assert_eq!(p.to_string(), "(1.000, 2.000)");
    }

    #[test]
    fn serde() {
        let p = R2::new(0.5, -1.);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"x":0.5,"y":-1.0}"#);
        assert_eq!(serde_json::from_str::<R2>(&json).unwrap(), p);
    }
}
