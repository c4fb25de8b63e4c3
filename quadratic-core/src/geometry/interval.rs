use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::error::{QuadraticError, Result};

/// Closed range `[min, max]`, with `min <= max` and neither bound NaN.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Bounds", into = "Bounds")]
pub struct Interval {
    min: f64,
    max: f64,
}

/// Unvalidated `{min, max}`, as it appears on the wire.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(QuadraticError::InvalidArgument(format!("invalid interval [{}, {}]", min, max)));
        }
        Ok(Interval { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }

    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.
    }
}

impl TryFrom<Bounds> for Interval {
    type Error = QuadraticError;
    fn try_from(Bounds { min, max }: Bounds) -> Result<Self> {
        Interval::new(min, max)
    }
}

impl From<Interval> for Bounds {
    fn from(Interval { min, max }: Interval) -> Self {
        Bounds { min, max }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
