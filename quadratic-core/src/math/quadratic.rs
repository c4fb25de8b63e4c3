use approx::{AbsDiffEq, RelativeEq};
use log::trace;
use ordered_float::OrderedFloat;

use super::{complex::{self, ComplexPair}, is_zero::IsZero};

/// Roots of `a2·x² + a1·x + a0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Roots {
    /// `a2 == 0`: the single root of the linear equation `a1·x + a0 = 0`.
    Single(f64),
    Double(f64),
    /// Ascending.
    Reals([ f64; 2 ]),
    Complex(ComplexPair),
}

use Roots::{Single, Double, Reals, Complex};

impl Roots {
    /// Real roots in ascending order, with a double root reported once.
    pub fn reals(&self) -> Vec<f64> {
        match self {
            Single(r) => vec![ *r ],
            Double(r) => vec![ *r ],
            Reals(rs) => rs.to_vec(),
            Complex(_) => vec![],
        }
    }
}

impl AbsDiffEq for Roots {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        match (self, other) {
            (Single(r0), Single(r1)) => r0.abs_diff_eq(r1, epsilon),
            (Double(r0), Double(r1)) => r0.abs_diff_eq(r1, epsilon),
            (Reals([ l0, l1 ]), Reals([ r0, r1 ])) => l0.abs_diff_eq(r0, epsilon) && l1.abs_diff_eq(r1, epsilon),
            (Complex(c0), Complex(c1)) => c0.abs_diff_eq(c1, epsilon),
            _ => false,
        }
    }
}

impl RelativeEq for Roots {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        match (self, other) {
            (Single(r0), Single(r1)) => r0.relative_eq(r1, epsilon, max_relative),
            (Double(r0), Double(r1)) => r0.relative_eq(r1, epsilon, max_relative),
            (Reals([ l0, l1 ]), Reals([ r0, r1 ])) => l0.relative_eq(r0, epsilon, max_relative) && l1.relative_eq(r1, epsilon, max_relative),
            (Complex(c0), Complex(c1)) => c0.relative_eq(c1, epsilon, max_relative),
            _ => false,
        }
    }
}

/// Solve `a2·x² + a1·x + a0 = 0`. When `a2 == 0` this is linear, and `a1 == 0` yields a non-finite root; callers that
/// can hit that case must check `a1` themselves.
///
/// Real roots come from `q = -(a1 + sign(a1)·√d) / 2` as `q / a2` and `a0 / q`, which avoids subtracting nearly equal
/// values when `|a2|` is small relative to `a1`.
pub fn quadratic(a2: f64, a1: f64, a0: f64) -> Roots {
    let roots = if a2.is_zero() {
        Single(-a0 / a1)
    } else {
        let d = a1 * a1 - 4. * a2 * a0;
        let re = -a1 / (2. * a2);
        if d.lt_zero() {
            Complex(complex::Complex { re, im: (-d).sqrt() / (2. * a2).abs() })
        } else if d.is_zero() {
            Double(re)
        } else {
            let q = -(a1 + a1.signum() * d.sqrt()) / 2.;
            let mut roots = [ q / a2, a0 / q ];
            roots.sort_by_key(|r| OrderedFloat(*r));
            Reals(roots)
        }
    };
    trace!("quadratic({}, {}, {}) = {:?}", a2, a1, a0, roots);
    roots
}

/// Solve the monic `x² + a1·x + a0 = 0`.
pub fn quadratic_scaled(a1: f64, a0: f64) -> Roots {
    quadratic(1., a1, a0)
}
