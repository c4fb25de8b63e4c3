use std::f64::consts::TAU;

use log::{debug, trace};
use ordered_float::OrderedFloat;

use super::{complex::{Complex, ComplexPair}, is_zero::IsZero, quadratic};

/// Roots of `a3·x³ + a2·x² + a1·x + a0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Roots {
    /// `a3 == 0`; the polynomial was solved as a quadratic (or linear) instead.
    Quadratic(quadratic::Roots),
    /// Three real roots (possibly repeated), ascending.
    Reals([ f64; 3 ]),
    /// One real root and a conjugate pair.
    Mixed(f64, ComplexPair),
}

use Roots::{Quadratic, Reals, Mixed};

impl Roots {
    /// Real roots, ascending. Repeated roots are kept as returned by the solver.
    pub fn reals(&self) -> Vec<f64> {
        match self {
            Quadratic(q) => q.reals(),
            Reals(rs) => rs.to_vec(),
            Mixed(re, _) => vec![ *re ],
        }
    }
}

/// Real roots found via the monic form are refined against the original coefficients, which matters when `a3` is
/// small and normalizing loses precision.
pub fn cubic(a3: f64, a2: f64, a1: f64, a0: f64) -> Roots {
    if a3.is_zero() {
        return Quadratic(quadratic::quadratic(a2, a1, a0));
    }
    let polish = |x: f64| polish(x, [ a3, a2, a1, a0 ]);
    match cubic_scaled(a2 / a3, a1 / a3, a0 / a3) {
        Reals(roots) => {
            let mut roots = roots.map(polish);
            roots.sort_by_key(|r| OrderedFloat(*r));
            Reals(roots)
        }
        Mixed(re, im) => Mixed(polish(re), im),
        Quadratic(q) => Quadratic(q),
    }
}

static POLISH_STEPS: usize = 4;

/// Newton steps on `a3·x³ + a2·x² + a1·x + a0`, each kept only if it shrinks the residual.
fn polish(mut x: f64, [ a3, a2, a1, a0 ]: [ f64; 4 ]) -> f64 {
    let f = |x: f64| ((a3 * x + a2) * x + a1) * x + a0;
    let df = |x: f64| (3. * a3 * x + 2. * a2) * x + a1;
    let mut fx = f(x);
    for _ in 0..POLISH_STEPS {
        let slope = df(x);
        if fx.is_zero() || slope.is_zero() || !slope.is_finite() {
            break;
        }
        let next = x - fx / slope;
        let f_next = f(next);
        if !(f_next.abs() < fx.abs()) {
            break;
        }
        trace!("polish: {} -> {} (residual {} -> {})", x, next, fx, f_next);
        x = next;
        fx = f_next;
    }
    x
}

/// Solve the monic `x³ + a2·x² + a1·x + a0 = 0`, by substituting `x = t - a2/3`.
pub fn cubic_scaled(a2: f64, a1: f64, a0: f64) -> Roots {
    let b3 = a2 / -3.;
    let p = a1 + a2 * b3;
    let q = b3 * b3 * b3 * -2. + b3 * a1 + a0;
    let roots = match cubic_depressed(p, q) {
        Reals(roots) => Reals(roots.map(|r| r + b3)),
        Mixed(re, im) => Mixed(re + b3, Complex { re: im.re + b3, im: im.im }),
        Quadratic(q) => Quadratic(q),
    };
    debug!("cubic_scaled({}, {}, {}) = {:?}", a2, a1, a0, roots);
    roots
}

static TAU3: f64 = TAU / 3.;

/// Solve `t³ + p·t + q = 0`.
///
/// Three real roots are found with the trigonometric method (points spaced `τ/3` apart on a circle of radius
/// `2√(-p/3)`); a single real root uses the matching hyperbolic identity, and the remaining conjugate pair is
/// recovered by deflating to a quadratic.
pub fn cubic_depressed(p: f64, q: f64) -> Roots {
    trace!("cubic_depressed({}, {})", p, q);
    if p.is_zero() {
        let re = (-q).cbrt();
        return mixed(re, p);
    }
    let r = (p.abs() / 3.).sqrt();
    let r3 = r * r * r;
    let u = -q / (2. * r3);
    if p.lt_zero() {
        if u.abs() <= 1. {
            let theta = u.acos() / 3.;
            let mut roots = [
                2. * r * theta.cos(),
                2. * r * (theta - TAU3).cos(),
                2. * r * (theta - TAU3 - TAU3).cos(),
            ];
            roots.sort_by_key(|r| OrderedFloat(*r));
            Reals(roots)
        } else {
            let re = u.signum() * 2. * r * (u.abs().acosh() / 3.).cosh();
            mixed(re, p)
        }
    } else {
        let re = 2. * r * (u.asinh() / 3.).sinh();
        mixed(re, p)
    }
}

/// Given one real root `t0` of `t³ + p·t + q`, the other two solve `t² + t0·t + (t0² + p) = 0`.
fn mixed(t0: f64, p: f64) -> Roots {
    match quadratic::quadratic_scaled(t0, t0 * t0 + p) {
        quadratic::Roots::Complex(c) => Mixed(t0, Complex { re: c.re, im: c.im.abs() }),
        quadratic::Roots::Double(r) => {
            let mut roots = [ t0, r, r ];
            roots.sort_by_key(|r| OrderedFloat(*r));
            Reals(roots)
        }
        quadratic::Roots::Reals([ r0, r1 ]) => {
            let mut roots = [ t0, r0, r1 ];
            roots.sort_by_key(|r| OrderedFloat(*r));
            Reals(roots)
        }
        // `quadratic_scaled` never returns `Single`.
        quadratic::Roots::Single(r) => Mixed(t0, Complex::re(r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn check(r0: f64, r1: f64, r2: f64, scale: f64) {
        let a3 = scale;
        let a2 = -(r0 + r1 + r2) * scale;
        let a1 = (r0 * r1 + r0 * r2 + r1 * r2) * scale;
        let a0 = -(r0 * r1 * r2) * scale;
        let mut expected = [ r0, r1, r2 ];
        expected.sort_by_key(|r| OrderedFloat(*r));
        let actual = cubic(a3, a2, a1, a0).reals();
        assert_eq!(actual.len(), 3, "{:?}: {:?}", expected, actual);
        let ε = 1e-4;
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_relative_eq!(a, e, max_relative = ε, epsilon = ε);
        }
    }

    #[test]
    fn sweep_reals() {
        let vals = [ -10., -1., -0.1, 0., 0.1, 1., 10., ];
        let n = vals.len();
        for i0 in 0..n {
            for i1 in (i0 + 1)..n {
                for i2 in (i1 + 1)..n {
                    check(vals[i0], vals[i1], vals[i2], 1.);
                    check(vals[i0], vals[i1], vals[i2], -3.);
                }
            }
        }
    }

    #[test]
    fn one_real() {
        // (x - 2)(x² + 1)
        let roots = cubic(1., -2., 1., -2.);
        match roots {
            Mixed(re, im) => {
                assert_relative_eq!(re, 2., epsilon = 1e-12);
                assert_relative_eq!(im, Complex { re: 0., im: 1. }, epsilon = 1e-12);
            }
            _ => panic!("expected Mixed, got {:?}", roots),
        }
    }

    #[test]
    fn one_real_positive_p() {
        // t³ + 3t - 4 = (t - 1)(t² + t + 4)
        let roots = cubic_depressed(3., -4.);
        assert_eq!(roots.reals().len(), 1);
        assert_relative_eq!(roots.reals()[0], 1., epsilon = 1e-12);
    }

    #[test]
    fn zero_p() {
        let roots = cubic_depressed(0., -8.);
        assert_relative_eq!(roots.reals()[0], 2., epsilon = 1e-12);
        assert_eq!(roots.reals().len(), 1);
    }

    #[test]
    fn repeated() {
        // (x - 1)²(x + 2) = x³ - 3x + 2
        let reals = cubic(1., 0., -3., 2.).reals();
        assert_eq!(reals.len(), 3);
        assert_relative_eq!(reals[0], -2., epsilon = 1e-6);
        assert_relative_eq!(reals[1], 1., epsilon = 1e-6);
        assert_relative_eq!(reals[2], 1., epsilon = 1e-6);
    }

    #[test]
    fn degenerate_linear() {
        assert_eq!(cubic(0., 0., 2., -1.), Quadratic(quadratic::Roots::Single(0.5)));
        assert_eq!(cubic(0., 0., 2., -1.).reals(), vec![ 0.5 ]);
    }

    #[test]
    fn small_leading_coefficient() {
        // Stationary points of the squared distance from (1, 1 + 1e-8) to y = 1e-8·x² + x.
        let a = 1e-8;
        let (x0, y0) = (1., a + 1.);
        let [ a3, a2, a1, a0 ] = [ 2. * a * a, 3. * a, 1. - 2. * a * y0 + 1., -y0 - x0 ];
        let reals = cubic(a3, a2, a1, a0).reals();
        let nearest = reals
            .iter()
            .copied()
            .min_by_key(|x| OrderedFloat((x - x0).abs()))
            .unwrap();
        assert_relative_eq!(nearest, 1., epsilon = 1e-12);
        for x in reals {
            let residual = ((a3 * x + a2) * x + a1) * x + a0;
            assert!(residual.abs() <= 1e-9 * (1. + x.abs()), "residual {} at {}", residual, x);
        }
    }

    /// Cross-check against the `roots` crate on cubics with a single real root.
    #[test]
    fn matches_roots_crate() {
        let cases = [
            [ 2., 3., 7., -5. ],
            [ 1., 0., 1., 1. ],
            [ 0.5, -1., 4., 10. ],
            [ -3., 2., -8., 1. ],
        ];
        for [ a3, a2, a1, a0 ] in cases {
            let expected = match roots::find_roots_cubic(a3, a2, a1, a0) {
                roots::Roots::One([ r ]) => r,
                other => panic!("expected one root for {:?}, got {:?}", [ a3, a2, a1, a0 ], other),
            };
            let actual = cubic(a3, a2, a1, a0).reals();
            assert_eq!(actual.len(), 1);
            assert_relative_eq!(actual[0], expected, max_relative = 1e-9, epsilon = 1e-9);
        }
    }
}
