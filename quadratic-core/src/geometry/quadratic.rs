use std::fmt::{self, Display, Formatter};

use approx::{AbsDiffEq, RelativeEq};
use itertools::Itertools;
use log::{debug, trace};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::{
    error::{QuadraticError, Result},
    fmt::term,
    math::{cubic, is_zero::IsZero, quadratic},
};

use super::{bezier::QuadBezier, interval::Interval, r2::R2};

/// Vertex-form and focus/directrix-form parameters, defined only when `a ≠ 0`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parabola {
    /// Focal parameter, `1/(4a)`.
    pub p: f64,
    pub h: f64,
    pub k: f64,
}

impl Parabola {
    fn new(a: f64, b: f64, c: f64) -> Self {
        Parabola {
            p: 1. / (4. * a),
            h: -b / (2. * a),
            k: c - b * b / (4. * a),
        }
    }

    pub fn vertex(&self) -> R2 {
        R2 { x: self.h, y: self.k }
    }

    pub fn focus(&self) -> R2 {
        R2 { x: self.h, y: self.k + self.p }
    }

    /// The directrix is the horizontal line at this y.
    pub fn directrix(&self) -> f64 {
        self.k - self.p
    }

    /// The axis of symmetry is the vertical line at this x.
    pub fn axis_of_symmetry(&self) -> f64 {
        self.h
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Form {
    Parabola(Parabola),
    /// `a = 0`: the curve is `y = bx + c`.
    Line,
}

/// Points where the curve crosses `y = 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(tag = "kind", content = "points", rename_all = "camelCase")]
pub enum Roots {
    Empty,
    /// Non-empty, ascending in x, without duplicates.
    Points(Vec<R2>),
    /// `y = 0` everywhere (`a = b = c = 0`).
    All,
}

impl Roots {
    fn solve(a: f64, b: f64, c: f64) -> Self {
        if a.is_zero() && b.is_zero() {
            return if c.is_zero() { Roots::All } else { Roots::Empty };
        }
        let points: Vec<R2> = quadratic::quadratic(a, b, c)
            .reals()
            .into_iter()
            .dedup()
            .map(|x| R2 { x, y: 0. })
            .collect();
        if points.is_empty() { Roots::Empty } else { Roots::Points(points) }
    }

    /// Root points; empty for both `Empty` and `All`.
    pub fn points(&self) -> &[R2] {
        match self {
            Roots::Points(points) => points,
            Roots::Empty | Roots::All => &[],
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Roots::All)
    }
}

/// Immutable curve `y = ax² + bx + c`, with derived forms and roots computed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "QuadraticState", from = "QuadraticState")]
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
    color: Option<String>,
    form: Form,
    roots: Roots,
}

impl Quadratic {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        let form = if a.is_zero() { Form::Line } else { Form::Parabola(Parabola::new(a, b, c)) };
        let roots = Roots::solve(a, b, c);
        trace!("Quadratic::new({}, {}, {}): {:?}, roots {:?}", a, b, c, form, roots);
        Quadratic { a, b, c, color: None, form, roots }
    }

    /// `y = a(x - h)² + k`. With `a = 0` this is the line `y = k`.
    pub fn from_vertex_form(a: f64, h: f64, k: f64) -> Self {
        let b = -2. * a * h;
        let c = a * h * h + k;
        Quadratic::new(a, b, c)
    }

    /// `(x - h)² = 4p(y - k)`; `p` must be finite and non-zero.
    pub fn from_focus_directrix_form(p: f64, h: f64, k: f64) -> Result<Self> {
        if p.is_zero() || !p.is_finite() {
            return Err(QuadraticError::InvalidArgument(format!("focal parameter p must be finite and non-zero, got {}", p)));
        }
        Ok(Quadratic::from_vertex_form(1. / (4. * p), h, k))
    }

    /// Same curve, different color.
    pub fn with_color(&self, color: impl Into<String>) -> Self {
        Quadratic { color: Some(color.into()), ..self.clone() }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn roots(&self) -> &Roots {
        &self.roots
    }

    pub fn standard_coefficients(&self) -> [ f64; 3 ] {
        [ self.a, self.b, self.c ]
    }

    pub fn is_parabola(&self) -> bool {
        matches!(self.form, Form::Parabola(_))
    }

    pub fn parabola(&self) -> Option<&Parabola> {
        match &self.form {
            Form::Parabola(parabola) => Some(parabola),
            Form::Line => None,
        }
    }

    pub fn p(&self) -> Option<f64> {
        self.parabola().map(|v| v.p)
    }

    pub fn h(&self) -> Option<f64> {
        self.parabola().map(|v| v.h)
    }

    pub fn k(&self) -> Option<f64> {
        self.parabola().map(|v| v.k)
    }

    pub fn vertex(&self) -> Option<R2> {
        self.parabola().map(Parabola::vertex)
    }

    pub fn focus(&self) -> Option<R2> {
        self.parabola().map(Parabola::focus)
    }

    pub fn directrix(&self) -> Option<f64> {
        self.parabola().map(Parabola::directrix)
    }

    pub fn axis_of_symmetry(&self) -> Option<f64> {
        self.parabola().map(Parabola::axis_of_symmetry)
    }

    /// `(a, h, k)`
    pub fn vertex_form(&self) -> Option<(f64, f64, f64)> {
        self.parabola().map(|v| (self.a, v.h, v.k))
    }

    /// `(p, h, k)`
    pub fn focus_directrix_form(&self) -> Option<(f64, f64, f64)> {
        self.parabola().map(|v| (v.p, v.h, v.k))
    }

    /// x values where the curve reaches `y`, ascending.
    ///
    /// A parabola always yields two values, which coincide when `y` is the vertex's y; a line yields one.
    pub fn solve_x_for_y(&self, y: f64) -> Result<Vec<f64>> {
        match &self.form {
            Form::Parabola(Parabola { h, k, .. }) => {
                if (self.a > 0. && y < *k) || (self.a < 0. && y > *k) {
                    return Err(QuadraticError::NoRealSolution { y });
                }
                let common = ((y - k) / self.a).sqrt();
                Ok(vec![ h - common, h + common ])
            }
            Form::Line => {
                if self.b.is_zero() {
                    Err(QuadraticError::HorizontalLine { c: self.c })
                } else {
                    Ok(vec![ (y - self.c) / self.b ])
                }
            }
        }
    }

    pub fn solve_y_for_x(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    pub fn tangent_slope(&self, x: f64) -> Result<f64> {
        if !self.is_parabola() {
            return Err(QuadraticError::NotAParabola("tangent slope"));
        }
        Ok(2. * self.a * x + self.b)
    }

    /// The quadratic Bézier that traces this curve exactly over `[x_min, x_max]`.
    pub fn bezier_control_points(&self, x_min: f64, x_max: f64) -> QuadBezier {
        let Quadratic { a, b, c, .. } = *self;
        let length = x_max - x_min;
        let a_prime = a * length * length;
        let b_prime = 2. * a * x_min * length + b * length;
        let c_prime = a * x_min * x_min + b * x_min + c;
        QuadBezier {
            start: R2 { x: x_min, y: c_prime },
            control: R2 { x: (x_min + x_max) / 2., y: b_prime / 2. + c_prime },
            end: R2 { x: x_max, y: a_prime + b_prime + c_prime },
        }
    }

    /// Whether `point` lies within `tolerance` (Euclidean distance) of the curve.
    pub fn has_solution(&self, point: R2, tolerance: f64) -> Result<bool> {
        if tolerance.is_nan() || tolerance.lt_zero() {
            return Err(QuadraticError::InvalidArgument(format!("tolerance must be >= 0, got {}", tolerance)));
        }
        Ok(self.closest_point(point).distance(&point) <= tolerance)
    }

    /// Point on the curve nearest to `point`.
    ///
    /// Stationary points of `(x - x0)² + (ax² + bx + c - y0)²` are the real roots of
    /// `2a²x³ + 3abx² + (b² + 2ac - 2a·y0 + 1)x + (bc - b·y0 - x0)`; the nearest candidate wins, ties going to the
    /// smaller x.
    pub fn closest_point(&self, point: R2) -> R2 {
        let Quadratic { a, b, c, .. } = *self;
        let R2 { x: x0, y: y0 } = point;
        let roots = cubic::cubic(
            2. * a * a,
            3. * a * b,
            b * b + 2. * a * c - 2. * a * y0 + 1.,
            b * c - b * y0 - x0,
        );
        let closest = roots
            .reals()
            .into_iter()
            .map(|x| R2 { x, y: self.solve_y_for_x(x) })
            .inspect(|candidate| trace!("closest_point({}): candidate {}, distance {}", point, candidate, candidate.distance(&point)))
            .min_by_key(|candidate| OrderedFloat(candidate.distance(&point)));
        match closest {
            Some(closest) => closest,
            None => {
                // Only reachable when 2a² underflows to zero while 3ab doesn't; the curve is locally a line there.
                debug!("closest_point({}): no real roots for {}, using the curve point at x0", point, self);
                R2 { x: x0, y: self.solve_y_for_x(x0) }
            }
        }
    }

    /// Point on the curve for `x` clamped to `x_range`. If that point's y falls outside `y_range`, y is clamped
    /// instead and solved for x, keeping to the same side of the vertex as `x`.
    pub fn closest_point_in_range(&self, x: f64, x_range: &Interval, y_range: &Interval) -> Result<R2> {
        let clamped_x = x_range.clamp(x);
        let y = self.solve_y_for_x(clamped_x);
        if y_range.contains(y) {
            return Ok(R2 { x: clamped_x, y });
        }
        let y = y_range.clamp(y);
        let xs = self.solve_x_for_y(y).map_err(|e| {
            debug!("closest_point_in_range({}, {}, {}): {}", x, x_range, y_range, e);
            QuadraticError::NoSolutionInRange { x_range: x_range.to_string(), y_range: y_range.to_string() }
        })?;
        let x = match &self.form {
            Form::Parabola(Parabola { h, .. }) => if x < *h { xs[0] } else { xs[1] },
            Form::Line => xs[0],
        };
        Ok(R2 { x, y })
    }

    /// `n` evenly spaced curve points spanning `x_range`, endpoints included.
    pub fn points_in_range(&self, x_range: &Interval, n: usize) -> Result<Vec<R2>> {
        if n < 2 {
            return Err(QuadraticError::InvalidArgument(format!("need at least 2 sample points, got {}", n)));
        }
        let step = x_range.length() / (n - 1) as f64;
        Ok(
            (0..n)
                .map(|i| if i == n - 1 { x_range.max() } else { x_range.min() + step * i as f64 })
                .map(|x| R2 { x, y: self.solve_y_for_x(x) })
                .collect()
        )
    }
}

/// Equality on coefficients and color; derived fields follow from the coefficients.
impl PartialEq for Quadratic {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b && self.c == other.c && self.color == other.color
    }
}

impl AbsDiffEq for Quadratic {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon)
        && self.b.abs_diff_eq(&other.b, epsilon)
        && self.c.abs_diff_eq(&other.c, epsilon)
    }
}

impl RelativeEq for Quadratic {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
        && self.b.relative_eq(&other.b, epsilon, max_relative)
        && self.c.relative_eq(&other.c, epsilon, max_relative)
    }
}

/// Renders as `y = 2x² - 3x + 1`, honoring a precision (`{:.2}`) if given.
impl Display for Quadratic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        let terms = [ (self.a, "x²"), (self.b, "x"), (self.c, "") ]
            .into_iter()
            .filter(|(coefficient, _)| !coefficient.is_zero())
            .enumerate()
            .map(|(idx, (coefficient, var))| term(coefficient, var, idx == 0, precision))
            .join("");
        if terms.is_empty() {
            write!(f, "y = 0")
        } else {
            write!(f, "y = {}", terms)
        }
    }
}

/// Serialized form of a [`Quadratic`].
///
/// Derived fields are written for consumers that only read (renderers, the wasm front end), but are ignored when
/// reading: a curve is always rebuilt from `a`, `b`, `c`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct QuadraticState {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertex: Option<R2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<R2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directrix: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_of_symmetry: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roots: Option<Roots>,
}

impl QuadraticState {
    /// A state carrying only the persisted fields.
    pub fn new(a: f64, b: f64, c: f64, color: Option<String>) -> Self {
        QuadraticState {
            a, b, c, color,
            p: None, h: None, k: None,
            vertex: None, focus: None, directrix: None, axis_of_symmetry: None,
            roots: None,
        }
    }
}

impl From<Quadratic> for QuadraticState {
    fn from(q: Quadratic) -> Self {
        QuadraticState {
            a: q.a,
            b: q.b,
            c: q.c,
            p: q.p(),
            h: q.h(),
            k: q.k(),
            vertex: q.vertex(),
            focus: q.focus(),
            directrix: q.directrix(),
            axis_of_symmetry: q.axis_of_symmetry(),
            roots: Some(q.roots),
            color: q.color,
        }
    }
}

impl From<QuadraticState> for Quadratic {
    fn from(state: QuadraticState) -> Self {
        let quadratic = Quadratic::new(state.a, state.b, state.c);
        match state.color {
            Some(color) => Quadratic { color: Some(color), ..quadratic },
            None => quadratic,
        }
    }
}
