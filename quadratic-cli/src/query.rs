//! Queries against a single curve, each producing a JSON value.

use anyhow::Result;
use clap::Subcommand;
use serde_json::{json, Value};

use quadratic_core::{Interval, Quadratic, QuadraticState, R2};

use crate::curve::parse_interval;

#[derive(Subcommand, Debug)]
pub enum Query {
    /// Print the curve with its derived fields (vertex, focus, directrix, roots, ...)
    Describe,

    /// x values where the curve reaches y
    SolveX {
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },

    /// y = ax² + bx + c at x
    SolveY {
        #[arg(allow_hyphen_values = true)]
        x: f64,
    },

    /// Tangent slope at x (parabolas only)
    Slope {
        #[arg(allow_hyphen_values = true)]
        x: f64,
    },

    /// Quadratic Bézier control points over [x-min, x-max]
    Bezier {
        #[arg(allow_hyphen_values = true)]
        x_min: f64,
        #[arg(allow_hyphen_values = true)]
        x_max: f64,
    },

    /// Point on the curve nearest to (x, y)
    Closest {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
    },

    /// Curve point for x, kept within the given ranges
    ClosestInRange {
        #[arg(allow_hyphen_values = true)]
        x: f64,

        /// MIN,MAX
        #[arg(long, value_parser = parse_interval, allow_hyphen_values = true)]
        x_range: Interval,

        /// MIN,MAX
        #[arg(long, value_parser = parse_interval, allow_hyphen_values = true)]
        y_range: Interval,
    },

    /// Whether (x, y) lies within tolerance of the curve
    HasSolution {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,

        #[arg(short, long, default_value = "0")]
        tolerance: f64,
    },

    /// Evenly spaced curve points
    Sample {
        /// MIN,MAX
        #[arg(long, value_parser = parse_interval, allow_hyphen_values = true)]
        x_range: Interval,

        /// Number of points, endpoints included
        #[arg(short, default_value = "11")]
        n: usize,
    },
}

pub fn run(quadratic: &Quadratic, query: &Query) -> Result<Value> {
    let value = match query {
        Query::Describe => {
            let mut value = serde_json::to_value(QuadraticState::from(quadratic.clone()))?;
            value["equation"] = json!(quadratic.to_string());
            value
        }
        Query::SolveX { y } => json!(quadratic.solve_x_for_y(*y)?),
        Query::SolveY { x } => json!(quadratic.solve_y_for_x(*x)),
        Query::Slope { x } => json!(quadratic.tangent_slope(*x)?),
        Query::Bezier { x_min, x_max } => serde_json::to_value(quadratic.bezier_control_points(*x_min, *x_max))?,
        Query::Closest { x, y } => serde_json::to_value(quadratic.closest_point(R2::new(*x, *y)))?,
        Query::ClosestInRange { x, x_range, y_range } => {
            serde_json::to_value(quadratic.closest_point_in_range(*x, x_range, y_range)?)?
        }
        Query::HasSolution { x, y, tolerance } => json!(quadratic.has_solution(R2::new(*x, *y), *tolerance)?),
        Query::Sample { x_range, n } => serde_json::to_value(quadratic.points_in_range(x_range, *n)?)?,
    };
    Ok(value)
}
