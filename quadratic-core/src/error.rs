#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum QuadraticError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not a parabola (a = 0); {0} is undefined for a line")]
    NotAParabola(&'static str),

    #[error("No real x solves y = {y}")]
    NoRealSolution { y: f64 },

    #[error("Horizontal line y = {c} cannot be solved for x")]
    HorizontalLine { c: f64 },

    #[error("No point on the curve within x {x_range} and y {y_range}")]
    NoSolutionInRange {
        x_range: String,
        y_range: String,
    },
}

pub type Result<T> = std::result::Result<T, QuadraticError>;
