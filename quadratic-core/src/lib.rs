#![allow(mixed_script_confusables)]

#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

pub mod geometry;
pub mod math;

pub mod error;
pub mod fmt;

pub use geometry::bezier;
pub use geometry::interval;
pub use geometry::quadratic;
pub use geometry::r2;

pub use error::{QuadraticError, Result};
pub use bezier::QuadBezier;
pub use interval::Interval;
pub use quadratic::{Form, Parabola, Quadratic, QuadraticState, Roots};
pub use r2::R2;

/// Parse a log level string into LevelFilter.
pub fn parse_log_level(level: Option<&str>) -> Result<log::LevelFilter> {
    match level {
        Some("error") => Ok(log::LevelFilter::Error),
        Some("warn") => Ok(log::LevelFilter::Warn),
        Some("info") | Some("") | None => Ok(log::LevelFilter::Info),
        Some("debug") => Ok(log::LevelFilter::Debug),
        Some("trace") => Ok(log::LevelFilter::Trace),
        Some(level) => Err(QuadraticError::InvalidArgument(format!("invalid log level: {}", level))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn log_levels() {
        assert_eq!(parse_log_level(None), Ok(log::LevelFilter::Info));
        assert_eq!(parse_log_level(Some("")), Ok(log::LevelFilter::Info));
        assert_eq!(parse_log_level(Some("trace")), Ok(log::LevelFilter::Trace));
        assert!(parse_log_level(Some("loud")).is_err());
    }
}
