//! Command-line front end for the quadratic curve model.
//!
//! Builds one curve from standard, vertex, or focus/directrix coefficients, runs a single query against it, and
//! prints the result as JSON.

mod curve;
mod query;

use clap::Parser;
use log::debug;

use curve::CurveArgs;
use query::Query;

#[derive(Parser, Debug)]
#[command(name = "quadratic")]
#[command(about = "Quadratic curve calculator", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("QUADRATIC_BUILD_SHA"), ")"))]
struct Cli {
    #[command(flatten)]
    curve: CurveArgs,

    /// Log level: error, warn, info, debug, or trace (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    query: Query,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(level) = cli.log_level.as_deref() {
        logger.filter_level(quadratic_core::parse_log_level(Some(level))?);
    }
    logger.init();

    let quadratic = cli.curve.build()?;
    debug!("running {:?} on {}", cli.query, quadratic);
    let value = query::run(&quadratic, &cli.query)?;
    let out = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve::FormArg;
    use test_log::test;

    #[test]
    fn parse_standard() {
        let cli = Cli::try_parse_from([ "quadratic", "-a", "2", "-b", "-3", "-c", "1", "describe" ]).unwrap();
        assert_eq!(cli.curve.form, FormArg::Standard);
        assert_eq!(cli.curve.build().unwrap().standard_coefficients(), [ 2., -3., 1. ]);
        assert!(matches!(cli.query, Query::Describe));
    }

    #[test]
    fn parse_focus_after_subcommand() {
        let cli = Cli::try_parse_from([ "quadratic", "slope", "1", "--form", "focus", "--p", "0.25", "--h", "-1" ]).unwrap();
        let q = cli.curve.build().unwrap();
        assert_eq!(q.a(), 1.);
        assert_eq!(q.h(), Some(-1.));
        assert!(matches!(cli.query, Query::Slope { x } if x == 1.));
    }

    #[test]
    fn parse_ranges() {
        let cli = Cli::try_parse_from([
            "quadratic", "closest-in-range", "12", "--x-range", "-10,10", "--y-range", "-10,10",
        ]).unwrap();
        match cli.query {
            Query::ClosestInRange { x, x_range, y_range } => {
                assert_eq!(x, 12.);
                assert_eq!(x_range.min(), -10.);
                assert_eq!(y_range.max(), 10.);
            }
            other => panic!("unexpected query {:?}", other),
        }
    }

    #[test]
    fn missing_query() {
        assert!(Cli::try_parse_from([ "quadratic", "-a", "1" ]).is_err());
    }
}
