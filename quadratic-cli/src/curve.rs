//! Curve construction from command-line arguments.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::debug;

use quadratic_core::{Interval, Quadratic};

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum FormArg {
    /// y = ax² + bx + c, from -a/-b/-c
    Standard,
    /// y = a(x - h)² + k, from -a/--h/--k
    Vertex,
    /// (x - h)² = 4p(y - k), from --p/--h/--k
    Focus,
}

#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Which coefficients define the curve
    #[arg(long, value_enum, default_value = "standard", global = true)]
    pub form: FormArg,

    #[arg(short, default_value = "1", allow_hyphen_values = true, global = true)]
    pub a: f64,

    #[arg(short, default_value = "0", allow_hyphen_values = true, global = true)]
    pub b: f64,

    #[arg(short, default_value = "0", allow_hyphen_values = true, global = true)]
    pub c: f64,

    /// Focal parameter (focus form only)
    #[arg(long, allow_hyphen_values = true, global = true)]
    pub p: Option<f64>,

    /// Vertex x
    #[arg(long, default_value = "0", allow_hyphen_values = true, global = true)]
    pub h: f64,

    /// Vertex y
    #[arg(long, default_value = "0", allow_hyphen_values = true, global = true)]
    pub k: f64,

    /// Color carried through to the output
    #[arg(long, global = true)]
    pub color: Option<String>,
}

impl CurveArgs {
    pub fn build(&self) -> Result<Quadratic> {
        let quadratic = match self.form {
            FormArg::Standard => Quadratic::new(self.a, self.b, self.c),
            FormArg::Vertex => Quadratic::from_vertex_form(self.a, self.h, self.k),
            FormArg::Focus => {
                let p = self.p.context("--p is required with --form focus")?;
                Quadratic::from_focus_directrix_form(p, self.h, self.k)?
            }
        };
        debug!("built {:?} curve: {}", self.form, quadratic);
        Ok(match &self.color {
            Some(color) => quadratic.with_color(color.clone()),
            None => quadratic,
        })
    }
}

/// Parse `MIN,MAX`.
pub fn parse_interval(s: &str) -> std::result::Result<Interval, String> {
    let (min, max) = s.split_once(',').ok_or_else(|| format!("expected MIN,MAX, got {:?}", s))?;
    let min: f64 = min.trim().parse().map_err(|e| format!("invalid min {:?}: {}", min, e))?;
    let max: f64 = max.trim().parse().map_err(|e| format!("invalid max {:?}: {}", max, e))?;
    Interval::new(min, max).map_err(|e| e.to_string())
}
