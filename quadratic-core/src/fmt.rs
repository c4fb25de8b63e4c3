pub trait Fmt {
    /// Render with `n` decimal places, or the shortest round-tripping form when `n` is `None`.
    fn s(&self, n: Option<usize>) -> String;
}

impl Fmt for f64 {
    fn s(&self, n: Option<usize>) -> String {
        match n {
            Some(n) => format!("{:.1$}", self, n),
            None => format!("{}", self),
        }
    }
}

/// One signed term of a polynomial, e.g. `" - 3x"`; unit coefficients on non-constant terms are elided.
pub fn term(coefficient: f64, var: &str, first: bool, precision: Option<usize>) -> String {
    let sign = match (first, coefficient < 0.) {
        (true, true) => "-",
        (true, false) => "",
        (false, true) => " - ",
        (false, false) => " + ",
    };
    let magnitude = coefficient.abs();
    let magnitude = if magnitude == 1. && !var.is_empty() { String::new() } else { magnitude.s(precision) };
    format!("{}{}{}", sign, magnitude, var)
}
