//! WASM bindings for the quadratic curve model.
//!
//! Curves cross the boundary as [`QuadraticState`] objects: `{a, b, c, color?}` on the way in, and the same plus
//! every derived field (vertex, focus, directrix, roots, ...) on the way out.

use quadratic_core::{Interval, Quadratic, QuadraticState, R2};
use log::{info, error};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_console_logger::DEFAULT_LOGGER;

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn quadratic(state: JsValue) -> Result<Quadratic, JsError> {
    let state: QuadraticState = from_js(state)?;
    Ok(state.into())
}

fn state(quadratic: Quadratic) -> Result<JsValue, JsError> {
    to_js(&QuadraticState::from(quadratic))
}

/// Initializes the logging system for WASM.
///
/// Sets up console logging and panic hooks for better error reporting in the browser.
/// Should be called once at application startup.
#[wasm_bindgen]
pub fn init_logs() {
    match log::set_logger(&DEFAULT_LOGGER) {
        Ok(_) => info!("Initialized console.logger"),
        Err(e) => error!("failed to set console.logger: {}", e),
    };
    console_error_panic_hook::set_once();
}

/// Updates the log level filter.
///
/// # Arguments
/// * `level` - Log level string: "error", "warn", "info", "debug", or "trace".
///   Defaults to "info" if empty or null.
#[wasm_bindgen]
pub fn update_log_level(level: JsValue) -> Result<(), JsError> {
    let level: Option<String> = from_js(level)?;
    let level = quadratic_core::parse_log_level(level.as_deref())?;
    log::set_max_level(level);
    Ok(())
}

/// Builds `y = ax² + bx + c`.
///
/// # Returns
/// A [`QuadraticState`] with all derived fields populated.
#[wasm_bindgen]
pub fn make_quadratic(a: f64, b: f64, c: f64, color: Option<String>) -> Result<JsValue, JsError> {
    state(Quadratic::from(QuadraticState::new(a, b, c, color)))
}

/// Builds `y = a(x - h)² + k`.
#[wasm_bindgen]
pub fn make_from_vertex_form(a: f64, h: f64, k: f64, color: Option<String>) -> Result<JsValue, JsError> {
    let quadratic = Quadratic::from_vertex_form(a, h, k);
    state(match color {
        Some(color) => quadratic.with_color(color),
        None => quadratic,
    })
}

/// Builds `(x - h)² = 4p(y - k)`.
///
/// # Errors
/// If `p` is zero or non-finite.
#[wasm_bindgen]
pub fn make_from_focus_directrix_form(p: f64, h: f64, k: f64, color: Option<String>) -> Result<JsValue, JsError> {
    let quadratic = Quadratic::from_focus_directrix_form(p, h, k)?;
    state(match color {
        Some(color) => quadratic.with_color(color),
        None => quadratic,
    })
}

/// x values where the curve reaches `y`; errors if there are none.
#[wasm_bindgen]
pub fn solve_x_for_y(quadratic_state: JsValue, y: f64) -> Result<Vec<f64>, JsError> {
    Ok(quadratic(quadratic_state)?.solve_x_for_y(y)?)
}

#[wasm_bindgen]
pub fn solve_y_for_x(quadratic_state: JsValue, x: f64) -> Result<f64, JsError> {
    Ok(quadratic(quadratic_state)?.solve_y_for_x(x))
}

/// # Errors
/// If the curve is a line.
#[wasm_bindgen]
pub fn tangent_slope(quadratic_state: JsValue, x: f64) -> Result<f64, JsError> {
    Ok(quadratic(quadratic_state)?.tangent_slope(x)?)
}

/// Start, control, and end points of the Bézier tracing the curve over `[x_min, x_max]`.
#[wasm_bindgen]
pub fn bezier_control_points(quadratic_state: JsValue, x_min: f64, x_max: f64) -> Result<JsValue, JsError> {
    to_js(&quadratic(quadratic_state)?.bezier_control_points(x_min, x_max))
}

#[wasm_bindgen]
pub fn closest_point(quadratic_state: JsValue, point: JsValue) -> Result<JsValue, JsError> {
    let point: R2 = from_js(point)?;
    to_js(&quadratic(quadratic_state)?.closest_point(point))
}

/// # Arguments
/// * `x_range`, `y_range` - `{min, max}` objects with `min <= max`.
///
/// # Errors
/// If a range is reversed, or no point of the curve falls within the clamped y range.
#[wasm_bindgen]
pub fn closest_point_in_range(quadratic_state: JsValue, x: f64, x_range: JsValue, y_range: JsValue) -> Result<JsValue, JsError> {
    let x_range: Interval = from_js(x_range)?;
    let y_range: Interval = from_js(y_range)?;
    to_js(&quadratic(quadratic_state)?.closest_point_in_range(x, &x_range, &y_range)?)
}

#[wasm_bindgen]
pub fn has_solution(quadratic_state: JsValue, point: JsValue, tolerance: f64) -> Result<bool, JsError> {
    let point: R2 = from_js(point)?;
    Ok(quadratic(quadratic_state)?.has_solution(point, tolerance)?)
}
