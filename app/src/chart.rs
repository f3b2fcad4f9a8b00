//! Turns the temperature window into SVG path commands for the chart's
//! `Path` element.

use std::fmt::Write;

use weather_station_common::sensor::TemperatureHistory;

/// Y-axis range of the chart in °C.
const Y_MIN: f64 = 0.0;
const Y_MAX: f64 = 40.0;

/// Logical viewbox the `Path` element maps onto the widget.
const VIEWBOX_WIDTH: f64 = 420.0;
const VIEWBOX_HEIGHT: f64 = 120.0;

/// Renders the window as a polyline, oldest sample leftmost.
pub fn path_commands(history: &TemperatureHistory) -> String {
    if history.len() < 2 {
        return String::new();
    }

    let dx = VIEWBOX_WIDTH / (history.len() - 1) as f64;
    let mut commands = String::new();

    for (i, sample) in history.iter().enumerate() {
        let x = i as f64 * dx;
        let scaled = (f64::from(sample).clamp(Y_MIN, Y_MAX) - Y_MIN) / (Y_MAX - Y_MIN);
        let y = VIEWBOX_HEIGHT - scaled * VIEWBOX_HEIGHT;

        let op = if i == 0 { 'M' } else { 'L' };
        // Writing to a String cannot fail.
        let _ = write!(commands, "{op} {x:.1} {y:.1} ");
    }

    commands.trim_end().to_string()
}
