use log::debug;

use crate::plotter;

/// Formats a data-space coordinate for the canvas readout.
pub fn format_point(point: plotter::DataPoint) -> String {
    format!("x = {:.3}, y = {:.3}", point.x, point.y)
}

pub fn log_on_err<T>(result: Result<T, plotter::Error>) -> Result<T, plotter::Error> {
    match result {
        Ok(t) => Ok(t),
        Err(e) => {
            // Input problems are never shown to the user.
            debug!("{}", e);
            Err(e)
        }
    }
}
