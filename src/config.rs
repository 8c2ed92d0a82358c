use clap::Parser;

use crate::plotter::{PlotFunction, DEFAULT_MAX_SAMPLES};

/// Plots sin/cos/tan combinations over an interval.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    /// Initial text of the "X min" field.
    #[arg(long, default_value = "-10", allow_hyphen_values = true)]
    pub xmin: String,

    /// Initial text of the "X max" field.
    #[arg(long, default_value = "10", allow_hyphen_values = true)]
    pub xmax: String,

    /// Initial text of the "Y min" field.
    #[arg(long, default_value = "-10", allow_hyphen_values = true)]
    pub ymin: String,

    /// Initial text of the "Y max" field.
    #[arg(long, default_value = "10", allow_hyphen_values = true)]
    pub ymax: String,

    /// Initial text of the "X step" field.
    #[arg(long, default_value = "0.1", allow_hyphen_values = true)]
    pub step: String,

    /// Functions checked at start-up.
    #[arg(long, value_enum, value_delimiter = ',', num_args = 0.., default_value = "f1")]
    pub functions: Vec<PlotFunction>,

    /// Plot once as soon as the window opens.
    #[arg(long)]
    pub plot_on_start: bool,

    /// Maximum number of points sampled per function.
    #[arg(long, default_value_t = DEFAULT_MAX_SAMPLES)]
    pub max_samples: usize,

    /// Restore the form from the last session and save it on exit.
    #[arg(long)]
    pub remember: bool,
}
