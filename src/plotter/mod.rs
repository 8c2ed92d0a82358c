mod function;
mod sampling;
mod state;
mod transform;

use snafu::prelude::*;

pub use function::PlotFunction;
#[cfg(test)]
pub use sampling::sample;
pub use sampling::{Field, PlotRequest, SampleSet, DEFAULT_MAX_SAMPLES};
pub use state::PlotState;
pub use transform::{plot_rect, Bounds, DataPoint, ScreenTransform};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Failed to parse {field:?} from '{text}': {source}"))]
    InvalidNumber {
        field: Field,
        text: String,
        source: std::num::ParseFloatError,
    },

    #[snafu(display("Step must be strictly positive, got {step}"))]
    NonPositiveStep { step: f64 },

    #[snafu(display("Range along the {axis} axis has zero width"))]
    DegenerateRange { axis: char },
}
