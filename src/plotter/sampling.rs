use log::{debug, info, warn};
use snafu::prelude::*;

use super::function::PlotFunction;
use super::transform::{Bounds, DataPoint};
use super::{Error, InvalidNumberSnafu, NonPositiveStepSnafu};

/// Upper limit on the points produced for a single function.
pub const DEFAULT_MAX_SAMPLES: usize = 1_000_000;

/// A numeric input of the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    XMin,
    XMax,
    YMin,
    YMax,
    Step,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::XMin, Field::XMax, Field::YMin, Field::YMax, Field::Step];

    /// Value substituted when the text cannot be used.
    pub fn default_value(self) -> f64 {
        match self {
            Field::XMin | Field::YMin => -10.0,
            Field::XMax | Field::YMax => 10.0,
            Field::Step => 0.1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::XMin => "X min:",
            Field::XMax => "X max:",
            Field::YMin => "Y min:",
            Field::YMax => "Y max:",
            Field::Step => "X step:",
        }
    }

    pub fn parse(self, text: &str) -> Result<f64, Error> {
        let value = text
            .trim()
            .parse::<f64>()
            .context(InvalidNumberSnafu { field: self, text })?;

        if self == Field::Step {
            // NaN must be rejected too.
            ensure!(value > 0.0, NonPositiveStepSnafu { step: value });
        }

        Ok(value)
    }

    /// Parses `text`, silently falling back to the field default.
    pub fn parse_or_default(self, text: &str) -> f64 {
        match self.parse(text) {
            Ok(value) => value,
            Err(e) => {
                debug!("{}, using {}", e, self.default_value());
                self.default_value()
            }
        }
    }
}

/// Ordered points of one function, in increasing x.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub function: PlotFunction,
    pub points: Vec<DataPoint>,
}

/// Evaluates `function` at xmin, xmin + step, ... while x <= xmax.
///
/// x is accumulated by repeated addition, so whether a point lands on xmax
/// depends on the rounding of `step`.
pub fn sample(
    function: PlotFunction,
    xmin: f64,
    xmax: f64,
    step: f64,
    max_samples: usize,
) -> SampleSet {
    let mut points = Vec::new();
    let mut x = xmin;
    while x <= xmax {
        if points.len() >= max_samples {
            warn!(
                "Stopped sampling {:?} at x = {} after {} points",
                function, x, max_samples
            );
            break;
        }

        points.push(DataPoint::new(x, function.eval(x)));
        x += step;
    }

    SampleSet { function, points }
}

/// Everything needed to produce one atomic canvas update.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    pub bounds: Bounds,
    pub step: f64,
    pub functions: Vec<PlotFunction>,
}

impl PlotRequest {
    pub fn sample_all(&self, max_samples: usize) -> Vec<SampleSet> {
        info!(
            "Sampling {:?} over [{}, {}] with step {}",
            self.functions, self.bounds.xmin, self.bounds.xmax, self.step
        );
        self.functions
            .iter()
            .map(|f| sample(*f, self.bounds.xmin, self.bounds.xmax, self.step, max_samples))
            .collect()
    }
}
