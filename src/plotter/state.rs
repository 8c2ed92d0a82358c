use super::sampling::SampleSet;
use super::transform::Bounds;

/// Sample sets currently on display and the bounds they are drawn in.
#[derive(Debug, Clone, Default)]
pub struct PlotState {
    sample_sets: Vec<SampleSet>,
    bounds: Bounds,
}

impl PlotState {
    /// Replaces everything on display.
    pub fn set_data(&mut self, sample_sets: Vec<SampleSet>, bounds: Bounds) {
        self.sample_sets = sample_sets;
        self.bounds = bounds;
    }

    pub fn clear(&mut self) {
        self.sample_sets.clear();
    }

    pub fn has_data(&self) -> bool {
        !self.sample_sets.is_empty()
    }

    pub fn sample_sets(&self) -> &[SampleSet] {
        &self.sample_sets
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}
