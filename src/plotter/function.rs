/// One of the fixed closed-form functions the plotter can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum PlotFunction {
    #[value(name = "f1")]
    F1,
    #[value(name = "f2")]
    F2,
    #[value(name = "f3")]
    F3,
}

impl PlotFunction {
    pub const NUM_FUNCTIONS: usize = 3;
    pub const ALL: [PlotFunction; Self::NUM_FUNCTIONS] =
        [PlotFunction::F1, PlotFunction::F2, PlotFunction::F3];

    pub fn eval(self, x: f64) -> f64 {
        match self {
            PlotFunction::F1 => x.sin() + x * x - x / 3.0,
            PlotFunction::F2 => x.cos() * x + x.abs().sqrt(),
            PlotFunction::F3 => (x / 2.0).tan() + x / 5.0 - (x * x) / 10.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlotFunction::F1 => "f1(x) = sin(x) + x² - x/3",
            PlotFunction::F2 => "f2(x) = cos(x)·x + √|x|",
            PlotFunction::F3 => "f3(x) = tan(x/2) + x/5 - x²/10",
        }
    }
}
