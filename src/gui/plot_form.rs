use log::info;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::plotter::{Bounds, Field, PlotFunction, PlotRequest};

/// Raw contents of the control surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotForm {
    pub xmin: String,
    pub xmax: String,
    pub ymin: String,
    pub ymax: String,
    pub step: String,
    pub enabled: [bool; PlotFunction::NUM_FUNCTIONS],
}

impl Default for PlotForm {
    fn default() -> Self {
        PlotForm {
            xmin: "-10".to_string(),
            xmax: "10".to_string(),
            ymin: "-10".to_string(),
            ymax: "10".to_string(),
            step: "0.1".to_string(),
            enabled: [true, false, false],
        }
    }
}

impl PlotForm {
    pub fn from_config(config: &Config) -> Self {
        let mut enabled = [false; PlotFunction::NUM_FUNCTIONS];
        for function in &config.functions {
            enabled[*function as usize] = true;
        }

        PlotForm {
            xmin: config.xmin.clone(),
            xmax: config.xmax.clone(),
            ymin: config.ymin.clone(),
            ymax: config.ymax.clone(),
            step: config.step.clone(),
            enabled,
        }
    }

    pub fn text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::XMin => &mut self.xmin,
            Field::XMax => &mut self.xmax,
            Field::YMin => &mut self.ymin,
            Field::YMax => &mut self.ymax,
            Field::Step => &mut self.step,
        }
    }

    pub fn toggle(&mut self, function: PlotFunction) {
        let enabled = &mut self.enabled[function as usize];
        *enabled = !*enabled;
        info!("User toggled {:?}: {}", function, *enabled);
    }

    /// Reads the form, substituting defaults for unusable fields.
    pub fn request(&self) -> PlotRequest {
        let bounds = Bounds {
            xmin: Field::XMin.parse_or_default(&self.xmin),
            xmax: Field::XMax.parse_or_default(&self.xmax),
            ymin: Field::YMin.parse_or_default(&self.ymin),
            ymax: Field::YMax.parse_or_default(&self.ymax),
        };
        let functions = PlotFunction::ALL
            .into_iter()
            .filter(|f| self.enabled[*f as usize])
            .collect();

        PlotRequest {
            bounds,
            step: Field::Step.parse_or_default(&self.step),
            functions,
        }
    }
}
