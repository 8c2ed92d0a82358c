use eframe::egui;
use log::{info, warn};

use crate::config::Config;
use crate::plotter::{Field, PlotFunction};

use crate::gui::graph_canvas::GraphCanvas;
use crate::gui::plot_form::PlotForm;

const STORAGE_KEY: &str = "plot_form";

pub struct ControlPanel {
    form: PlotForm,
    canvas: GraphCanvas,
    max_samples: usize,
    remember: bool,
}

impl ControlPanel {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let mut control_panel = ControlPanel::from_config(&config);
        if config.remember {
            control_panel.restore(cc.storage);
        }

        if config.plot_on_start {
            control_panel.plot();
        }

        control_panel
    }

    fn from_config(config: &Config) -> Self {
        Self {
            form: PlotForm::from_config(config),
            canvas: GraphCanvas::new(),
            max_samples: config.max_samples,
            remember: config.remember,
        }
    }

    fn restore(&mut self, storage: Option<&dyn eframe::Storage>) {
        let Some(storage) = storage else {
            info!("No storage found");
            return;
        };

        let Some(json) = storage.get_string(STORAGE_KEY) else {
            info!("Plot form not found in storage");
            return;
        };

        match serde_json::from_str::<PlotForm>(&json) {
            Ok(form) => {
                info!("Restored plot form from storage");
                self.form = form;
            }
            Err(e) => warn!("Ignoring stored plot form: {}", e),
        }
    }

    fn plot(&mut self) {
        let request = self.form.request();
        let sample_sets = request.sample_all(self.max_samples);
        info!(
            "Plotting {} function(s) in x [{}, {}], y [{}, {}]",
            sample_sets.len(),
            request.bounds.xmin,
            request.bounds.xmax,
            request.bounds.ymin,
            request.bounds.ymax
        );
        self.canvas.set_data(sample_sets, request.bounds);
    }

    fn clear(&mut self) {
        info!("Clearing plot");
        self.canvas.clear();
    }
}

impl eframe::App for ControlPanel {
    fn persist_egui_memory(&self) -> bool {
        self.remember
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if !self.remember {
            return;
        }

        match serde_json::to_string(&self.form) {
            Ok(json) => storage.set_string(STORAGE_KEY, json),
            Err(e) => log::error!("Failed to save plot form: {}", e),
        }
    }

    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        let mut plot_requested = false;

        egui::SidePanel::left("Controls")
            .resizable(false)
            .show(ctx, |ui| {
                ui.group(|ui| {
                    ui.label("Functions");
                    for function in PlotFunction::ALL {
                        let mut checked = self.form.enabled[function as usize];
                        if ui.checkbox(&mut checked, function.label()).clicked() {
                            self.form.toggle(function);
                        }
                    }
                });

                ui.group(|ui| {
                    ui.label("Intervals");
                    egui::Grid::new("Intervals").num_columns(2).show(ui, |ui| {
                        for field in Field::ALL {
                            ui.label(field.label());
                            let resp = ui.add(
                                egui::TextEdit::singleline(self.form.text_mut(field))
                                    .desired_width(80.0),
                            );
                            if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
                            {
                                plot_requested = true;
                            }
                            ui.end_row();
                        }
                    });
                });

                if ui.button("Plot").clicked() {
                    plot_requested = true;
                }
                if ui.button("Clear").clicked() {
                    self.clear();
                }
            });

        if plot_requested {
            self.plot();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas.show(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use eframe::App;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
    }

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    fn panel(args: &[&str]) -> ControlPanel {
        let config = Config::try_parse_from(std::iter::once("funcplot").chain(args.iter().copied()))
            .unwrap();
        ControlPanel::from_config(&config)
    }

    #[test]
    fn plot_then_clear() {
        let mut panel = panel(&[]);
        panel.plot();
        let state = panel.canvas.state();
        assert_eq!(state.sample_sets().len(), 1);
        assert_eq!(state.sample_sets()[0].function, PlotFunction::F1);

        panel.clear();
        assert!(!panel.canvas.state().has_data());
    }

    #[test]
    fn plotting_nothing_empties_canvas() {
        let mut panel = panel(&["--functions", "f1,f2,f3"]);
        panel.plot();
        assert_eq!(panel.canvas.state().sample_sets().len(), 3);

        for function in PlotFunction::ALL {
            panel.form.toggle(function);
        }
        panel.plot();
        assert!(!panel.canvas.state().has_data());
    }

    #[test]
    fn respects_sample_cap() {
        let mut panel = panel(&["--max-samples", "10"]);
        panel.plot();
        assert_eq!(panel.canvas.state().sample_sets()[0].points.len(), 10);
    }

    #[test]
    fn nothing_persisted_by_default() {
        let mut panel = panel(&[]);
        assert!(!panel.persist_egui_memory());

        let mut storage = MemoryStorage::default();
        panel.save(&mut storage);
        assert!(storage.values.is_empty());
    }

    #[test]
    fn remember_saves_and_restores_form() {
        let mut panel = panel(&["--remember", "--xmax", "4"]);
        assert!(panel.persist_egui_memory());

        let mut storage = MemoryStorage::default();
        panel.save(&mut storage);
        assert!(storage.values.contains_key(STORAGE_KEY));

        let mut restored = self::panel(&["--remember", "--xmax", "99", "--functions", "f2"]);
        restored.restore(Some(&storage as &dyn eframe::Storage));
        assert_eq!(restored.form.xmax, "4");
        assert_eq!(restored.form.enabled, [true, false, false]);
    }

    #[test]
    fn malformed_storage_keeps_seeded_form() {
        let mut storage = MemoryStorage::default();
        storage
            .values
            .insert(STORAGE_KEY.to_string(), "{not json".to_string());

        let mut panel = panel(&["--remember", "--step", "0.5"]);
        panel.restore(Some(&storage as &dyn eframe::Storage));
        assert_eq!(panel.form.step, "0.5");

        panel.restore(None);
        assert_eq!(panel.form.step, "0.5");
    }
}
