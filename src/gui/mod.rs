mod control_panel;
mod graph_canvas;
mod plot_form;

use control_panel::ControlPanel;

use crate::config::Config;

pub fn run(config: Config) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 560.0])
            .with_min_inner_size([640.0, 360.0]),
        persist_window: config.remember,
        ..Default::default()
    };
    eframe::run_native(
        "Function Plotter",
        options,
        Box::new(|cc| Ok(Box::new(ControlPanel::new(cc, config)))),
    )
}
