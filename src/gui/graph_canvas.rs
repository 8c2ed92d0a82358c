use egui::{
    containers::Frame, epaint, epaint::PathStroke, vec2, Align2, Color32, FontId, Pos2, Rect,
    Stroke,
};

use crate::plotter::{self, Bounds, DataPoint, PlotState, SampleSet, ScreenTransform};
use crate::util;

const BACKGROUND: Color32 = Color32::WHITE;
const CURVE_COLORS: [Color32; 3] = [Color32::BLUE, Color32::RED, Color32::DARK_GREEN];
const MIN_SIZE: egui::Vec2 = vec2(400.0, 300.0);

fn create_curve_shape(
    sample_set: &SampleSet,
    to_screen: &ScreenTransform,
    thickness: f32,
    color: Color32,
) -> epaint::Shape {
    let points: Vec<Pos2> = sample_set
        .points
        .iter()
        .map(|p| to_screen.to_screen(*p))
        .collect();

    epaint::Shape::line(points, PathStroke::new(thickness, color))
}

fn create_guide_shapes(from: Pos2, to: Pos2) -> Vec<epaint::Shape> {
    epaint::Shape::dashed_line(&[from, to], Stroke::new(1.0, Color32::GRAY), 4.0, 2.0)
}

/// Shapes making up one frame of the canvas, background first.
pub fn frame_shapes(state: &PlotState, surface: Rect) -> Vec<epaint::Shape> {
    let mut shapes = vec![epaint::Shape::rect_filled(surface, 0.0, BACKGROUND)];
    if !state.has_data() {
        return shapes;
    }

    let Ok(to_screen) = util::log_on_err(ScreenTransform::new(
        state.bounds(),
        plotter::plot_rect(surface),
    )) else {
        return shapes;
    };

    shapes.push(epaint::Shape::rect_stroke(
        to_screen.rect(),
        0.0,
        Stroke::new(1.0, Color32::BLACK),
    ));

    let Bounds {
        xmin,
        xmax,
        ymin,
        ymax,
    } = state.bounds();
    if state.bounds().x_straddles_zero() {
        shapes.extend(create_guide_shapes(
            to_screen.to_screen(DataPoint::new(0.0, ymin)),
            to_screen.to_screen(DataPoint::new(0.0, ymax)),
        ));
    }
    if state.bounds().y_straddles_zero() {
        shapes.extend(create_guide_shapes(
            to_screen.to_screen(DataPoint::new(xmin, 0.0)),
            to_screen.to_screen(DataPoint::new(xmax, 0.0)),
        ));
    }

    for (i, sample_set) in state.sample_sets().iter().enumerate() {
        if sample_set.points.len() < 2 {
            continue;
        }

        shapes.push(create_curve_shape(
            sample_set,
            &to_screen,
            2.0,
            CURVE_COLORS[i % CURVE_COLORS.len()],
        ));
    }

    shapes
}

pub struct GraphCanvas {
    state: PlotState,
}

impl GraphCanvas {
    pub fn new() -> GraphCanvas {
        GraphCanvas {
            state: PlotState::default(),
        }
    }

    pub fn set_data(&mut self, sample_sets: Vec<SampleSet>, bounds: Bounds) {
        self.state.set_data(sample_sets, bounds);
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    #[cfg(test)]
    pub fn state(&self) -> &PlotState {
        &self.state
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        Frame::canvas(ui.style())
            .inner_margin(0.0)
            .show(ui, |ui| {
                let desired_size = ui.available_size().max(MIN_SIZE);
                let resp = ui.allocate_response(desired_size, egui::Sense::hover());
                let rect = resp.rect;

                let painter = ui.painter_at(rect);
                painter.extend(frame_shapes(&self.state, rect));

                // Cursor readout, only meaningful while something is drawn.
                if !self.state.has_data() {
                    return;
                }
                let Some(hover_pos) = resp.hover_pos() else {
                    return;
                };
                let Ok(to_screen) = ScreenTransform::new(self.state.bounds(), plotter::plot_rect(rect))
                else {
                    return;
                };
                if to_screen.rect().contains(hover_pos) {
                    painter.text(
                        to_screen.rect().left_top() + vec2(4.0, 4.0),
                        Align2::LEFT_TOP,
                        util::format_point(to_screen.from_screen(hover_pos)),
                        FontId::monospace(12.0),
                        Color32::BLACK,
                    );
                }
            });
    }
}
