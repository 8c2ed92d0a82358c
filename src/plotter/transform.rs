use egui::{pos2, Pos2, Rect};
use snafu::prelude::*;

use super::{DegenerateRangeSnafu, Error};

/// Distance in points between the surface edge and the plot rectangle.
pub const PLOT_MARGIN: f32 = 30.0;

/// A sampled (x, y) pair in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        DataPoint { x, y }
    }
}

/// Axis bounds of the visible data window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            xmin: -10.0,
            xmax: 10.0,
            ymin: -10.0,
            ymax: 10.0,
        }
    }
}

impl Bounds {
    pub fn x_straddles_zero(&self) -> bool {
        self.xmin < 0.0 && self.xmax > 0.0
    }

    pub fn y_straddles_zero(&self) -> bool {
        self.ymin < 0.0 && self.ymax > 0.0
    }
}

/// The plot rectangle inside a drawing surface.
pub fn plot_rect(surface: Rect) -> Rect {
    surface.shrink(PLOT_MARGIN)
}

/// Affine mapping between data space and the plot rectangle.
///
/// Normalized x runs left to right across the rectangle, normalized y runs
/// bottom to top since screen y grows downward.
#[derive(Debug, Clone, Copy)]
pub struct ScreenTransform {
    bounds: Bounds,
    rect: Rect,
}

impl ScreenTransform {
    pub fn new(bounds: Bounds, rect: Rect) -> Result<Self, Error> {
        ensure!(bounds.xmax != bounds.xmin, DegenerateRangeSnafu { axis: 'x' });
        ensure!(bounds.ymax != bounds.ymin, DegenerateRangeSnafu { axis: 'y' });

        Ok(ScreenTransform { bounds, rect })
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn to_screen(&self, point: DataPoint) -> Pos2 {
        let b = &self.bounds;
        let sx = (point.x - b.xmin) / (b.xmax - b.xmin);
        let sy = (point.y - b.ymin) / (b.ymax - b.ymin);

        let px = self.rect.left() as f64 + sx * self.rect.width() as f64;
        let py = self.rect.bottom() as f64 - sy * self.rect.height() as f64;

        pos2(px as f32, py as f32)
    }

    pub fn from_screen(&self, pos: Pos2) -> DataPoint {
        let b = &self.bounds;
        let sx = (pos.x as f64 - self.rect.left() as f64) / self.rect.width() as f64;
        let sy = (self.rect.bottom() as f64 - pos.y as f64) / self.rect.height() as f64;

        DataPoint {
            x: b.xmin + sx * (b.xmax - b.xmin),
            y: b.ymin + sy * (b.ymax - b.ymin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(460.0, 360.0))
    }

    #[test]
    fn plot_rect_is_inset_by_margin() {
        let rect = plot_rect(surface());
        assert_eq!(rect.min, pos2(30.0, 30.0));
        assert_eq!(rect.max, pos2(430.0, 330.0));
    }

    #[test]
    fn maps_corners() {
        let transform = ScreenTransform::new(Bounds::default(), plot_rect(surface())).unwrap();
        assert_eq!(
            transform.to_screen(DataPoint::new(-10.0, -10.0)),
            pos2(30.0, 330.0)
        );
        assert_eq!(
            transform.to_screen(DataPoint::new(10.0, 10.0)),
            pos2(430.0, 30.0)
        );
        assert_eq!(
            transform.to_screen(DataPoint::new(0.0, 0.0)),
            pos2(230.0, 180.0)
        );
    }

    #[test]
    fn inverse_recovers_point() {
        let bounds = Bounds {
            xmin: -3.5,
            xmax: 12.25,
            ymin: 100.0,
            ymax: 250.0,
        };
        let transform = ScreenTransform::new(bounds, plot_rect(surface())).unwrap();
        for point in [
            DataPoint::new(-3.5, 100.0),
            DataPoint::new(0.0, 175.5),
            DataPoint::new(7.1, 249.0),
            DataPoint::new(12.25, 250.0),
        ] {
            let back = transform.from_screen(transform.to_screen(point));
            assert!((back.x - point.x).abs() < 1e-4, "{point:?} -> {back:?}");
            assert!((back.y - point.y).abs() < 1e-3, "{point:?} -> {back:?}");
        }
    }

    #[test]
    fn rejects_zero_width_ranges() {
        let bounds = Bounds {
            xmin: 5.0,
            xmax: 5.0,
            ..Bounds::default()
        };
        assert!(matches!(
            ScreenTransform::new(bounds, surface()),
            Err(Error::DegenerateRange { axis: 'x' })
        ));

        let bounds = Bounds {
            ymin: 1.0,
            ymax: 1.0,
            ..Bounds::default()
        };
        assert!(matches!(
            ScreenTransform::new(bounds, surface()),
            Err(Error::DegenerateRange { axis: 'y' })
        ));
    }

    #[test]
    fn zero_guides_need_a_sign_change() {
        assert!(Bounds::default().x_straddles_zero());
        let bounds = Bounds {
            xmin: 0.0,
            xmax: 4.0,
            ymin: -1.0,
            ymax: 1.0,
        };
        assert!(!bounds.x_straddles_zero());
        assert!(bounds.y_straddles_zero());
    }
}
