use serde::Serialize;

use super::geometry::PlotArea;
use crate::theme::Color;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
    pub alpha: f32,
}

/// A linear gradient in user-space coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub stops: Vec<GradientStop>,
}

/// Fill that fades from almost transparent at the plot bottom to 30% at the
/// top. Depends on the plot area, so it is rebuilt whenever that changes.
pub fn vertical_fill(color: Color, area: &PlotArea) -> LinearGradient {
    let stop = |offset: f32, alpha: f32| GradientStop {
        offset,
        color,
        alpha,
    };
    LinearGradient {
        x1: 0.0,
        y1: area.bottom(),
        x2: 0.0,
        y2: area.top,
        stops: vec![stop(0.0, 0.05), stop(0.5, 0.15), stop(1.0, 0.3)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn runs_bottom_to_top_with_rising_opacity() {
        let area = PlotArea::new(40.0, 10.0, 300.0, 200.0);
        let g = vertical_fill(Color::rgb(0x25, 0x63, 0xEB), &area);
        assert_eq!((g.y1, g.y2), (210.0, 10.0));
        let alphas: Vec<f32> = g.stops.iter().map(|s| s.alpha).collect();
        assert_eq!(alphas, vec![0.05, 0.15, 0.3]);
        assert_eq!(g.stops[2].color.rgba(g.stops[2].alpha), "rgba(37, 99, 235, 0.3)");
    }

    #[test]
    fn follows_the_plot_area() {
        let c = Color::rgb(1, 2, 3);
        let small = vertical_fill(c, &PlotArea::new(0.0, 5.0, 100.0, 50.0));
        let large = vertical_fill(c, &PlotArea::new(0.0, 5.0, 100.0, 400.0));
        assert_ne!(small.y1, large.y1);
        assert_eq!(small.y2, large.y2);
    }
}
