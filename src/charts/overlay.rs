//! Freemium overlay: greys out the tail of a chart's plot area and labels it
//! as a paid feature. Drawn after the chart; data and scales are untouched.

use serde::Serialize;

use super::geometry::{PlotArea, Rect};
use super::ChartError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayRegion {
    start: f32,
    end: f32,
    pub fill: &'static str,
    pub border: &'static str,
    pub border_width: f32,
    pub dash: [f32; 2],
    pub caption_color: &'static str,
    pub caption: [&'static str; 2],
}

/// Resolved drawing instructions for one plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayGeometry {
    pub mask: Rect,
    /// x, top, bottom of the dashed boundary.
    pub divider: (f32, f32, f32),
    pub headline: (f32, f32),
    pub subline: (f32, f32),
}

impl OverlayRegion {
    /// The rightmost quarter.
    pub fn locked_quarter() -> Self {
        Self::styled(0.75, 1.0)
    }

    fn styled(start: f32, end: f32) -> Self {
        Self {
            start,
            end,
            fill: "rgba(100, 116, 139, 0.1)",
            border: "rgba(100, 116, 139, 0.3)",
            border_width: 2.0,
            dash: [5.0, 5.0],
            caption_color: "#64748B",
            caption: ["🔒 Pro Features", "Upgrade to view"],
        }
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    /// Fractions must satisfy `0 <= start < end <= 1`.
    pub fn validate(&self) -> Result<(), ChartError> {
        let (start, end) = (self.start, self.end);
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) || start >= end {
            return Err(ChartError::InvalidOverlay { start, end });
        }
        Ok(())
    }

    pub fn resolve(&self, area: &PlotArea) -> OverlayGeometry {
        let x0 = area.x_at(self.start);
        let x1 = area.x_at(self.end);
        let cx = area.x_at((self.start + self.end) / 2.0);
        let (_, cy) = area.center();
        OverlayGeometry {
            mask: Rect {
                x: x0,
                y: area.top,
                width: x1 - x0,
                height: area.height,
            },
            divider: (x0, area.top, area.bottom()),
            headline: (cx, cy - 10.0),
            subline: (cx, cy + 10.0),
        }
    }

    pub fn dash_array(&self) -> String {
        format!("{} {}", self.dash[0], self.dash[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::options::horizontal_bar_options;
    use crate::charts::{ChartKind, ChartSpec, Dataset, Plugin, Series, SeriesPaint};
    use crate::theme::Role;
    use pretty_assertions::assert_eq;

    #[test]
    fn mask_covers_last_quarter_at_any_size() {
        let overlay = OverlayRegion::locked_quarter();
        for area in [
            PlotArea::new(0.0, 0.0, 400.0, 300.0),
            PlotArea::new(96.0, 12.0, 1092.0, 248.0),
            PlotArea::new(3.0, 7.0, 17.0, 5.0),
        ] {
            let g = overlay.resolve(&area);
            let start = (g.mask.x - area.left) / area.width;
            let end = (g.mask.x + g.mask.width - area.left) / area.width;
            assert!((start - 0.75).abs() < 1e-5, "start {start}");
            assert!((end - 1.0).abs() < 1e-5, "end {end}");
            assert_eq!(g.mask.y, area.top);
            assert_eq!(g.mask.height, area.height);
            assert_eq!(g.divider.0, g.mask.x);
        }
    }

    #[test]
    fn caption_is_centred_in_the_masked_span() {
        let area = PlotArea::new(0.0, 0.0, 800.0, 200.0);
        let g = OverlayRegion::locked_quarter().resolve(&area);
        assert_eq!(g.headline, (700.0, 90.0));
        assert_eq!(g.subline, (700.0, 110.0));
    }

    fn span(start: f32, end: f32) -> OverlayRegion {
        OverlayRegion {
            start,
            end,
            ..OverlayRegion::locked_quarter()
        }
    }

    #[test]
    fn rejects_out_of_range_fractions() {
        assert!(span(0.8, 0.5).validate().is_err());
        assert!(span(-0.1, 0.5).validate().is_err());
        assert!(span(0.5, 1.2).validate().is_err());
        assert!(span(0.5, 0.5).validate().is_err());
        assert!(span(f32::NAN, 1.0).validate().is_err());
        assert!(span(0.25, 0.5).validate().is_ok());
        assert!(OverlayRegion::locked_quarter().validate().is_ok());
    }

    #[test]
    fn chart_spec_rejects_a_malformed_overlay() {
        let data = Dataset::new(
            &["a", "b"],
            vec![Series::new(
                None,
                vec![10.0, 20.0],
                SeriesPaint::Single(Role::Primary.solid()),
            )],
        );
        let err = ChartSpec::new(
            ChartKind::HorizontalBar,
            data,
            horizontal_bar_options(),
            vec![Plugin::Freemium(span(1.5, 0.2))],
        )
        .unwrap_err();
        assert_eq!(err, ChartError::InvalidOverlay { start: 1.5, end: 0.2 });
    }

    #[test]
    fn dashed_border() {
        assert_eq!(OverlayRegion::locked_quarter().dash_array(), "5 5");
    }
}
