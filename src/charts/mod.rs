//! Declarative chart specifications.
//!
//! A [`ChartSpec`] bundles the dataset, the options and the post-draw plugins
//! for one chart. Specs are validated when they are built, so the renderer in
//! `components::chart` can assume lengths and scale shapes line up.

pub mod data;
pub mod geometry;
pub mod gradient;
pub mod options;
pub mod overlay;
pub mod registry;

use serde::Serialize;

use crate::theme::{Role, Swatch};
use options::{ChartOptions, Scales};
use overlay::OverlayRegion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Area,
    Bar,
    HorizontalBar,
    Doughnut,
    Pie,
    Radar,
}

impl ChartKind {
    pub fn is_cartesian(self) -> bool {
        matches!(
            self,
            ChartKind::Line | ChartKind::Area | ChartKind::Bar | ChartKind::HorizontalBar
        )
    }

    pub fn is_arc(self) -> bool {
        matches!(self, ChartKind::Doughnut | ChartKind::Pie)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    #[error("{kind:?} chart has no series")]
    NoSeries { kind: ChartKind },
    #[error("series `{series}` has {values} values but the chart has {labels} labels")]
    LengthMismatch {
        series: String,
        labels: usize,
        values: usize,
    },
    #[error("series `{series}` has {colors} per-point colours but the chart has {labels} labels")]
    PaintLengthMismatch {
        series: String,
        labels: usize,
        colors: usize,
    },
    #[error("{kind:?} chart cannot use {scales} scales")]
    ScaleMismatch { kind: ChartKind, scales: &'static str },
    #[error("{kind:?} chart needs unregistered element {element:?}")]
    Unregistered {
        kind: ChartKind,
        element: registry::ElementKind,
    },
    #[error("overlay fractions must satisfy 0 <= start < end <= 1 (got {start}..{end})")]
    InvalidOverlay { start: f32, end: f32 },
}

/// Colour(s) used for a series' bars, slices or markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesPaint {
    Single(Swatch),
    PerPoint(Vec<Swatch>),
}

impl SeriesPaint {
    pub fn at(&self, index: usize) -> Swatch {
        match self {
            SeriesPaint::Single(s) => *s,
            SeriesPaint::PerPoint(v) => v
                .get(index)
                .or_else(|| v.last())
                .copied()
                .unwrap_or_else(|| Role::Primary.solid()),
        }
    }

    pub fn swatches(&self) -> Vec<Swatch> {
        match self {
            SeriesPaint::Single(s) => vec![*s],
            SeriesPaint::PerPoint(v) => v.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Fill {
    None,
    Solid(Swatch),
    /// Vertical gradient from the plot bottom to top, see [`gradient::vertical_fill`].
    Gradient(Role),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub label: Option<String>,
    pub values: Vec<f64>,
    pub paint: SeriesPaint,
    pub border: Option<Role>,
    pub border_width: f32,
    pub fill: Fill,
    pub tension: f32,
    pub point_radius: f32,
    /// `None` draws markers in the series border colour.
    pub point_fill: Option<PointFill>,
    pub point_border_width: f32,
    pub corner_radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PointFill {
    White,
    Role(Role),
}

impl Series {
    pub fn new(label: Option<&str>, values: Vec<f64>, paint: SeriesPaint) -> Self {
        Self {
            label: label.map(str::to_string),
            values,
            paint,
            border: None,
            border_width: 0.0,
            fill: Fill::None,
            tension: 0.0,
            point_radius: 0.0,
            point_fill: None,
            point_border_width: 0.0,
            corner_radius: 0.0,
        }
    }

    pub fn border(mut self, role: Role, width: f32) -> Self {
        self.border = Some(role);
        self.border_width = width;
        self
    }

    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn tension(mut self, tension: f32) -> Self {
        self.tension = tension;
        self
    }

    pub fn points(mut self, radius: f32, fill: Option<PointFill>, border_width: f32) -> Self {
        self.point_radius = radius;
        self.point_fill = fill;
        self.point_border_width = border_width;
        self
    }

    pub fn rounded(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn name(&self) -> &str {
        self.label.as_deref().unwrap_or("(unnamed)")
    }

    /// Every swatch this series draws with, for palette checks.
    pub fn swatches(&self) -> Vec<Swatch> {
        let mut out = self.paint.swatches();
        if let Some(role) = self.border {
            out.push(role.solid());
        }
        match self.fill {
            Fill::Solid(s) => out.push(s),
            Fill::Gradient(role) => out.push(role.solid()),
            Fill::None => {}
        }
        if let Some(PointFill::Role(role)) = self.point_fill {
            out.push(role.solid());
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl Dataset {
    pub fn new(labels: &[&str], series: Vec<Series>) -> Self {
        Self {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            series,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "id", rename_all = "camelCase")]
pub enum Plugin {
    Freemium(OverlayRegion),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub dataset: Dataset,
    pub options: ChartOptions,
    pub plugins: Vec<Plugin>,
}

impl ChartSpec {
    pub fn new(
        kind: ChartKind,
        dataset: Dataset,
        options: ChartOptions,
        plugins: Vec<Plugin>,
    ) -> Result<Self, ChartError> {
        registry::elements().check(kind)?;

        if dataset.series.is_empty() {
            return Err(ChartError::NoSeries { kind });
        }
        let labels = dataset.labels.len();
        for s in &dataset.series {
            if s.values.len() != labels {
                return Err(ChartError::LengthMismatch {
                    series: s.name().to_string(),
                    labels,
                    values: s.values.len(),
                });
            }
            if let SeriesPaint::PerPoint(colors) = &s.paint {
                if colors.len() != labels {
                    return Err(ChartError::PaintLengthMismatch {
                        series: s.name().to_string(),
                        labels,
                        colors: colors.len(),
                    });
                }
            }
        }

        let scales_ok = match &options.scales {
            Scales::None => kind.is_arc(),
            Scales::Cartesian { .. } => kind.is_cartesian(),
            Scales::Radial(_) => kind == ChartKind::Radar,
        };
        if !scales_ok {
            return Err(ChartError::ScaleMismatch {
                kind,
                scales: options.scales.shape(),
            });
        }

        for plugin in &plugins {
            match plugin {
                Plugin::Freemium(region) => region.validate()?,
            }
        }

        Ok(Self {
            kind,
            dataset,
            options,
            plugins,
        })
    }

    pub fn swatches(&self) -> Vec<Swatch> {
        self.dataset
            .series
            .iter()
            .flat_map(Series::swatches)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use options::{bar_options, line_options, pie_options, radar_options};

    fn bars(values: Vec<f64>) -> Dataset {
        Dataset::new(
            &["a", "b", "c"],
            vec![Series::new(
                Some("sales"),
                values,
                SeriesPaint::Single(Role::Primary.solid()),
            )],
        )
    }

    #[test]
    fn accepts_matching_lengths() {
        let spec = ChartSpec::new(
            ChartKind::Bar,
            bars(vec![1.0, 2.0, 3.0]),
            bar_options("億"),
            vec![],
        );
        assert!(spec.is_ok());
    }

    #[test]
    fn rejects_short_series() {
        let err = ChartSpec::new(
            ChartKind::Bar,
            bars(vec![1.0, 2.0]),
            bar_options("億"),
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ChartError::LengthMismatch {
                series: "sales".into(),
                labels: 3,
                values: 2
            }
        );
    }

    #[test]
    fn rejects_per_point_paint_mismatch() {
        let data = Dataset::new(
            &["a", "b"],
            vec![Series::new(
                None,
                vec![1.0, 2.0],
                SeriesPaint::PerPoint(vec![Role::Primary.solid()]),
            )],
        );
        let err = ChartSpec::new(ChartKind::Pie, data, pie_options(), vec![]).unwrap_err();
        assert!(matches!(err, ChartError::PaintLengthMismatch { colors: 1, .. }));
    }

    #[test]
    fn rejects_empty_dataset() {
        let data = Dataset::new(&["a"], vec![]);
        let err = ChartSpec::new(ChartKind::Line, data, line_options("¥"), vec![]).unwrap_err();
        assert_eq!(err, ChartError::NoSeries { kind: ChartKind::Line });
    }

    #[test]
    fn radial_scale_only_for_radar() {
        let err = ChartSpec::new(
            ChartKind::Bar,
            bars(vec![1.0, 2.0, 3.0]),
            radar_options(),
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ChartError::ScaleMismatch {
                kind: ChartKind::Bar,
                scales: "radial"
            }
        );

        let err = ChartSpec::new(
            ChartKind::Pie,
            bars(vec![1.0, 2.0, 3.0]),
            line_options("¥"),
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::ScaleMismatch { scales: "cartesian", .. }));
    }
}
