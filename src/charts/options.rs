use serde::Serialize;

use crate::utils::format::{format_currency, format_number, format_percent, format_with_unit};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub title_display: bool,
    /// `None` hides the built-in legend; the card header labels the chart.
    pub legend: Option<LegendOptions>,
    pub tooltip: TooltipStyle,
    pub animation: Animation,
    pub scales: Scales,
    pub index_axis: IndexAxis,
    /// Doughnut hole as a fraction of the outer radius.
    pub cutout: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    pub size: u32,
    pub weight: u32,
}

impl Font {
    pub const fn new(size: u32, weight: u32) -> Self {
        Self { size, weight }
    }

    pub fn css(&self) -> String {
        format!("font-size:{}px;font-weight:{}", self.size, self.weight)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOptions {
    pub position: LegendPosition,
    pub padding: u32,
    pub use_point_style: bool,
    pub font: Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendPosition {
    Bottom,
}

/// Tooltip colours are literal or derived from the theme's text colours at
/// render time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipStyle {
    pub background: &'static str,
    pub border_width: u32,
    pub corner_radius: u32,
    pub padding: u32,
    pub display_colors: bool,
    pub title_font: Font,
    pub body_font: Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    EaseInOutQuart,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseInOutQuart => "cubic-bezier(0.76, 0, 0.24, 1)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Animation {
    pub fn css(&self) -> String {
        format!(
            "animation:chart-enter {}ms {} both",
            self.duration_ms,
            self.easing.css()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    X,
    Y,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TickFormat {
    Plain,
    Currency(&'static str),
    Percent,
    Unit(&'static str),
}

impl TickFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormat::Plain => format_number(value),
            TickFormat::Currency(symbol) => format_currency(value, symbol),
            TickFormat::Percent => format_percent(value),
            TickFormat::Unit(unit) => format_with_unit(value, unit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub grid: bool,
    pub border: bool,
    pub ticks: TickFormat,
    pub tick_font: Font,
    pub begin_at_zero: bool,
    pub max: Option<f64>,
}

impl AxisOptions {
    /// Category axis: no grid lines, plain labels.
    fn category() -> Self {
        Self {
            grid: false,
            border: false,
            ticks: TickFormat::Plain,
            tick_font: Font::new(12, 500),
            begin_at_zero: false,
            max: None,
        }
    }

    /// Value axis: light grid, formatted ticks starting at zero.
    fn value(ticks: TickFormat, max: Option<f64>) -> Self {
        Self {
            grid: true,
            border: false,
            ticks,
            tick_font: Font::new(12, 500),
            begin_at_zero: true,
            max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialScale {
    pub begin_at_zero: bool,
    pub max: f64,
    pub step: f64,
    pub tick_font: Font,
    pub point_label_font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Scales {
    None,
    Cartesian { x: AxisOptions, y: AxisOptions },
    Radial(RadialScale),
}

impl Scales {
    pub fn shape(&self) -> &'static str {
        match self {
            Scales::None => "no",
            Scales::Cartesian { .. } => "cartesian",
            Scales::Radial(_) => "radial",
        }
    }
}

/// Light grid line colour shared by every value axis.
pub const GRID_COLOR: &str = "rgba(226, 232, 240, 0.6)";

pub fn common_options() -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        title_display: false,
        legend: None,
        tooltip: TooltipStyle {
            background: "rgba(255, 255, 255, 0.95)",
            border_width: 1,
            corner_radius: 12,
            padding: 16,
            display_colors: true,
            title_font: Font::new(14, 600),
            body_font: Font::new(13, 400),
        },
        animation: Animation {
            duration_ms: 2000,
            easing: Easing::EaseInOutQuart,
        },
        scales: Scales::None,
        index_axis: IndexAxis::X,
        cutout: None,
    }
}

fn bottom_legend() -> LegendOptions {
    LegendOptions {
        position: LegendPosition::Bottom,
        padding: 20,
        use_point_style: true,
        font: Font::new(12, 500),
    }
}

pub fn line_options(currency: &'static str) -> ChartOptions {
    ChartOptions {
        scales: Scales::Cartesian {
            x: AxisOptions::category(),
            y: AxisOptions::value(TickFormat::Currency(currency), None),
        },
        ..common_options()
    }
}

pub fn doughnut_options() -> ChartOptions {
    ChartOptions {
        legend: Some(bottom_legend()),
        cutout: Some(0.7),
        ..common_options()
    }
}

pub fn bar_options(unit: &'static str) -> ChartOptions {
    ChartOptions {
        scales: Scales::Cartesian {
            x: AxisOptions::category(),
            y: AxisOptions::value(TickFormat::Unit(unit), None),
        },
        ..common_options()
    }
}

pub fn pie_options() -> ChartOptions {
    ChartOptions {
        legend: Some(bottom_legend()),
        ..common_options()
    }
}

pub fn radar_options() -> ChartOptions {
    ChartOptions {
        legend: Some(bottom_legend()),
        scales: Scales::Radial(RadialScale {
            begin_at_zero: true,
            max: 100.0,
            step: 20.0,
            tick_font: Font::new(10, 400),
            point_label_font: Font::new(12, 600),
        }),
        ..common_options()
    }
}

pub fn area_options() -> ChartOptions {
    ChartOptions {
        legend: Some(bottom_legend()),
        scales: Scales::Cartesian {
            x: AxisOptions::category(),
            y: AxisOptions::value(TickFormat::Percent, Some(100.0)),
        },
        ..common_options()
    }
}

pub fn horizontal_bar_options() -> ChartOptions {
    ChartOptions {
        index_axis: IndexAxis::Y,
        scales: Scales::Cartesian {
            x: AxisOptions::value(TickFormat::Percent, Some(100.0)),
            y: AxisOptions::category(),
        },
        ..common_options()
    }
}
