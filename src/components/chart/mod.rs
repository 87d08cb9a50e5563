//! SVG renderer for [`ChartSpec`]s.

mod arc;
mod cartesian;
mod legend;
mod radar;
mod tooltip;

use dioxus::prelude::*;

pub use arc::ArcChart;
pub use cartesian::CartesianChart;
pub use legend::Legend;
pub use radar::RadarChart;
pub use tooltip::{Tooltip, TooltipLine};

use crate::charts::geometry::PlotArea;
use crate::charts::overlay::OverlayRegion;
use crate::charts::{ChartKind, ChartSpec, Plugin};
use crate::theme::Palette;

/// Height reserved for the bottom legend inside the chart region.
pub const LEGEND_HEIGHT: f32 = 44.0;

/// Rough rendered width of `s`; wide glyphs count as a full em.
pub(crate) fn text_width(s: &str, font_size: u32) -> f32 {
    let fs = font_size as f32;
    s.chars()
        .map(|c| if c.is_ascii() { fs * 0.6 } else { fs })
        .sum()
}

#[allow(non_snake_case)]
#[component]
pub fn ChartView(id: String, spec: ChartSpec, palette: Palette, width: f32, height: f32) -> Element {
    let chart_height = if spec.options.legend.is_some() {
        height - LEGEND_HEIGHT
    } else {
        height
    };

    let body = match spec.kind {
        ChartKind::Line | ChartKind::Area | ChartKind::Bar | ChartKind::HorizontalBar => rsx! {
            CartesianChart { id: id.clone(), spec: spec.clone(), palette: palette.clone(), width, height: chart_height }
        },
        ChartKind::Doughnut | ChartKind::Pie => rsx! {
            ArcChart { id: id.clone(), spec: spec.clone(), palette: palette.clone(), width, height: chart_height }
        },
        ChartKind::Radar => rsx! {
            RadarChart { id: id.clone(), spec: spec.clone(), palette: palette.clone(), width, height: chart_height }
        },
    };

    rsx! {
        div { class: "chart-view", "data-chart": "{id}",
            {body}
            if spec.options.legend.is_some() {
                Legend { spec: spec.clone(), palette: palette.clone() }
            }
        }
    }
}

/// Post-draw plugins, painted over the finished chart.
#[allow(non_snake_case)]
#[component]
pub(crate) fn PluginLayer(plugins: Vec<Plugin>, area: PlotArea) -> Element {
    rsx! {
        {
            plugins.iter().enumerate().map(|(i, plugin)| match plugin {
                Plugin::Freemium(region) => rsx! {
                    FreemiumOverlay { key: "{i}", region: region.clone(), area }
                },
            })
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn FreemiumOverlay(region: OverlayRegion, area: PlotArea) -> Element {
    let geo = region.resolve(&area);
    let (dx, dy0, dy1) = geo.divider;
    let dash = region.dash_array();
    let span = format!("{}..{}", region.start(), region.end());
    rsx! {
        g { class: "freemium-overlay", "data-locked": "{span}", pointer_events: "none",
            rect { x: "{geo.mask.x}", y: "{geo.mask.y}", width: "{geo.mask.width}", height: "{geo.mask.height}", fill: "{region.fill}" }
            line { x1: "{dx}", y1: "{dy0}", x2: "{dx}", y2: "{dy1}", stroke: "{region.border}", stroke_width: "{region.border_width}", stroke_dasharray: "{dash}" }
            text { x: "{geo.headline.0}", y: "{geo.headline.1}", fill: "{region.caption_color}", text_anchor: "middle",
                style: "font:bold 14px Inter, system-ui, sans-serif", "{region.caption[0]}"
            }
            text { x: "{geo.subline.0}", y: "{geo.subline.1}", fill: "{region.caption_color}", text_anchor: "middle",
                style: "font:11px Inter, system-ui, sans-serif", "{region.caption[1]}"
            }
        }
    }
}
