use dioxus::prelude::*;

use super::{PluginLayer, Tooltip, TooltipLine};
use crate::charts::geometry::{points_attr, polar, radar_points, PlotArea};
use crate::charts::options::{Scales, GRID_COLOR};
use crate::charts::{ChartSpec, Fill, PointFill};
use crate::theme::Palette;
use crate::utils::format::format_number;

/// Room left around the web for the point labels.
const LABEL_MARGIN: f32 = 28.0;

struct RadarSeries {
    outline: String,
    fill: String,
    stroke: String,
    stroke_width: f32,
    points: Vec<(f32, f32)>,
    point_r: f32,
    point_fill: String,
    point_stroke_width: f32,
}

#[allow(non_snake_case)]
#[component]
pub fn RadarChart(id: String, spec: ChartSpec, palette: Palette, width: f32, height: f32) -> Element {
    let mut hovered = use_signal(|| Option::<(usize, usize)>::None);

    let Scales::Radial(scale) = &spec.options.scales else {
        return rsx! { Fragment {} };
    };
    let area = PlotArea::new(0.0, 0.0, width, height);
    let (cx, cy) = area.center();
    let radius = (width.min(height) / 2.0 - LABEL_MARGIN).max(0.0);
    let spokes = spec.dataset.labels.len();
    let view_box = format!("0 0 {width} {height}");
    let anim = spec.options.animation.css();
    let to_r = |v: f64| radius * (v.clamp(0.0, scale.max) / scale.max) as f32;

    let step = scale.step.max(1.0);
    let rings: Vec<(f64, String)> = (1..=(scale.max / step).round() as usize)
        .map(|k| {
            let v = step * k as f64;
            (v, points_attr(&radar_points(cx, cy, &vec![to_r(v); spokes])))
        })
        .collect();
    let spoke_ends: Vec<(f32, f32)> = radar_points(cx, cy, &vec![radius; spokes]);
    let point_labels: Vec<(f32, f32, &'static str, String)> = spec
        .dataset
        .labels
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let angle = 360.0 * i as f32 / spokes.max(1) as f32;
            let (x, y) = polar(cx, cy, radius + 12.0, angle);
            let anchor = if (x - cx).abs() < 1.0 {
                "middle"
            } else if x > cx {
                "start"
            } else {
                "end"
            };
            (x, y + 4.0, anchor, l.clone())
        })
        .collect();

    let shapes: Vec<RadarSeries> = spec
        .dataset
        .series
        .iter()
        .map(|s| {
            let radii: Vec<f32> = s.values.iter().map(|v| to_r(*v)).collect();
            let points = radar_points(cx, cy, &radii);
            let stroke = s
                .border
                .map(|r| palette.color(r).to_string())
                .unwrap_or_else(|| palette.paint(s.paint.at(0)));
            let fill = match s.fill {
                Fill::Solid(sw) => palette.paint(sw),
                Fill::Gradient(role) => palette.rgba(role, 0.2),
                Fill::None => "none".to_string(),
            };
            let point_fill = match s.point_fill {
                Some(PointFill::White) => "#FFFFFF".to_string(),
                Some(PointFill::Role(r)) => palette.color(r).to_string(),
                None => stroke.clone(),
            };
            RadarSeries {
                outline: points_attr(&points),
                fill,
                stroke,
                stroke_width: s.border_width,
                points,
                point_r: s.point_radius,
                point_fill,
                point_stroke_width: s.point_border_width,
            }
        })
        .collect();

    let tooltip = hovered().and_then(|(si, i)| {
        let s = spec.dataset.series.get(si)?;
        let shape = shapes.get(si)?;
        let (ax, ay) = *shape.points.get(i)?;
        let value = s.values.get(i).copied().unwrap_or_default();
        let text = format!("{}: {}", s.name(), format_number(value));
        let title = spec.dataset.labels.get(i).cloned().unwrap_or_default();
        Some((ax, ay, title, vec![TooltipLine { color: shape.stroke.clone(), text }]))
    });

    let tick_font = scale.tick_font.css();
    let label_font = scale.point_label_font.css();

    rsx! {
        svg { class: "chart-canvas", id: "{id}-canvas", view_box: "{view_box}", width: "100%", height: "100%",
            g { class: "radar-grid",
                for (k, (_, pts)) in rings.iter().enumerate() {
                    polygon { key: "r{k}", points: "{pts}", fill: "none", stroke: "{GRID_COLOR}", stroke_width: "1" }
                }
                for (k, (x, y)) in spoke_ends.iter().enumerate() {
                    line { key: "s{k}", x1: "{cx}", y1: "{cy}", x2: "{x}", y2: "{y}", stroke: "{GRID_COLOR}", stroke_width: "1" }
                }
                for (k, (v, _)) in rings.iter().enumerate() {
                    text { key: "t{k}", x: "{cx}", y: "{cy - to_r(*v) + 4.0}", text_anchor: "middle",
                        fill: "{palette.text_secondary}", style: "{tick_font}", "{format_number(*v)}"
                    }
                }
                for (k, (x, y, anchor, label)) in point_labels.iter().enumerate() {
                    text { key: "p{k}", x: "{x}", y: "{y}", text_anchor: "{anchor}",
                        fill: "{palette.text_primary}", style: "{label_font}", "{label}"
                    }
                }
            }
            g { class: "chart-series", style: "{anim}",
                for (si, shape) in shapes.iter().enumerate() {
                    g { key: "{si}", class: "radar-series",
                        polygon { points: "{shape.outline}", fill: "{shape.fill}", stroke: "{shape.stroke}", stroke_width: "{shape.stroke_width}", stroke_linejoin: "round" }
                        for (i, (px, py)) in shape.points.iter().enumerate() {
                            circle { key: "{i}", cx: "{px}", cy: "{py}", r: "{shape.point_r}",
                                fill: "{shape.point_fill}", stroke: "#FFFFFF", stroke_width: "{shape.point_stroke_width}",
                                onmouseenter: move |_| *hovered.write() = Some((si, i)),
                                onmouseleave: move |_| *hovered.write() = None,
                                ontouchstart: move |_| *hovered.write() = Some((si, i)),
                                ontouchend: move |_| *hovered.write() = None,
                            }
                        }
                    }
                }
            }
            PluginLayer { plugins: spec.plugins.clone(), area }
            if let Some((ax, ay, title, lines)) = tooltip {
                Tooltip {
                    x: ax,
                    y: ay,
                    canvas_width: width,
                    canvas_height: height,
                    title,
                    lines,
                    style: spec.options.tooltip.clone(),
                    palette: palette.clone(),
                }
            }
        }
    }
}
