use dioxus::prelude::*;

use super::{PluginLayer, Tooltip, TooltipLine};
use crate::charts::geometry::{arc_slice_path, polar, PlotArea};
use crate::charts::ChartSpec;
use crate::theme::Palette;
use crate::utils::format::format_number;

/// Pixels a hovered slice moves outwards.
const HOVER_OFFSET: f32 = 4.0;

#[derive(Debug, Clone, PartialEq)]
struct Slice {
    start: f32,
    end: f32,
    fill: String,
}

/// Angles (degrees clockwise from 12 o'clock) for each value's share.
fn slices(values: &[f64]) -> Vec<(f32, f32)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return values.iter().map(|_| (0.0, 0.0)).collect();
    }
    let mut angle = 0.0f32;
    values
        .iter()
        .map(|v| {
            let sweep = (v.max(0.0) / total * 360.0) as f32;
            let span = (angle, angle + sweep);
            angle += sweep;
            span
        })
        .collect()
}

/// Pie and doughnut charts. Only the first series is drawn.
#[allow(non_snake_case)]
#[component]
pub fn ArcChart(id: String, spec: ChartSpec, palette: Palette, width: f32, height: f32) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    let area = PlotArea::new(0.0, 0.0, width, height);
    let (cx, cy) = area.center();
    let outer = (width.min(height) / 2.0 - HOVER_OFFSET - 2.0).max(0.0);
    let inner = outer * spec.options.cutout.unwrap_or(0.0);
    let view_box = format!("0 0 {width} {height}");
    let anim = spec.options.animation.css();

    let Some(series) = spec.dataset.series.first() else {
        return rsx! { Fragment {} };
    };
    let parts: Vec<Slice> = slices(&series.values)
        .into_iter()
        .enumerate()
        .map(|(i, (start, end))| Slice {
            start,
            end,
            fill: palette.paint(series.paint.at(i)),
        })
        .collect();
    let paths: Vec<(String, String)> = parts
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let (ox, oy) = if hovered() == Some(i) {
                let (px, py) = polar(0.0, 0.0, HOVER_OFFSET, (s.start + s.end) / 2.0);
                (cx + px, cy + py)
            } else {
                (cx, cy)
            };
            (arc_slice_path(ox, oy, outer, inner, s.start, s.end), s.fill.clone())
        })
        .collect();

    let tooltip = hovered().and_then(|i| {
        let s = parts.get(i)?;
        let (ax, ay) = polar(cx, cy, (outer + inner) / 2.0, (s.start + s.end) / 2.0);
        let value = series.values.get(i).copied().unwrap_or_default();
        let label = spec.dataset.labels.get(i).cloned().unwrap_or_default();
        let text = match &series.label {
            Some(name) => format!("{name}: {}", format_number(value)),
            None => format_number(value),
        };
        Some((ax, ay, label, vec![TooltipLine { color: s.fill.clone(), text }]))
    });

    rsx! {
        svg { class: "chart-canvas", id: "{id}-canvas", view_box: "{view_box}", width: "100%", height: "100%",
            g { class: "chart-series", style: "{anim}",
                for (i, (d, fill)) in paths.into_iter().enumerate() {
                    path { key: "{i}", class: "slice", d: "{d}", fill: "{fill}",
                        onmouseenter: move |_| *hovered.write() = Some(i),
                        onmouseleave: move |_| *hovered.write() = None,
                        ontouchstart: move |_| *hovered.write() = Some(i),
                        ontouchend: move |_| *hovered.write() = None,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_cover_the_full_circle() {
        let s = slices(&[45.0, 30.0, 15.0, 10.0]);
        assert_eq!(s[0].0, 0.0);
        assert!((s[0].1 - 162.0).abs() < 1e-3);
        assert!((s[3].1 - 360.0).abs() < 1e-3);
        for pair in s.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn empty_totals_draw_nothing() {
        assert_eq!(slices(&[0.0, 0.0]), vec![(0.0, 0.0), (0.0, 0.0)]);
    }
}
