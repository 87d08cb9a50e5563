use dioxus::prelude::*;

use super::{text_width, PluginLayer, Tooltip, TooltipLine};
use crate::charts::geometry::{nice_ticks, smooth_path, LinearScale, Padding, PlotArea};
use crate::charts::gradient::{vertical_fill, LinearGradient};
use crate::charts::options::{AxisOptions, IndexAxis, Scales, GRID_COLOR};
use crate::charts::{ChartKind, ChartSpec, Fill, PointFill, Series};
use crate::theme::Palette;
use crate::utils::format::format_number;

/// Share of a category band taken by its bars, and of that by each bar.
const CATEGORY_PERCENTAGE: f32 = 0.8;
const BAR_PERCENTAGE: f32 = 0.9;

struct Layout {
    area: PlotArea,
    value: LinearScale,
    ticks: Vec<f64>,
    categories: usize,
    horizontal: bool,
    /// Bars sit in the middle of their band; lines run edge to edge.
    offset: bool,
}

impl Layout {
    fn new(spec: &ChartSpec, value_axis: &AxisOptions, width: f32, height: f32) -> Self {
        let horizontal = spec.options.index_axis == IndexAxis::Y;
        let categories = spec.dataset.labels.len();
        let longest_label = spec
            .dataset
            .labels
            .iter()
            .map(|l| text_width(l, 12))
            .fold(0.0, f32::max);
        let pad = if horizontal {
            Padding { left: longest_label + 16.0, top: 12.0, right: 20.0, bottom: 28.0 }
        } else {
            Padding { left: 56.0, top: 12.0, right: 16.0, bottom: 28.0 }
        };
        let area = PlotArea::inset(width, height, pad);

        let data_max = spec
            .dataset
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(f64::MIN, f64::max);
        let data_min = if value_axis.begin_at_zero {
            0.0
        } else {
            spec.dataset
                .series
                .iter()
                .flat_map(|s| s.values.iter().copied())
                .fold(f64::MAX, f64::min)
        };
        let span = if horizontal { area.width / 60.0 } else { area.height / 30.0 };
        let max_ticks = (span.floor() as usize).clamp(3, 11);
        let ticks = nice_ticks(data_min.min(data_max), data_max, max_ticks, value_axis.max);
        let lo = ticks.first().copied().unwrap_or(0.0);
        let hi = ticks.last().copied().unwrap_or(1.0);
        let value = if horizontal {
            LinearScale { min: lo, max: hi, start: area.left, end: area.right() }
        } else {
            LinearScale { min: lo, max: hi, start: area.bottom(), end: area.top }
        };

        Self {
            area,
            value,
            ticks,
            categories,
            horizontal,
            offset: matches!(spec.kind, ChartKind::Bar | ChartKind::HorizontalBar),
        }
    }

    fn band(&self) -> f32 {
        let extent = if self.horizontal { self.area.height } else { self.area.width };
        extent / self.categories.max(1) as f32
    }

    /// Pixel position of category `i` along the index axis.
    fn category(&self, i: usize) -> f32 {
        let (start, extent) = if self.horizontal {
            (self.area.top, self.area.height)
        } else {
            (self.area.left, self.area.width)
        };
        if self.offset {
            start + self.band() * (i as f32 + 0.5)
        } else if self.categories > 1 {
            start + extent * i as f32 / (self.categories - 1) as f32
        } else {
            start + extent / 2.0
        }
    }

    /// (x, y) for value `v` of category `i`.
    fn point(&self, i: usize, v: f64) -> (f32, f32) {
        if self.horizontal {
            (self.value.map(v), self.category(i))
        } else {
            (self.category(i), self.value.map(v))
        }
    }

    fn baseline(&self) -> f32 {
        self.value.map(self.value.min.max(0.0))
    }
}

struct BarRect {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    r: f32,
    fill: String,
}

fn bars(layout: &Layout, series: &[Series], palette: &Palette) -> Vec<BarRect> {
    let n_series = series.len().max(1) as f32;
    let thickness = layout.band() * CATEGORY_PERCENTAGE / n_series * BAR_PERCENTAGE;
    let base = layout.baseline();
    let mut out = Vec::new();
    for (si, s) in series.iter().enumerate() {
        let shift = (si as f32 - (n_series - 1.0) / 2.0) * thickness / BAR_PERCENTAGE;
        for (i, v) in s.values.iter().enumerate() {
            let center = layout.category(i) + shift;
            let tip = layout.value.map(*v);
            let (x, y, w, h) = if layout.horizontal {
                (base.min(tip), center - thickness / 2.0, (tip - base).abs(), thickness)
            } else {
                (center - thickness / 2.0, base.min(tip), thickness, (base - tip).abs())
            };
            out.push(BarRect {
                x,
                y,
                w,
                h,
                r: s.corner_radius.min(w / 2.0).min(h / 2.0),
                fill: palette.paint(s.paint.at(i)),
            });
        }
    }
    out
}

struct LineShape {
    stroke: String,
    stroke_width: f32,
    line_d: String,
    area_d: Option<String>,
    area_fill: String,
    points: Vec<(f32, f32)>,
    point_r: f32,
    point_fill: String,
    point_stroke_width: f32,
}

fn lines(layout: &Layout, id: &str, series: &[Series], palette: &Palette) -> Vec<LineShape> {
    series
        .iter()
        .enumerate()
        .map(|(si, s)| {
            let points: Vec<(f32, f32)> = s
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| layout.point(i, *v))
                .collect();
            let line_d = smooth_path(&points, s.tension);
            let stroke = s
                .border
                .map(|r| palette.color(r).to_string())
                .unwrap_or_else(|| palette.paint(s.paint.at(0)));
            let area_fill = match s.fill {
                Fill::None => String::new(),
                Fill::Solid(sw) => palette.paint(sw),
                Fill::Gradient(_) => format!("url(#{id}-fill-{si})"),
            };
            let area_d = match (&s.fill, points.first(), points.last()) {
                (Fill::None, _, _) | (_, None, _) | (_, _, None) => None,
                (_, Some(first), Some(last)) => {
                    let base = layout.baseline();
                    Some(format!(
                        "{line_d} L {:.3} {base:.3} L {:.3} {base:.3} Z",
                        last.0, first.0
                    ))
                }
            };
            let point_fill = match s.point_fill {
                Some(PointFill::White) => "#FFFFFF".to_string(),
                Some(PointFill::Role(r)) => palette.color(r).to_string(),
                None => stroke.clone(),
            };
            LineShape {
                stroke,
                stroke_width: s.border_width,
                line_d,
                area_d,
                area_fill,
                points,
                point_r: s.point_radius,
                point_fill,
                point_stroke_width: s.point_border_width,
            }
        })
        .collect()
}

/// Line, area and bar charts in either orientation.
#[allow(non_snake_case)]
#[component]
pub fn CartesianChart(id: String, spec: ChartSpec, palette: Palette, width: f32, height: f32) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    let Scales::Cartesian { x, y } = &spec.options.scales else {
        return rsx! { Fragment {} };
    };
    let (index_axis, value_axis) = match spec.options.index_axis {
        IndexAxis::X => (x, y),
        IndexAxis::Y => (y, x),
    };
    let layout = Layout::new(&spec, value_axis, width, height);
    let area = layout.area;
    let view_box = format!("0 0 {width} {height}");
    let series = &spec.dataset.series;
    let is_bar = matches!(spec.kind, ChartKind::Bar | ChartKind::HorizontalBar);

    // Gradients depend on the plot area, so they are rebuilt every render.
    let gradients: Vec<(String, LinearGradient)> = series
        .iter()
        .enumerate()
        .filter_map(|(si, s)| match s.fill {
            Fill::Gradient(role) => Some((
                format!("{id}-fill-{si}"),
                vertical_fill(palette.color(role), &area),
            )),
            _ => None,
        })
        .collect();

    let tick_font = value_axis.tick_font.css();
    let label_font = index_axis.tick_font.css();
    let value_ticks: Vec<(f32, String)> = layout
        .ticks
        .iter()
        .map(|t| (layout.value.map(*t), value_axis.ticks.format(*t)))
        .collect();
    let category_labels: Vec<(f32, String)> = spec
        .dataset
        .labels
        .iter()
        .enumerate()
        .map(|(i, l)| (layout.category(i), l.clone()))
        .collect();

    let bar_rects = if is_bar { bars(&layout, series, &palette) } else { Vec::new() };
    let line_shapes = if is_bar { Vec::new() } else { lines(&layout, &id, series, &palette) };

    // Invisible hit targets, one band per category.
    let band = layout.band();
    let hit_targets: Vec<(f32, f32, f32, f32)> = (0..layout.categories)
        .map(|i| {
            let c = layout.category(i);
            let half = if layout.offset { band / 2.0 } else { (band / 2.0).max(8.0) };
            if layout.horizontal {
                (area.left, c - half, area.width, half * 2.0)
            } else {
                (c - half, area.top, half * 2.0, area.height)
            }
        })
        .collect();

    let tooltip = hovered().filter(|i| *i < layout.categories).map(|i| {
        let peak = series
            .iter()
            .filter_map(|s| s.values.get(i).copied())
            .fold(f64::MIN, f64::max);
        let (ax, ay) = layout.point(i, peak);
        let lines: Vec<TooltipLine> = series
            .iter()
            .map(|s| {
                let color = s
                    .border
                    .map(|r| palette.color(r).to_string())
                    .unwrap_or_else(|| palette.paint(s.paint.at(i)));
                let value = s.values.get(i).copied().unwrap_or_default();
                let text = match &s.label {
                    Some(label) => format!("{label}: {}", format_number(value)),
                    None => format_number(value),
                };
                TooltipLine { color, text }
            })
            .collect();
        (ax, ay, spec.dataset.labels[i].clone(), lines)
    });

    let anim = spec.options.animation.css();

    rsx! {
        svg { class: "chart-canvas", view_box: "{view_box}", width: "100%", height: "100%",
            defs {
                for (gid, grad) in gradients.iter() {
                    linearGradient { key: "{gid}", id: "{gid}", gradient_units: "userSpaceOnUse",
                        x1: "{grad.x1}", y1: "{grad.y1}", x2: "{grad.x2}", y2: "{grad.y2}",
                        for (k, stop) in grad.stops.iter().enumerate() {
                            stop { key: "{k}", offset: "{stop.offset}", stop_color: "{stop.color}", stop_opacity: "{stop.alpha}" }
                        }
                    }
                }
            }
            // Value axis grid and ticks
            for (k, (pos, label)) in value_ticks.iter().enumerate() {
                g { key: "v{k}",
                    if value_axis.grid {
                        if layout.horizontal {
                            line { x1: "{pos}", y1: "{area.top}", x2: "{pos}", y2: "{area.bottom()}", stroke: "{GRID_COLOR}", stroke_width: "1" }
                        } else {
                            line { x1: "{area.left}", y1: "{pos}", x2: "{area.right()}", y2: "{pos}", stroke: "{GRID_COLOR}", stroke_width: "1" }
                        }
                    }
                    if layout.horizontal {
                        text { x: "{pos}", y: "{area.bottom() + 18.0}", text_anchor: "middle", fill: "{palette.text_secondary}", style: "{tick_font}", "{label}" }
                    } else {
                        text { x: "{area.left - 8.0}", y: "{pos + 4.0}", text_anchor: "end", fill: "{palette.text_secondary}", style: "{tick_font}", "{label}" }
                    }
                }
            }
            // Category labels
            for (k, (pos, label)) in category_labels.iter().enumerate() {
                if layout.horizontal {
                    text { key: "c{k}", x: "{area.left - 8.0}", y: "{pos + 4.0}", text_anchor: "end", fill: "{palette.text_secondary}", style: "{label_font}", "{label}" }
                } else {
                    text { key: "c{k}", x: "{pos}", y: "{area.bottom() + 18.0}", text_anchor: "middle", fill: "{palette.text_secondary}", style: "{label_font}", "{label}" }
                }
            }
            g { class: "chart-series", style: "{anim}",
                for (k, b) in bar_rects.iter().enumerate() {
                    rect { key: "b{k}", class: "bar", x: "{b.x}", y: "{b.y}", width: "{b.w}", height: "{b.h}", rx: "{b.r}", fill: "{b.fill}" }
                }
                for (k, shape) in line_shapes.iter().enumerate() {
                    g { key: "l{k}", class: "line-series",
                        if let Some(d) = &shape.area_d {
                            path { d: "{d}", fill: "{shape.area_fill}", stroke: "none" }
                        }
                        path { d: "{shape.line_d}", fill: "none", stroke: "{shape.stroke}", stroke_width: "{shape.stroke_width}", stroke_linejoin: "round" }
                        if shape.point_r > 0.0 {
                            for (p, (px, py)) in shape.points.iter().enumerate() {
                                circle { key: "{p}", cx: "{px}", cy: "{py}", r: "{shape.point_r}", fill: "{shape.point_fill}", stroke: "{shape.stroke}", stroke_width: "{shape.point_stroke_width}" }
                            }
                        }
                    }
                }
            }
            PluginLayer { plugins: spec.plugins.clone(), area }
            for (i, (hx, hy, hw, hh)) in hit_targets.into_iter().enumerate() {
                rect { key: "h{i}", x: "{hx}", y: "{hy}", width: "{hw}", height: "{hh}", fill: "transparent",
                    onmouseenter: move |_| *hovered.write() = Some(i),
                    onmouseleave: move |_| *hovered.write() = None,
                    ontouchstart: move |_| *hovered.write() = Some(i),
                    ontouchend: move |_| *hovered.write() = None,
                }
            }
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
    use crate::charts::data;
    use crate::theme::{Theme, ThemeName};

    #[test]
    fn line_points_run_edge_to_edge() {
        let spec = data::revenue_trend(&Theme::by_name(ThemeName::Cool)).unwrap();
        let Scales::Cartesian { y, .. } = &spec.options.scales else {
            unreachable!()
        };
        let layout = Layout::new(&spec, y, 400.0, 300.0);
        assert_eq!(layout.category(0), layout.area.left);
        assert!((layout.category(11) - layout.area.right()).abs() < 1e-3);
        assert_eq!(layout.ticks.last(), Some(&1600.0));
    }

    #[test]
    fn bars_start_at_the_baseline() {
        let spec = data::regional_performance().unwrap();
        let Scales::Cartesian { y, .. } = &spec.options.scales else {
            unreachable!()
        };
        let layout = Layout::new(&spec, y, 400.0, 300.0);
        let rects = bars(&layout, &spec.dataset.series, &Palette::cool());
        assert_eq!(rects.len(), 6);
        for r in &rects {
            assert!((r.y + r.h - layout.area.bottom()).abs() < 1e-3);
            assert!(r.r <= 8.0);
        }
        // Tokyo is the tallest bar.
        assert!(rects[0].h > rects[1].h);
        assert_eq!(rects[0].fill, "#2563EB");
    }

    #[test]
    fn horizontal_bars_grow_from_the_left() {
        let spec = data::analytics_overview().unwrap();
        let Scales::Cartesian { x, .. } = &spec.options.scales else {
            unreachable!()
        };
        let layout = Layout::new(&spec, x, 1200.0, 300.0);
        assert!(layout.horizontal);
        assert_eq!(layout.ticks.last(), Some(&100.0));
        let rects = bars(&layout, &spec.dataset.series, &Palette::cool());
        for (r, v) in rects.iter().zip(&spec.dataset.series[0].values) {
            assert!((r.x - layout.area.left).abs() < 1e-3);
            let expected = layout.area.width * (*v as f32) / 100.0;
            assert!((r.w - expected).abs() < 1e-2);
        }
    }
}
