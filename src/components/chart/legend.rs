use dioxus::prelude::*;

use crate::charts::{ChartSpec, Fill};
use crate::theme::Palette;

#[derive(Debug, Clone, PartialEq)]
struct LegendItem {
    label: String,
    fill: String,
    stroke: String,
}

/// Arc charts list their categories, everything else lists series.
fn items(spec: &ChartSpec, palette: &Palette) -> Vec<LegendItem> {
    if spec.kind.is_arc() {
        let Some(series) = spec.dataset.series.first() else {
            return Vec::new();
        };
        return spec
            .dataset
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let color = palette.paint(series.paint.at(i));
                LegendItem {
                    label: label.clone(),
                    fill: color.clone(),
                    stroke: color,
                }
            })
            .collect();
    }
    spec.dataset
        .series
        .iter()
        .map(|s| {
            let stroke = s
                .border
                .map(|r| palette.color(r).to_string())
                .unwrap_or_else(|| palette.paint(s.paint.at(0)));
            let fill = match s.fill {
                Fill::Solid(sw) => palette.paint(sw),
                _ => stroke.clone(),
            };
            LegendItem {
                label: s.name().to_string(),
                fill,
                stroke,
            }
        })
        .collect()
}

#[allow(non_snake_case)]
#[component]
pub fn Legend(spec: ChartSpec, palette: Palette) -> Element {
    let Some(opts) = spec.options.legend.as_ref() else {
        return rsx! { Fragment {} };
    };
    let entries = items(&spec, &palette);
    let list_style = format!("gap:6px {}px;{}", opts.padding, opts.font.css());
    let marker_radius = if opts.use_point_style { "50%" } else { "2px" };

    rsx! {
        ul { class: "legend legend-bottom", style: "{list_style}",
            for (i, item) in entries.iter().enumerate() {
                li { key: "{i}", class: "legend-item",
                    span { class: "legend-marker",
                        style: "background:{item.fill};border-color:{item.stroke};border-radius:{marker_radius}"
                    }
                    span { style: "color:{palette.text_secondary}", "{item.label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::data;

    #[test]
    fn arc_legend_lists_categories() {
        let spec = data::market_position().unwrap();
        let labels: Vec<String> = items(&spec, &Palette::cool())
            .into_iter()
            .map(|i| i.label)
            .collect();
        assert_eq!(labels, vec!["自社", "競合A", "競合B", "競合C", "その他"]);
    }

    #[test]
    fn series_legend_uses_border_colour() {
        let spec = data::strategic_kpis().unwrap();
        let entries = items(&spec, &Palette::cool());
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].label, "Customer Satisfaction");
        assert_eq!(entries[0].stroke, "#0891B2");
        assert_eq!(entries[0].fill, "rgba(8, 145, 178, 0.3)");
    }
}
