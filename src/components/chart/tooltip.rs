use dioxus::prelude::*;

use super::text_width;
use crate::charts::options::TooltipStyle;
use crate::theme::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLine {
    pub color: String,
    pub text: String,
}

/// Hover card anchored at (`x`, `y`) and kept inside the canvas.
#[allow(non_snake_case)]
#[component]
pub fn Tooltip(
    x: f32,
    y: f32,
    canvas_width: f32,
    canvas_height: f32,
    title: String,
    lines: Vec<TooltipLine>,
    style: TooltipStyle,
    palette: Palette,
) -> Element {
    let pad = style.padding as f32;
    let swatch = if style.display_colors { 16.0 } else { 0.0 };
    let title_h = style.title_font.size as f32 + 4.0;
    let line_h = style.body_font.size as f32 + 6.0;

    let content_w = lines
        .iter()
        .map(|l| text_width(&l.text, style.body_font.size) + swatch)
        .fold(text_width(&title, style.title_font.size), f32::max);
    let tip_w = (content_w + pad * 2.0).min(canvas_width);
    let tip_h = (pad * 2.0 + title_h + line_h * lines.len() as f32).min(canvas_height);

    // Prefer above the anchor, flip below when there is no room.
    let tip_x = (x - tip_w / 2.0).clamp(0.0, (canvas_width - tip_w).max(0.0));
    let above = y - 12.0 - tip_h;
    let tip_y = if above >= 0.0 { above } else { (y + 12.0).min(canvas_height - tip_h) };

    let title_y = tip_y + pad + style.title_font.size as f32;
    let title_style = style.title_font.css();
    let body_style = style.body_font.css();
    let text_x = tip_x + pad;
    let label_x = text_x + swatch;
    // (text baseline, swatch top, line)
    let rows: Vec<(f32, f32, &TooltipLine)> = lines
        .iter()
        .enumerate()
        .map(|(i, l)| {
            let base = title_y + 6.0 + line_h * (i as f32 + 1.0);
            (base, base - 10.0, l)
        })
        .collect();

    rsx! {
        g { class: "chart-tooltip", pointer_events: "none",
            rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "{style.corner_radius}",
                fill: "{style.background}", stroke: "{palette.border}", stroke_width: "{style.border_width}"
            }
            text { x: "{text_x}", y: "{title_y}", fill: "{palette.text_primary}", style: "{title_style}", "{title}" }
            for (i, (base, swatch_y, line)) in rows.into_iter().enumerate() {
                g { key: "{i}",
                    if style.display_colors {
                        rect { x: "{text_x}", y: "{swatch_y}", width: "10", height: "10", rx: "2", fill: "{line.color}" }
                    }
                    text { x: "{label_x}", y: "{base}", fill: "{palette.text_secondary}", style: "{body_style}", "{line.text}" }
                }
            }
        }
    }
}
