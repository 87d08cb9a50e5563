use dioxus::prelude::*;

use crate::theme::Palette;

/// Height of the drawing region inside every chart card.
pub const CHART_REGION_HEIGHT: f32 = 300.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub title: String,
    pub subtitle: Option<String>,
}

impl Heading {
    pub fn new(title: &str, subtitle: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.map(str::to_string),
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn ChartCard(
    heading: Heading,
    palette: Palette,
    #[props(default = 1)] columns: u8,
    children: Element,
) -> Element {
    let grid_style = if columns > 1 {
        format!("grid-column:span {columns}")
    } else {
        String::new()
    };
    rsx! {
        div { class: "card chart-card", style: "{grid_style}",
            ChartHeading { heading, palette }
            div { class: "chart-region", style: "height:{CHART_REGION_HEIGHT}px", {children} }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn ChartHeading(heading: Heading, palette: Palette) -> Element {
    rsx! {
        div { class: "chart-heading",
            h2 { class: "chart-title", style: "color:{palette.text_primary}", "{heading.title}" }
            if let Some(sub) = &heading.subtitle {
                p { class: "chart-subtitle", style: "color:{palette.text_secondary}", "{sub}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn with_subtitle() -> Element {
        rsx! {
            ChartCard { heading: Heading::new("Revenue Trend", Some("Monthly performance 2024")), palette: Palette::cool(),
                span { class: "probe", "chart" }
            }
        }
    }

    fn without_subtitle() -> Element {
        rsx! {
            ChartCard { heading: Heading::new("Revenue Trend", None), palette: Palette::cool(), columns: 3,
                span { "chart" }
            }
        }
    }

    #[test]
    fn renders_heading_and_children() {
        let html = render(with_subtitle);
        assert!(html.contains("Revenue Trend"));
        assert!(html.contains("Monthly performance 2024"));
        assert!(html.contains("class=\"probe\""));
        assert!(html.contains("height:300px"));
        assert!(!html.contains("grid-column"));
    }

    #[test]
    fn subtitle_is_optional_and_cards_can_span() {
        let html = render(without_subtitle);
        assert!(!html.contains("chart-subtitle"));
        assert!(html.contains("grid-column:span 3"));
    }
}
