use dioxus::prelude::*;

use crate::theme::{Palette, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// The line under the big number, e.g. "12.5% YoY".
#[derive(Debug, Clone, PartialEq)]
pub struct HelpText {
    pub text: String,
    pub trend: Option<Trend>,
    /// `None` renders in neutral grey.
    pub role: Option<Role>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatSummary {
    pub label: String,
    pub value: String,
    pub value_role: Role,
    pub help: Option<HelpText>,
}

impl StatSummary {
    pub fn new(label: &str, value: &str, value_role: Role) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            value_role,
            help: None,
        }
    }

    pub fn help(mut self, text: &str, trend: Option<Trend>, role: Option<Role>) -> Self {
        self.help = Some(HelpText {
            text: text.to_string(),
            trend,
            role,
        });
        self
    }
}

#[allow(non_snake_case)]
#[component]
pub fn TrendIcon(trend: Trend, color: String) -> Element {
    let (name, d) = match trend {
        Trend::Up => ("up", "M6 2L10 6L8.5 7.5L6.75 5.75V10H5.25V5.75L3.5 7.5L2 6L6 2Z"),
        Trend::Down => ("down", "M6 10L2 6L3.5 4.5L5.25 6.25V2H6.75V6.25L8.5 4.5L10 6L6 10Z"),
    };
    rsx! {
        span { class: "trend-icon", "data-trend": "{name}",
            svg { width: "12", height: "12", view_box: "0 0 12 12", fill: "none",
                path { d: "{d}", fill: "{color}" }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn StatCard(stat: StatSummary, palette: Palette) -> Element {
    let value_color = palette.color(stat.value_role);
    let help_color = stat
        .help
        .as_ref()
        .and_then(|h| h.role)
        .map(|r| palette.color(r).to_string())
        .unwrap_or_else(|| "#4A5568".to_string());
    let icon_color = match stat.help.as_ref().and_then(|h| h.trend) {
        Some(Trend::Down) => palette.color(Role::Error),
        _ => palette.color(Role::Success),
    };

    rsx! {
        div { class: "card stat-card",
            p { class: "stat-label", "{stat.label}" }
            p { class: "stat-value", style: "color:{value_color}", "{stat.value}" }
            if let Some(help) = &stat.help {
                p { class: "stat-help", style: "color:{help_color}",
                    if let Some(trend) = help.trend {
                        TrendIcon { trend, color: icon_color.to_string() }
                    }
                    "{help.text}"
                }
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

    fn with_trend() -> Element {
        let stat = StatSummary::new("Annual Revenue", "$2.4B", Role::Primary).help(
            "12.5% YoY",
            Some(Trend::Up),
            Some(Role::Success),
        );
        rsx! { StatCard { stat, palette: Palette::cool() } }
    }

    fn without_help() -> Element {
        let stat = StatSummary::new("Annual Revenue", "$2.4B", Role::Primary);
        rsx! { StatCard { stat, palette: Palette::cool() } }
    }

    fn help_without_trend() -> Element {
        let stat = StatSummary::new("Customer Satisfaction", "94.2%", Role::Warning).help(
            "Industry Leading",
            None,
            None,
        );
        rsx! { StatCard { stat, palette: Palette::cool() } }
    }

    fn falling() -> Element {
        let stat = StatSummary::new("Churn", "2.1%", Role::Info).help(
            "0.4% QoQ",
            Some(Trend::Down),
            Some(Role::Error),
        );
        rsx! { StatCard { stat, palette: Palette::cool() } }
    }

    #[test]
    fn trend_renders_one_glyph_and_text() {
        let html = render(with_trend);
        assert_eq!(html.matches("data-trend=").count(), 1);
        assert!(html.contains("data-trend=\"up\""));
        assert!(html.contains("12.5% YoY"));
        assert!(html.contains("$2.4B"));
        assert!(html.contains("#2563EB"));
    }

    #[test]
    fn no_help_text_renders_no_glyph() {
        let html = render(without_help);
        assert_eq!(html.matches("data-trend=").count(), 0);
        assert!(!html.contains("stat-help"));
    }

    #[test]
    fn help_text_without_trend_has_no_glyph() {
        let html = render(help_without_trend);
        assert_eq!(html.matches("data-trend=").count(), 0);
        assert!(html.contains("Industry Leading"));
    }

    #[test]
    fn downward_trend_uses_down_glyph() {
        let html = render(falling);
        assert!(html.contains("data-trend=\"down\""));
        assert!(html.contains("#1E40AF"));
    }

    #[test]
    fn stylesheet_centres_stat_cards() {
        let css = include_str!("../../assets/dashboard.css");
        assert!(css.contains(".stat-card {\n  min-width: 200px;\n  text-align: center;\n}"));
        assert!(css.contains(".stat-help {\n  display: flex;\n  align-items: center;\n  justify-content: center;"));
    }

    #[test]
    fn identical_inputs_render_identically() {
        assert_eq!(render(with_trend), render(with_trend));
    }
}
