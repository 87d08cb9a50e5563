use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use super::chart_card::{Heading, CHART_REGION_HEIGHT};
use super::freemium_chart_card::show_upgrade_prompt;
use super::stat_card::{StatSummary, Trend};
use super::{ChartCard, ChartView, FreemiumChartCard, StatCard};
use crate::charts::data;
use crate::theme::{Role, Theme};

/// viewBox widths for a one-column and a full-width card.
const CELL_WIDTH: f32 = 420.0;
const WIDE_WIDTH: f32 = 1300.0;

/// Header copy sits on the backdrop gradient, so it is always light.
const TITLE_STYLE: &str = "color:#FFFFFF;text-shadow:0 4px 6px rgba(0, 0, 0, 0.3)";
const TAGLINE_STYLE: &str = "color:rgba(255, 255, 255, 0.92)";

pub fn summaries() -> Vec<StatSummary> {
    vec![
        StatSummary::new("Annual Revenue", "$2.4B", Role::Primary).help(
            "12.5% YoY",
            Some(Trend::Up),
            Some(Role::Success),
        ),
        StatSummary::new("Market Share", "34.8%", Role::Success).help(
            "vs Competition",
            Some(Trend::Up),
            Some(Role::Success),
        ),
        StatSummary::new("Customer Satisfaction", "94.2%", Role::Warning).help(
            "Industry Leading",
            None,
            None,
        ),
        StatSummary::new("Employee Engagement", "89.1%", Role::Info).help(
            "Top 5% Global",
            Some(Trend::Up),
            Some(Role::Success),
        ),
    ]
}

#[allow(non_snake_case)]
#[component]
pub fn Dashboard(theme: Theme) -> Element {
    let palette = theme.palette.clone();
    let page_style = format!("background:{}", palette.backdrop());
    debug!(theme = %theme.name, "[dashboard] render");

    let grid = match data::for_theme(theme.name) {
        Ok(charts) => {
            let cells = [
                ("revenue", Heading::new("Revenue Trend", Some("Monthly performance 2024")), &charts.revenue_trend),
                ("segments", Heading::new("Customer Segments", Some("Revenue distribution by segment")), &charts.customer_segments),
                ("regional", Heading::new("Regional Performance", Some("Sales by major cities")), &charts.regional_performance),
                ("market", Heading::new("Market Position", Some("Competitive landscape analysis")), &charts.market_position),
                ("matrix", Heading::new("Performance Matrix", Some("Key metrics vs industry average")), &charts.performance_matrix),
                ("kpis", Heading::new("Strategic KPIs", Some("Quarterly performance indicators")), &charts.strategic_kpis),
            ];
            rsx! {
                div { class: "chart-grid",
                    for (id, heading, spec) in cells {
                        ChartCard { key: "{id}", heading, palette: palette.clone(),
                            ChartView { id: id.to_string(), spec: spec.clone(), palette: palette.clone(), width: CELL_WIDTH, height: CHART_REGION_HEIGHT }
                        }
                    }
                    FreemiumChartCard {
                        heading: Heading::new("Analytics Overview", Some("Free plan: Limited data view")),
                        palette: palette.clone(),
                        columns: 3,
                        on_upgrade: move |_| show_upgrade_prompt(),
                        ChartView { id: "analytics".to_string(), spec: charts.analytics_overview.clone(), palette: palette.clone(), width: WIDE_WIDTH, height: CHART_REGION_HEIGHT }
                    }
                }
            }
        }
        Err(e) => {
            warn!("[dashboard] chart configuration rejected: {e}");
            rsx! {
                div { class: "card error-card",
                    p { class: "error-title", "Failed to build charts." }
                    p { class: "error-detail", "{e}" }
                }
            }
        }
    };

    rsx! {
        div { class: "page", style: "{page_style}",
            div { class: "page-inner",
                header { class: "page-header",
                    h1 { class: "page-title", style: TITLE_STYLE, "{theme.title}" }
                    p { class: "page-tagline", style: TAGLINE_STYLE, "{theme.tagline}" }
                }
                section { class: "stat-row",
                    for (i, stat) in summaries().into_iter().enumerate() {
                        StatCard { key: "{i}", stat, palette: palette.clone() }
                    }
                }
                section { class: "charts", {grid} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeName;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn cool() -> Element {
        rsx! { Dashboard { theme: Theme::by_name(ThemeName::Cool) } }
    }

    fn classic() -> Element {
        rsx! { Dashboard { theme: Theme::by_name(ThemeName::Classic) } }
    }

    #[test]
    fn page_has_header_four_stats_and_seven_charts() {
        let html = render(cool);
        assert!(html.contains("Executive Analytics Dashboard"));
        assert_eq!(html.matches("stat-card").count(), 4);
        assert_eq!(html.matches("data-chart=").count(), 7);
        assert_eq!(html.matches("chart-card").count(), 7);
        assert_eq!(html.matches("freemium-overlay").count(), 1);
    }

    #[test]
    fn header_text_is_light_on_the_backdrop() {
        for html in [render(cool), render(classic)] {
            assert!(html.contains("class=\"page-title\" style=\"color:#FFFFFF;text-shadow:0 4px 6px rgba(0, 0, 0, 0.3)\""));
            assert!(html.contains("class=\"page-tagline\" style=\"color:rgba(255, 255, 255, 0.92)\""));
        }
    }

    #[test]
    fn three_of_four_stats_show_a_trend_glyph() {
        let html = render(cool);
        assert_eq!(html.matches("data-trend=").count(), 3);
    }

    #[test]
    fn theme_only_changes_palette_and_copy() {
        let a = render(cool);
        let b = render(classic);
        assert_ne!(a, b);
        assert!(a.contains("#2563EB"));
        assert!(b.contains("#4318FF"));
        assert_eq!(a.matches("chart-card").count(), b.matches("chart-card").count());
    }

    #[test]
    fn rerender_is_structurally_identical() {
        assert_eq!(render(cool), render(cool));
    }
}
