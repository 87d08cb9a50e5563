//! Static demo datasets for the seven dashboard charts.

use dioxus::logger::tracing::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

use super::options::{
    area_options, bar_options, doughnut_options, horizontal_bar_options, line_options,
    pie_options, radar_options,
};
use super::overlay::OverlayRegion;
use super::{ChartError, ChartKind, ChartSpec, Dataset, Fill, Plugin, PointFill, Series, SeriesPaint};
use crate::theme::{Role, Theme, ThemeName};

/// Unit word for the regional sales axis (hundreds of millions of yen).
pub const REGIONAL_UNIT: &str = "億";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub revenue_trend: ChartSpec,
    pub customer_segments: ChartSpec,
    pub regional_performance: ChartSpec,
    pub market_position: ChartSpec,
    pub performance_matrix: ChartSpec,
    pub strategic_kpis: ChartSpec,
    pub analytics_overview: ChartSpec,
}

impl DashboardCharts {
    pub fn all(&self) -> [&ChartSpec; 7] {
        [
            &self.revenue_trend,
            &self.customer_segments,
            &self.regional_performance,
            &self.market_position,
            &self.performance_matrix,
            &self.strategic_kpis,
            &self.analytics_overview,
        ]
    }
}

fn per_point(roles: &[Role]) -> SeriesPaint {
    SeriesPaint::PerPoint(roles.iter().map(|r| r.solid()).collect())
}

pub fn revenue_trend(theme: &Theme) -> Result<ChartSpec, ChartError> {
    let labels = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let revenue = Series::new(
        Some("売上高 (万円)"),
        vec![
            420.0, 580.0, 450.0, 720.0, 890.0, 650.0, 980.0, 1120.0, 850.0, 1250.0, 1380.0, 1450.0,
        ],
        SeriesPaint::Single(Role::Primary.solid()),
    )
    .border(Role::Primary, 3.0)
    .fill(Fill::Gradient(Role::Primary))
    .tension(0.4)
    .points(6.0, Some(PointFill::White), 3.0);

    ChartSpec::new(
        ChartKind::Line,
        Dataset::new(&labels, vec![revenue]),
        line_options(theme.currency_symbol),
        vec![],
    )
}

pub fn customer_segments() -> Result<ChartSpec, ChartError> {
    let shares = Series::new(
        None,
        vec![45.0, 30.0, 15.0, 10.0],
        per_point(&[Role::Primary, Role::Secondary, Role::Success, Role::Info]),
    );
    ChartSpec::new(
        ChartKind::Doughnut,
        Dataset::new(&["Enterprise", "SMB", "Startup", "Government"], vec![shares]),
        doughnut_options(),
        vec![],
    )
}

pub fn regional_performance() -> Result<ChartSpec, ChartError> {
    let sales = Series::new(
        Some("売上 (億円)"),
        vec![25.0, 18.0, 12.0, 8.0, 6.0, 5.0],
        per_point(&[
            Role::Primary,
            Role::Secondary,
            Role::Success,
            Role::Warning,
            Role::Info,
            Role::Indigo,
        ]),
    )
    .rounded(8.0);
    ChartSpec::new(
        ChartKind::Bar,
        Dataset::new(
            &["Tokyo", "Osaka", "Nagoya", "Fukuoka", "Sendai", "Sapporo"],
            vec![sales],
        ),
        bar_options(REGIONAL_UNIT),
        vec![],
    )
}

pub fn market_position() -> Result<ChartSpec, ChartError> {
    let share = Series::new(
        None,
        vec![35.0, 25.0, 20.0, 10.0, 10.0],
        per_point(&[
            Role::Primary,
            Role::Secondary,
            Role::Success,
            Role::Warning,
            Role::Indigo,
        ]),
    );
    ChartSpec::new(
        ChartKind::Pie,
        Dataset::new(&["自社", "競合A", "競合B", "競合C", "その他"], vec![share]),
        pie_options(),
        vec![],
    )
}

pub fn performance_matrix() -> Result<ChartSpec, ChartError> {
    let ours = Series::new(
        Some("自社"),
        vec![85.0, 90.0, 75.0, 88.0, 92.0, 87.0],
        SeriesPaint::Single(Role::Primary.solid()),
    )
    .border(Role::Primary, 3.0)
    .fill(Fill::Solid(Role::Primary.alpha(0.2)))
    .points(6.0, Some(PointFill::Role(Role::Primary)), 2.0);
    let industry = Series::new(
        Some("業界平均"),
        vec![70.0, 75.0, 80.0, 65.0, 70.0, 75.0],
        SeriesPaint::Single(Role::Secondary.solid()),
    )
    .border(Role::Secondary, 2.0)
    .fill(Fill::Solid(Role::Secondary.alpha(0.2)))
    .points(4.0, Some(PointFill::Role(Role::Secondary)), 2.0);

    ChartSpec::new(
        ChartKind::Radar,
        Dataset::new(
            &["Quality", "Speed", "Cost", "Innovation", "Support", "Reliability"],
            vec![ours, industry],
        ),
        radar_options(),
        vec![],
    )
}

pub fn strategic_kpis() -> Result<ChartSpec, ChartError> {
    let kpi = |label: &str, values: [f64; 4], role: Role| {
        Series::new(Some(label), values.to_vec(), SeriesPaint::Single(role.solid()))
            .border(role, 3.0)
            .fill(Fill::Solid(role.alpha(0.3)))
            .tension(0.4)
            .points(3.0, None, 1.0)
    };
    ChartSpec::new(
        ChartKind::Area,
        Dataset::new(
            &["Q1", "Q2", "Q3", "Q4"],
            vec![
                kpi("Customer Satisfaction", [85.0, 88.0, 92.0, 95.0], Role::Success),
                kpi("Employee Engagement", [78.0, 82.0, 86.0, 89.0], Role::Warning),
                kpi("Innovation Index", [72.0, 75.0, 81.0, 87.0], Role::Info),
            ],
        ),
        area_options(),
        vec![],
    )
}

pub fn analytics_overview() -> Result<ChartSpec, ChartError> {
    // Values visible on the free plan.
    let visible = Series::new(
        Some("Available Data (Free Plan)"),
        vec![75.0, 60.0, 85.0, 45.0, 70.0, 55.0],
        per_point(&[
            Role::Primary,
            Role::Secondary,
            Role::Success,
            Role::Warning,
            Role::Info,
            Role::Indigo,
        ]),
    )
    .rounded(6.0);
    ChartSpec::new(
        ChartKind::HorizontalBar,
        Dataset::new(
            &[
                "User Growth",
                "Revenue",
                "Traffic",
                "Engagement",
                "Conversion",
                "Retention",
            ],
            vec![visible],
        ),
        horizontal_bar_options(),
        vec![Plugin::Freemium(OverlayRegion::locked_quarter())],
    )
}

pub fn build(theme: &Theme) -> Result<DashboardCharts, ChartError> {
    let charts = DashboardCharts {
        revenue_trend: revenue_trend(theme)?,
        customer_segments: customer_segments()?,
        regional_performance: regional_performance()?,
        market_position: market_position()?,
        performance_matrix: performance_matrix()?,
        strategic_kpis: strategic_kpis()?,
        analytics_overview: analytics_overview()?,
    };
    let swatches: usize = charts.all().iter().map(|s| s.swatches().len()).sum();
    debug!(theme = %theme.name, swatches, "[charts] built dashboard specs");
    Ok(charts)
}

static COOL: Lazy<Result<DashboardCharts, ChartError>> =
    Lazy::new(|| build(&Theme::by_name(ThemeName::Cool)));
static CLASSIC: Lazy<Result<DashboardCharts, ChartError>> =
    Lazy::new(|| build(&Theme::by_name(ThemeName::Classic)));

/// Chart specs for a theme, built on first request and shared afterwards.
pub fn for_theme(name: ThemeName) -> Result<&'static DashboardCharts, &'static ChartError> {
    let charts: &'static Result<DashboardCharts, ChartError> = match name {
        ThemeName::Cool => &*COOL,
        ThemeName::Classic => &*CLASSIC,
    };
    charts.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::options::Scales;

    fn every_theme() -> Vec<(Theme, &'static DashboardCharts)> {
        ThemeName::ALL
            .into_iter()
            .map(|n| (Theme::by_name(n), for_theme(n).expect("charts build")))
            .collect()
    }

    #[test]
    fn labels_match_every_series() {
        for (_, charts) in every_theme() {
            for spec in charts.all() {
                let labels = spec.dataset.labels.len();
                for s in &spec.dataset.series {
                    assert_eq!(s.values.len(), labels, "{:?} {}", spec.kind, s.name());
                }
            }
        }
    }

    #[test]
    fn every_colour_resolves_in_the_palette() {
        for (theme, charts) in every_theme() {
            let entries: Vec<_> = theme.palette.entries().map(|(_, c)| c).collect();
            for spec in charts.all() {
                for swatch in spec.swatches() {
                    let c = theme.palette.color(swatch.role);
                    assert!(entries.contains(&c));
                    assert!((0.0..=1.0).contains(&swatch.alpha));
                }
            }
        }
    }

    #[test]
    fn one_chart_of_each_kind() {
        let charts = for_theme(ThemeName::Cool).unwrap();
        let kinds: Vec<ChartKind> = charts.all().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::Line,
                ChartKind::Doughnut,
                ChartKind::Bar,
                ChartKind::Pie,
                ChartKind::Radar,
                ChartKind::Area,
                ChartKind::HorizontalBar,
            ]
        );
    }

    #[test]
    fn only_the_freemium_chart_has_a_plugin() {
        let charts = for_theme(ThemeName::Classic).unwrap();
        for spec in charts.all() {
            let expected = usize::from(spec.kind == ChartKind::HorizontalBar);
            assert_eq!(spec.plugins.len(), expected);
        }
    }

    #[test]
    fn revenue_axis_uses_theme_currency() {
        let theme = Theme::by_name(ThemeName::Cool);
        let spec = revenue_trend(&theme).unwrap();
        let Scales::Cartesian { y, .. } = &spec.options.scales else {
            panic!("cartesian expected");
        };
        let label = y.ticks.format(1450.0);
        assert!(label.contains(theme.currency_symbol));
        assert!(label.contains("1,450"));
    }

    #[test]
    fn cached_specs_are_shared() {
        let a = for_theme(ThemeName::Cool).unwrap();
        let b = for_theme(ThemeName::Cool).unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn specs_serialize_to_json() {
        let charts = for_theme(ThemeName::Cool).unwrap();
        let json = serde_json::to_value(charts).unwrap();
        assert_eq!(json["revenueTrend"]["kind"], "line");
        assert_eq!(json["revenueTrend"]["dataset"]["labels"][0], "Jan");
        assert_eq!(json["analyticsOverview"]["plugins"][0]["id"], "freemium");
    }
}
