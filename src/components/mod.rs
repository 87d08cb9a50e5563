pub mod chart;
pub mod chart_card;
pub mod dashboard;
pub mod freemium_chart_card;
pub mod stat_card;

pub use chart::ChartView;
pub use chart_card::ChartCard;
pub use dashboard::Dashboard;
pub use freemium_chart_card::FreemiumChartCard;
pub use stat_card::StatCard;
