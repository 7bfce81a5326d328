pub mod funnel_chart;
pub mod stats_card;

pub use funnel_chart::FunnelChart;
pub use stats_card::StatsCard;
