//! Site sections and the shared dialog.

mod donut_chart;
mod ecosystem_section;
mod feature_section;
mod footer;
mod hero;
mod modal_host;
pub mod navigation;
mod stats_section;

pub use donut_chart::DonutChart;
pub use ecosystem_section::EcosystemSection;
pub use feature_section::FeatureSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use modal_host::ModalHost;
pub use navigation::Navigation;
pub use stats_section::StatsSection;
