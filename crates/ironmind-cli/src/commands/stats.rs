use clap::Subcommand;
use ironmind_core::{Config, LogStore};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Headline numbers: days tracked, averages, totals
    Summary,
    /// Gym-vs-productivity correlations, strongest first
    Correlations,
    /// Full correlation matrix over all numeric columns
    Matrix,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = LogStore::open_default()?;
    let analyzer = super::open_analyzer(&store, config.analytics.min_days_analytics)?;

    match action {
        StatsAction::Summary => {
            let summary = analyzer.summary();
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Correlations => {
            let pairs = analyzer.gym_productivity_correlation();
            println!("{}", serde_json::to_string_pretty(&pairs)?);
        }
        StatsAction::Matrix => {
            let matrix = analyzer.correlation_matrix();
            println!("{}", serde_json::to_string_pretty(&matrix)?);
        }
    }
    Ok(())
}
