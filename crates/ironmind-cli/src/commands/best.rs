use clap::Args;
use ironmind_core::{Config, LogStore};

#[derive(Args)]
pub struct BestArgs {
    /// How many days to show (defaults to analytics.top_days)
    #[arg(long)]
    pub top: Option<usize>,
}

pub fn run(args: BestArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = LogStore::open_default()?;
    let analyzer = super::open_analyzer(&store, config.analytics.min_days_analytics)?;

    let top = args.top.unwrap_or(config.analytics.top_days);
    let best = analyzer.best_performing_days(top);
    println!("{}", serde_json::to_string_pretty(&best)?);
    Ok(())
}
