use clap::Args;
use ironmind_core::{Config, LogStore};

#[derive(Args)]
pub struct PredictArgs {
    /// Planned weight to lift in kg
    #[arg(long)]
    pub weight: f64,
    /// Planned protein intake in grams
    #[arg(long)]
    pub protein: f64,
}

pub fn run(args: PredictArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = LogStore::open_default()?;
    let analyzer = super::open_analyzer(&store, config.analytics.min_days_prediction)?;

    let prediction = analyzer.predict_productivity(args.weight, args.protein)?;
    println!("predicted focus score: {prediction}/10");

    let verdict = if prediction >= 8.0 {
        "peak performance expected with this combination"
    } else if prediction >= 6.0 {
        "solid performance expected"
    } else {
        "below par; consider adjusting weight or protein"
    };
    println!("{verdict}");
    Ok(())
}
