use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ironmind", version, about = "Ironmind daily gym/coding tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log and view daily entries
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Analytics over the logged history
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Predict the focus score for a planned gym day
    Predict(commands::predict::PredictArgs),
    /// Rank the best performing days
    Best(commands::best::BestArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Log { action } => commands::log::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Predict(args) => commands::predict::run(args),
        Commands::Best(args) => commands::best::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
