use chrono::NaiveDate;
use clap::Subcommand;
use ironmind_core::{GymFields, LogStore, ProductivityFields, WorkoutType};

#[derive(Subcommand)]
pub enum LogAction {
    /// Log an entry (today's date unless --date is given)
    Add {
        /// Weight lifted in kg
        #[arg(long, value_parser = parse_non_negative)]
        weight: f64,
        /// Workout type: push, pull, legs, cardio or rest
        #[arg(long)]
        workout: WorkoutType,
        /// Protein intake in grams
        #[arg(long, value_parser = parse_non_negative)]
        protein: f64,
        /// LeetCode problems solved
        #[arg(long, default_value_t = 0)]
        leetcode: u32,
        /// Hours spent coding, 0-24
        #[arg(long, default_value_t = 0.0, value_parser = parse_hours)]
        hours: f64,
        /// GitHub commits pushed
        #[arg(long, default_value_t = 0)]
        commits: u32,
        /// Focus score, 1-10
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
        focus: u8,
        /// Brain fog level, 1-10
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=10))]
        fog: u8,
        /// Backfill a specific date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show recent entries
    View {
        /// How many entries to show
        #[arg(long, default_value_t = 10)]
        last: usize,
    },
}

fn parse_non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("must be non-negative, got {value}"))
    }
}

fn parse_hours(s: &str) -> Result<f64, String> {
    let hours: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (0.0..=24.0).contains(&hours) {
        Ok(hours)
    } else {
        Err(format!("hours must be between 0 and 24, got {hours}"))
    }
}

pub fn run(action: LogAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = LogStore::open_default()?;

    match action {
        LogAction::Add {
            weight,
            workout,
            protein,
            leetcode,
            hours,
            commits,
            focus,
            fog,
            date,
        } => {
            store.initialize()?;
            let gym = GymFields {
                weight_lifted_kg: weight,
                workout_type: workout,
                protein_intake_g: protein,
            };
            let productivity = ProductivityFields {
                leetcode_solved: leetcode,
                coding_hours: hours,
                github_commits: commits,
                focus_score: focus,
                brain_fog_level: fog,
            };
            let entry = match date {
                Some(date) => {
                    let entry = ironmind_core::Entry::new(date, gym, productivity);
                    store.append_entry(&entry)?;
                    entry
                }
                None => store.add_entry(gym, productivity)?,
            };
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        LogAction::View { last } => {
            let records = store.view_logs(last)?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(subcommand)]
        action: LogAction,
    }

    const BASE: [&str; 8] = [
        "harness", "add", "--weight", "30", "--workout", "push", "--protein", "120",
    ];

    fn parse_with(extra: &[&str]) -> Result<Harness, clap::Error> {
        let mut args = BASE.to_vec();
        args.extend_from_slice(extra);
        Harness::try_parse_from(args)
    }

    #[test]
    fn add_accepts_in_range_values() {
        assert!(parse_with(&[]).is_ok());
        assert!(parse_with(&["--focus", "1", "--fog", "10", "--hours", "24"]).is_ok());
    }

    #[test]
    fn add_rejects_out_of_range_scores() {
        assert!(parse_with(&["--focus", "11"]).is_err());
        assert!(parse_with(&["--focus", "0"]).is_err());
        assert!(parse_with(&["--fog", "11"]).is_err());
        assert!(parse_with(&["--fog", "0"]).is_err());
    }

    #[test]
    fn add_rejects_impossible_hours_and_negative_intakes() {
        assert!(parse_with(&["--hours", "24.5"]).is_err());
        assert!(parse_with(&["--hours=-1"]).is_err());

        let negative_weight = [
            "harness", "add", "--weight=-3", "--workout", "push", "--protein", "120",
        ];
        assert!(Harness::try_parse_from(negative_weight).is_err());

        let negative_protein = [
            "harness", "add", "--weight", "30", "--workout", "push", "--protein=-5",
        ];
        assert!(Harness::try_parse_from(negative_protein).is_err());
    }
}
