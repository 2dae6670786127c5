//! Data model for the daily log.
//!
//! One [`Entry`] combines the gym and productivity metrics for a single
//! calendar day. Entries are persisted as one CSV row each; rows read
//! back from disk are [`LogRecord`]s, whose numeric fields are optional
//! because historical files may have empty cells (the analyzer imputes
//! those with the column median).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exact header line of the persisted log table. Column order is fixed
/// for the lifetime of a table.
pub const CSV_HEADER: &str = "date,weight_lifted_kg,workout_type,protein_intake_g,rest_day,leetcode_solved,coding_hours,github_commits,focus_score,brain_fog_level";

/// Number of CSV columns per row.
pub(crate) const COLUMN_COUNT: usize = 10;

/// Workout category with a fixed integer code table.
///
/// Codes follow the lexical order of the canonical labels, which agrees
/// with a dynamic categorical encoding whenever all five categories are
/// present in a dataset, and stays stable when they are not:
/// Cardio=0, Legs=1, Pull=2, Push=3, Rest Day=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    Cardio,
    Legs,
    Pull,
    Push,
    #[serde(rename = "Rest Day")]
    RestDay,
}

impl WorkoutType {
    /// All categories in code order.
    pub const ALL: [WorkoutType; 5] = [
        WorkoutType::Cardio,
        WorkoutType::Legs,
        WorkoutType::Pull,
        WorkoutType::Push,
        WorkoutType::RestDay,
    ];

    /// Fixed numeric code used in correlation views.
    pub fn code(self) -> u8 {
        match self {
            WorkoutType::Cardio => 0,
            WorkoutType::Legs => 1,
            WorkoutType::Pull => 2,
            WorkoutType::Push => 3,
            WorkoutType::RestDay => 4,
        }
    }

    /// Canonical label, used for persistence and display.
    pub fn label(self) -> &'static str {
        match self {
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Legs => "Legs",
            WorkoutType::Pull => "Pull",
            WorkoutType::Push => "Push",
            WorkoutType::RestDay => "Rest Day",
        }
    }

    pub fn is_rest_day(self) -> bool {
        matches!(self, WorkoutType::RestDay)
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    /// Accepts the canonical labels (case-insensitive) plus the long
    /// muscle-group labels found in older log files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "Push (Chest, Triceps)" => return Ok(WorkoutType::Push),
            "Pull (Back, Biceps)" => return Ok(WorkoutType::Pull),
            _ => {}
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "cardio" => Ok(WorkoutType::Cardio),
            "legs" => Ok(WorkoutType::Legs),
            "pull" => Ok(WorkoutType::Pull),
            "push" => Ok(WorkoutType::Push),
            "rest" | "rest day" | "restday" | "rest-day" => Ok(WorkoutType::RestDay),
            _ => Err(format!("unknown workout type: {trimmed}")),
        }
    }
}

/// Gym-side fields of a new entry. `rest_day` is derived from the
/// workout type, not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GymFields {
    pub weight_lifted_kg: f64,
    pub workout_type: WorkoutType,
    pub protein_intake_g: f64,
}

/// Productivity-side fields of a new entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductivityFields {
    pub leetcode_solved: u32,
    pub coding_hours: f64,
    pub github_commits: u32,
    pub focus_score: u8,
    pub brain_fog_level: u8,
}

/// One day's combined gym and productivity record, fully populated.
/// This is what the log store writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub weight_lifted_kg: f64,
    pub workout_type: WorkoutType,
    pub protein_intake_g: f64,
    pub rest_day: bool,
    pub leetcode_solved: u32,
    pub coding_hours: f64,
    pub github_commits: u32,
    pub focus_score: u8,
    pub brain_fog_level: u8,
}

impl Entry {
    /// Build an entry for `date` from the two field groups the
    /// presentation layer collects.
    pub fn new(date: NaiveDate, gym: GymFields, productivity: ProductivityFields) -> Self {
        Self {
            date,
            weight_lifted_kg: gym.weight_lifted_kg,
            workout_type: gym.workout_type,
            protein_intake_g: gym.protein_intake_g,
            rest_day: gym.workout_type.is_rest_day(),
            leetcode_solved: productivity.leetcode_solved,
            coding_hours: productivity.coding_hours,
            github_commits: productivity.github_commits,
            focus_score: productivity.focus_score,
            brain_fog_level: productivity.brain_fog_level,
        }
    }

    /// Encode as one CSV row (no trailing newline).
    pub(crate) fn encode_row(&self) -> String {
        let fields = [
            self.date.format("%Y-%m-%d").to_string(),
            fmt_number(self.weight_lifted_kg),
            quote_if_needed(self.workout_type.label()),
            fmt_number(self.protein_intake_g),
            if self.rest_day { "1".into() } else { "0".into() },
            self.leetcode_solved.to_string(),
            fmt_number(self.coding_hours),
            self.github_commits.to_string(),
            self.focus_score.to_string(),
            self.brain_fog_level.to_string(),
        ];
        fields.join(",")
    }
}

/// One parsed log row. Numeric cells may be empty in historical files,
/// so every numeric field is optional; date and workout type are
/// required.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub date: NaiveDate,
    pub weight_lifted_kg: Option<f64>,
    pub workout_type: WorkoutType,
    pub protein_intake_g: Option<f64>,
    pub rest_day: bool,
    pub leetcode_solved: Option<f64>,
    pub coding_hours: Option<f64>,
    pub github_commits: Option<f64>,
    pub focus_score: Option<f64>,
    pub brain_fog_level: Option<f64>,
}

impl LogRecord {
    /// Decode one CSV row. Returns a description of the first problem
    /// found; the caller attaches path and line number.
    pub(crate) fn decode_row(line: &str) -> Result<Self, String> {
        let fields = split_fields(line);
        if fields.len() != COLUMN_COUNT {
            return Err(format!(
                "expected {COLUMN_COUNT} columns, found {}",
                fields.len()
            ));
        }

        let date = NaiveDate::parse_from_str(fields[0].trim(), "%Y-%m-%d")
            .map_err(|e| format!("bad date '{}': {e}", fields[0]))?;
        let workout_type: WorkoutType = fields[2].parse()?;
        let rest_day = match fields[4].trim() {
            "" => workout_type.is_rest_day(),
            "1" | "true" | "True" => true,
            "0" | "false" | "False" => false,
            other => return Err(format!("bad rest_day '{other}'")),
        };

        Ok(Self {
            date,
            weight_lifted_kg: parse_number(&fields[1], "weight_lifted_kg")?,
            workout_type,
            protein_intake_g: parse_number(&fields[3], "protein_intake_g")?,
            rest_day,
            leetcode_solved: parse_number(&fields[5], "leetcode_solved")?,
            coding_hours: parse_number(&fields[6], "coding_hours")?,
            github_commits: parse_number(&fields[7], "github_commits")?,
            focus_score: parse_number(&fields[8], "focus_score")?,
            brain_fog_level: parse_number(&fields[9], "brain_fog_level")?,
        })
    }
}

impl From<Entry> for LogRecord {
    fn from(e: Entry) -> Self {
        Self {
            date: e.date,
            weight_lifted_kg: Some(e.weight_lifted_kg),
            workout_type: e.workout_type,
            protein_intake_g: Some(e.protein_intake_g),
            rest_day: e.rest_day,
            leetcode_solved: Some(f64::from(e.leetcode_solved)),
            coding_hours: Some(e.coding_hours),
            github_commits: Some(f64::from(e.github_commits)),
            focus_score: Some(f64::from(e.focus_score)),
            brain_fog_level: Some(f64::from(e.brain_fog_level)),
        }
    }
}

/// Minimal float formatting: whole values print without a decimal point
/// (`120`, not `120.0`), fractional values keep their shortest form.
fn fmt_number(value: f64) -> String {
    value.to_string()
}

fn parse_number(cell: &str, column: &str) -> Result<Option<f64>, String> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("bad {column} '{trimmed}'"))
}

fn quote_if_needed(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split a CSV line into fields, honoring double-quoted fields with
/// quote doubling.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> Entry {
        Entry::new(
            NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
            GymFields {
                weight_lifted_kg: 32.5,
                workout_type: WorkoutType::Push,
                protein_intake_g: 120.0,
            },
            ProductivityFields {
                leetcode_solved: 3,
                coding_hours: 5.5,
                github_commits: 4,
                focus_score: 8,
                brain_fog_level: 2,
            },
        )
    }

    #[test]
    fn workout_codes_are_fixed() {
        assert_eq!(WorkoutType::Cardio.code(), 0);
        assert_eq!(WorkoutType::Legs.code(), 1);
        assert_eq!(WorkoutType::Pull.code(), 2);
        assert_eq!(WorkoutType::Push.code(), 3);
        assert_eq!(WorkoutType::RestDay.code(), 4);
    }

    #[test]
    fn workout_parse_accepts_canonical_and_long_labels() {
        assert_eq!("Push".parse::<WorkoutType>().unwrap(), WorkoutType::Push);
        assert_eq!("push".parse::<WorkoutType>().unwrap(), WorkoutType::Push);
        assert_eq!(
            "Push (Chest, Triceps)".parse::<WorkoutType>().unwrap(),
            WorkoutType::Push
        );
        assert_eq!(
            "Pull (Back, Biceps)".parse::<WorkoutType>().unwrap(),
            WorkoutType::Pull
        );
        assert_eq!(
            "Rest Day".parse::<WorkoutType>().unwrap(),
            WorkoutType::RestDay
        );
        assert!("Yoga".parse::<WorkoutType>().is_err());
    }

    #[test]
    fn rest_day_is_derived_from_workout_type() {
        let mut entry = sample_entry();
        assert!(!entry.rest_day);

        entry = Entry::new(
            entry.date,
            GymFields {
                weight_lifted_kg: 0.0,
                workout_type: WorkoutType::RestDay,
                protein_intake_g: 100.0,
            },
            ProductivityFields {
                leetcode_solved: 0,
                coding_hours: 0.0,
                github_commits: 0,
                focus_score: 5,
                brain_fog_level: 5,
            },
        );
        assert!(entry.rest_day);
    }

    #[test]
    fn encode_decode_round_trip() {
        let entry = sample_entry();
        let row = entry.encode_row();
        assert_eq!(row, "2026-08-28,32.5,Push,120,0,3,5.5,4,8,2");

        let record = LogRecord::decode_row(&row).unwrap();
        assert_eq!(record, LogRecord::from(entry));
    }

    #[test]
    fn decode_handles_quoted_labels_with_commas() {
        let row = "2026-08-28,30,\"Push (Chest, Triceps)\",110,0,2,4,1,7,3";
        let record = LogRecord::decode_row(row).unwrap();
        assert_eq!(record.workout_type, WorkoutType::Push);
        assert_eq!(record.protein_intake_g, Some(110.0));
    }

    #[test]
    fn decode_treats_empty_numeric_cells_as_missing() {
        let row = "2026-08-28,,Legs,120,0,,3.5,2,,4";
        let record = LogRecord::decode_row(row).unwrap();
        assert_eq!(record.weight_lifted_kg, None);
        assert_eq!(record.leetcode_solved, None);
        assert_eq!(record.focus_score, None);
        assert_eq!(record.coding_hours, Some(3.5));
    }

    #[test]
    fn decode_rejects_short_rows() {
        let err = LogRecord::decode_row("2026-08-28,30,Legs").unwrap_err();
        assert!(err.contains("expected 10 columns"));
    }

    #[test]
    fn decode_accepts_boolean_rest_day_spellings() {
        let row = "2026-08-28,30,Legs,120,true,1,2,3,5,5";
        assert!(LogRecord::decode_row(row).unwrap().rest_day);
        let row = "2026-08-28,30,Legs,120,false,1,2,3,5,5";
        assert!(!LogRecord::decode_row(row).unwrap().rest_day);
    }
}
