//! Analytics over a snapshot of the log table.
//!
//! An [`Analyzer`] is constructed per analysis request from a snapshot
//! read of the log store -- there is no live instance shared across
//! requests. Construction loads every row once, then preprocesses:
//! the categorical workout type becomes its fixed numeric code, and any
//! missing numeric cell is filled with that column's median over the
//! loaded rows (in memory only, never written back).

mod numeric;

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::model::{LogRecord, WorkoutType};
use crate::store::LogStore;

/// Numeric columns of the derived view, in matrix order.
pub const NUMERIC_COLUMNS: [&str; 9] = [
    "weight_lifted_kg",
    "protein_intake_g",
    "rest_day",
    "leetcode_solved",
    "coding_hours",
    "github_commits",
    "focus_score",
    "brain_fog_level",
    "workout_numeric",
];

const COL_WEIGHT: usize = 0;
const COL_PROTEIN: usize = 1;
const COL_LEETCODE: usize = 3;
const COL_HOURS: usize = 4;
const COL_COMMITS: usize = 5;
const COL_FOCUS: usize = 6;
const COL_FOG: usize = 7;
const COL_WORKOUT: usize = 8;

/// Gym-side columns of the gym-vs-productivity view.
const GYM_METRICS: [usize; 3] = [COL_WEIGHT, COL_PROTEIN, COL_WORKOUT];
/// Productivity-side columns of the gym-vs-productivity view.
const PRODUCTIVITY_METRICS: [usize; 5] =
    [COL_LEETCODE, COL_HOURS, COL_COMMITS, COL_FOCUS, COL_FOG];

/// Minimum observations for the two-predictor OLS fit (two slopes plus
/// an intercept).
const MIN_FIT_ROWS: usize = 3;

/// One preprocessed row: every numeric column dense, in
/// [`NUMERIC_COLUMNS`] order.
#[derive(Debug, Clone)]
struct Row {
    date: NaiveDate,
    workout_type: WorkoutType,
    values: [f64; NUMERIC_COLUMNS.len()],
}

/// Pairwise Pearson correlation over all numeric columns. Symmetric,
/// unit diagonal; NaN where a column has zero variance.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Coefficient for a pair of columns by name.
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        Some(self.values[i][j])
    }
}

/// One labeled gym-vs-productivity correlation.
#[derive(Debug, Clone, Serialize)]
pub struct MetricCorrelation {
    pub pair: String,
    pub coefficient: f64,
}

/// One ranked day of the best-days view.
#[derive(Debug, Clone, Serialize)]
pub struct DayScore {
    pub date: NaiveDate,
    pub workout_type: WorkoutType,
    pub weight_lifted_kg: f64,
    pub composite_score: f64,
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub days_tracked: usize,
    pub avg_coding_hours: f64,
    pub total_leetcode_solved: u64,
    pub avg_focus_score: f64,
}

/// Weighted combination used to rank days: solved problems and focus
/// weigh in, brain fog weighs against.
pub fn composite_score(
    leetcode_solved: f64,
    coding_hours: f64,
    github_commits: f64,
    focus_score: f64,
    brain_fog_level: f64,
) -> f64 {
    3.0 * leetcode_solved + 2.0 * coding_hours + 1.5 * github_commits + 2.0 * focus_score
        - 1.5 * brain_fog_level
}

/// Read-only analytics over one loaded, preprocessed snapshot of the
/// log table.
pub struct Analyzer {
    records: Vec<LogRecord>,
    rows: Vec<Row>,
}

impl Analyzer {
    /// Load a snapshot from the given store. Fails with
    /// [`CoreError::DataUnavailable`] when the table is missing or has
    /// zero rows.
    pub fn from_store(store: &LogStore) -> Result<Self> {
        if !store.path().exists() {
            return Err(CoreError::DataUnavailable {
                path: store.path().to_path_buf(),
            });
        }
        let records = store.load_all()?;
        if records.is_empty() {
            return Err(CoreError::DataUnavailable {
                path: store.path().to_path_buf(),
            });
        }
        Ok(Self::from_records(records))
    }

    /// Load a snapshot from a CSV path.
    pub fn from_path(path: impl Into<std::path::PathBuf>) -> Result<Self> {
        Self::from_store(&LogStore::open(path))
    }

    fn from_records(records: Vec<LogRecord>) -> Self {
        let rows = preprocess(&records);
        Self { records, rows }
    }

    /// Number of loaded rows. Callers gate views that need a minimum
    /// history (7 days for analytics, 10 for prediction) on this.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The raw loaded records, for collaborators that render the table.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Full pairwise Pearson correlation matrix over
    /// [`NUMERIC_COLUMNS`]. Symmetric with a unit diagonal by
    /// construction.
    pub fn correlation_matrix(&self) -> CorrelationMatrix {
        let n = NUMERIC_COLUMNS.len();
        let columns: Vec<Vec<f64>> = (0..n).map(|c| self.column(c)).collect();

        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            values[i][i] = 1.0;
            for j in (i + 1)..n {
                let r = numeric::pearson(&columns[i], &columns[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        CorrelationMatrix {
            columns: NUMERIC_COLUMNS.iter().map(|c| c.to_string()).collect(),
            values,
        }
    }

    /// The 15 gym-vs-productivity correlations, labeled
    /// `"{gym}_vs_{prod}"` and sorted descending by coefficient. NaN
    /// coefficients (zero-variance columns) sort last.
    pub fn gym_productivity_correlation(&self) -> Vec<MetricCorrelation> {
        let mut out = Vec::with_capacity(GYM_METRICS.len() * PRODUCTIVITY_METRICS.len());
        for &g in &GYM_METRICS {
            let gym_col = self.column(g);
            for &p in &PRODUCTIVITY_METRICS {
                let prod_col = self.column(p);
                out.push(MetricCorrelation {
                    pair: format!("{}_vs_{}", NUMERIC_COLUMNS[g], NUMERIC_COLUMNS[p]),
                    coefficient: numeric::pearson(&gym_col, &prod_col),
                });
            }
        }
        out.sort_by(|a, b| descending_nan_last(a.coefficient, b.coefficient));
        out
    }

    /// Predict the focus score for a planned (weight, protein) day by
    /// fitting focus on weight lifted and protein intake over the whole
    /// snapshot. The result is rounded to two decimals and NOT clipped
    /// to the 1-10 score domain.
    pub fn predict_productivity(&self, weight_lifted_kg: f64, protein_intake_g: f64) -> Result<f64> {
        if self.rows.len() < MIN_FIT_ROWS {
            return Err(CoreError::InsufficientData {
                required: MIN_FIT_ROWS,
                actual: self.rows.len(),
            });
        }
        let weight = self.column(COL_WEIGHT);
        let protein = self.column(COL_PROTEIN);
        let focus = self.column(COL_FOCUS);

        // Collinear or constant predictors leave the fit underdetermined.
        let [b0, b1, b2] = numeric::ols2(&weight, &protein, &focus).ok_or(
            CoreError::InsufficientData {
                required: MIN_FIT_ROWS,
                actual: self.rows.len(),
            },
        )?;

        Ok(numeric::round2(
            b0 + b1 * weight_lifted_kg + b2 * protein_intake_g,
        ))
    }

    /// The `top_n` days ranked by composite score, descending. The sort
    /// is stable, so ties keep insertion order.
    pub fn best_performing_days(&self, top_n: usize) -> Vec<DayScore> {
        let mut scored: Vec<DayScore> = self
            .rows
            .iter()
            .map(|row| DayScore {
                date: row.date,
                workout_type: row.workout_type,
                weight_lifted_kg: row.values[COL_WEIGHT],
                composite_score: composite_score(
                    row.values[COL_LEETCODE],
                    row.values[COL_HOURS],
                    row.values[COL_COMMITS],
                    row.values[COL_FOCUS],
                    row.values[COL_FOG],
                ),
            })
            .collect();
        scored.sort_by(|a, b| descending_nan_last(a.composite_score, b.composite_score));
        scored.truncate(top_n);
        scored
    }

    /// Headline numbers for the dashboard.
    pub fn summary(&self) -> Summary {
        let n = self.rows.len() as f64;
        let hours = self.column(COL_HOURS);
        let focus = self.column(COL_FOCUS);
        let leetcode = self.column(COL_LEETCODE);
        Summary {
            days_tracked: self.rows.len(),
            avg_coding_hours: hours.iter().sum::<f64>() / n,
            total_leetcode_solved: leetcode.iter().sum::<f64>() as u64,
            avg_focus_score: focus.iter().sum::<f64>() / n,
        }
    }

    fn column(&self, idx: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row.values[idx]).collect()
    }
}

/// Stable descending order with NaN sorted to the end.
fn descending_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Densify the records: workout codes from the fixed table, missing
/// numeric cells replaced with the column median over this snapshot.
/// Columns with no observed value at all stay NaN.
fn preprocess(records: &[LogRecord]) -> Vec<Row> {
    let optional_columns: [fn(&LogRecord) -> Option<f64>; 7] = [
        |r| r.weight_lifted_kg,
        |r| r.protein_intake_g,
        |r| r.leetcode_solved,
        |r| r.coding_hours,
        |r| r.github_commits,
        |r| r.focus_score,
        |r| r.brain_fog_level,
    ];
    let fills: Vec<f64> = optional_columns
        .iter()
        .map(|get| {
            let present: Vec<f64> = records.iter().filter_map(get).collect();
            numeric::median(&present).unwrap_or(f64::NAN)
        })
        .collect();

    records
        .iter()
        .map(|r| Row {
            date: r.date,
            workout_type: r.workout_type,
            values: [
                r.weight_lifted_kg.unwrap_or(fills[0]),
                r.protein_intake_g.unwrap_or(fills[1]),
                if r.rest_day { 1.0 } else { 0.0 },
                r.leetcode_solved.unwrap_or(fills[2]),
                r.coding_hours.unwrap_or(fills[3]),
                r.github_commits.unwrap_or(fills[4]),
                r.focus_score.unwrap_or(fills[5]),
                r.brain_fog_level.unwrap_or(fills[6]),
                f64::from(r.workout_type.code()),
            ],
        })
        .collect()
}
