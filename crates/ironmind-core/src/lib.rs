//! # Ironmind Core Library
//!
//! This library provides the core logic for Ironmind, a single-user
//! daily habit tracker that correlates gym metrics with coding
//! productivity. It follows a CLI-first philosophy: all operations are
//! available through the standalone `ironmind` binary, which is a thin
//! layer over this library.
//!
//! ## Architecture
//!
//! - **Log Store**: append-only CSV persistence of one [`Entry`] per day
//! - **Analyzer**: an immutable snapshot of the log with derived
//!   statistics (correlations, an OLS focus-score prediction, a
//!   composite best-days ranking)
//! - **Config**: TOML-based preferences under `~/.config/ironmind/`
//!
//! ## Key Components
//!
//! - [`LogStore`]: durable append-only persistence
//! - [`Analyzer`]: per-request analytics over a private snapshot
//! - [`Config`]: application configuration management

pub mod analyzer;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use analyzer::{Analyzer, CorrelationMatrix, DayScore, MetricCorrelation, Summary};
pub use config::Config;
pub use error::{ConfigError, CoreError, Result, StorageError};
pub use model::{Entry, GymFields, LogRecord, ProductivityFields, WorkoutType};
pub use store::LogStore;
