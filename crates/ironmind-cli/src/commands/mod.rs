pub mod best;
pub mod config;
pub mod log;
pub mod predict;
pub mod stats;

use ironmind_core::{Analyzer, LogStore};

/// Open an analyzer after checking the minimum-history gate. Views that
/// derive statistics need some history before they say anything useful,
/// so shortfalls come back as a hint instead of a bare error.
pub(crate) fn open_analyzer(
    store: &LogStore,
    min_days: usize,
) -> Result<Analyzer, Box<dyn std::error::Error>> {
    let days = if store.path().exists() { store.len()? } else { 0 };
    if days < min_days {
        return Err(format!(
            "not enough data yet: {days} day(s) logged. Log at least {min_days} days to unlock this view."
        )
        .into());
    }
    Ok(Analyzer::from_store(store)?)
}
