// src/pipeline/add.rs

//! Direct addition to the daily ledger.

use chrono::Local;

use crate::config::SitePaths;
use crate::error::{AppError, Result};
use crate::guard;
use crate::models::{DailyLink, RawLink};
use crate::storage::ledger;

/// Validate a candidate and prepend it to the daily ledger.
///
/// An omitted date means today. The date must be free in the daily
/// ledger; a collision aborts before anything is written.
pub fn run_add(paths: &SitePaths, raw: &RawLink) -> Result<DailyLink> {
    let record = raw.validate()?;
    let date = record.date.unwrap_or_else(|| Local::now().date_naive());

    let daily_path = paths.daily_file();
    let mut daily: Vec<DailyLink> = ledger::load(&daily_path)?;
    if guard::daily_date_taken(&daily, date) {
        return Err(AppError::conflict(format!(
            "An entry for {date} already exists in {}.",
            daily_path.display()
        )));
    }

    let published = record.publish(date);
    daily.insert(0, published.clone());
    ledger::save(&daily_path, &daily)?;

    log::info!("Added new link for {date} in {}", daily_path.display());
    Ok(published)
}
