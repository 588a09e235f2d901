use crate::error::AppError;
use crate::models::export_types::ExportRecord;
use crate::models::upload_types::{FileStatus, TrackedFile};
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};

const FILENAME_PREFIX: &str = "lungcan_analysis_results";

const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// Formats a byte count the way the queue UI shows it: base 1024, up to two
/// decimals, trailing zeros trimmed.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exponent = exponent.min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[exponent])
}

pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("{}_{}.json", FILENAME_PREFIX, now.format("%Y-%m-%d"))
}

/// Projects the completed entries into export records, in queue order.
/// Entries that are not Completed, or carry no result, are skipped.
pub fn build_export_records(entries: &[TrackedFile], now: DateTime<Utc>) -> Vec<ExportRecord> {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    entries
        .iter()
        .filter(|e| e.status == FileStatus::Completed)
        .filter_map(|e| {
            let result = e.result.as_ref()?;
            Some(ExportRecord {
                filename: e.name.clone(),
                filesize: format_file_size(e.size),
                prediction: result.prediction.clone(),
                confidence: result.confidence,
                risk_level: result.risk_level,
                processing_time: result.processing_time,
                timestamp: timestamp.clone(),
            })
        })
        .collect()
}

pub fn render(records: &[ExportRecord]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes the dated export file into `dir`. Returns the path and record
/// count, or `None` when no entry qualifies (the caller reports that case to
/// the user; it is not an error).
pub async fn write_export(
    dir: &Path,
    entries: &[TrackedFile],
) -> Result<Option<(PathBuf, usize)>, AppError> {
    let now = Utc::now();
    let records = build_export_records(entries, now);
    if records.is_empty() {
        return Ok(None);
    }

    let path = dir.join(export_filename(now));
    tokio::fs::write(&path, render(&records)?).await?;
    Ok(Some((path, records.len())))
}
