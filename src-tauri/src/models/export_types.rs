use crate::models::upload_types::RiskLevel;
use serde::Serialize;

/// Flattened, serializable view of a completed entry, built only at export
/// time and never persisted.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ExportRecord {
    pub filename: String,
    pub filesize: String,
    pub prediction: String,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub processing_time: f64,
    pub timestamp: String,
}
