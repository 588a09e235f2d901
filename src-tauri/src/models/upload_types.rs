use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Uploading,
    Processing,
    Completed,
    Error,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Prediction payload attached to a completed entry. The field names are the
/// wire shape the analysis backend returns; the mock fallback produces the
/// same shape.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalysisResult {
    pub prediction: String,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub processing_time: f64,
}

/// One queued file and its analysis lifecycle.
#[derive(Debug, Serialize, Clone)]
pub struct TrackedFile {
    pub id: String,
    pub name: String,
    pub path: String,
    pub size: u64,
    pub status: FileStatus,
    pub progress: u8,
    pub result: Option<AnalysisResult>,
}

/// Partial update applied to a single queue entry by id. Fields left as
/// `None` are untouched.
#[derive(Debug, Default, Clone)]
pub struct QueuePatch {
    pub status: Option<FileStatus>,
    pub progress: Option<u8>,
    pub result: Option<AnalysisResult>,
}

/// A file the user picked or dropped. The webview supplies the declared media
/// type for dropped `File` objects; picker selections only carry a path.
#[derive(Debug, Deserialize, Clone)]
pub struct FileSelection {
    pub path: String,
    pub content_type: Option<String>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            variant: ToastVariant::Destructive,
        }
    }
}
