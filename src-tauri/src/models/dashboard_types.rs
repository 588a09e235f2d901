use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Serialize, Clone)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Serialize, Clone)]
pub struct RecentResult {
    pub id: u32,
    pub filename: &'static str,
    pub prediction: &'static str,
    pub confidence: f64,
    pub risk: &'static str,
    pub timestamp: &'static str,
}

#[derive(Debug, Serialize, Clone, Copy)]
pub struct ModelPerformance {
    pub sensitivity: f64,
    pub specificity: f64,
    pub precision: f64,
    pub f1_score: f64,
}
