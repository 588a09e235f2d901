use crate::models::dashboard_types::{MetricCard, ModelPerformance, RecentResult};
use crate::services::dashboard;

#[tauri::command]
pub fn get_dashboard_metrics() -> Vec<MetricCard> {
    dashboard::metrics()
}

#[tauri::command]
pub fn get_recent_results() -> Vec<RecentResult> {
    dashboard::recent_results()
}

#[tauri::command]
pub fn get_model_performance() -> ModelPerformance {
    dashboard::model_performance()
}
