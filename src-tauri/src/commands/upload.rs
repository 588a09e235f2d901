use crate::error::AppError;
use crate::models::upload_types::{FileSelection, TrackedFile};
use crate::services::analysis::AnalysisClient;
use crate::services::events::{AppEvent, EventBus};
use crate::services::pipeline::{self, STEP_DELAY};
use crate::services::queue::UploadQueue;
use crate::services::validator;
use std::path::Path;
use tauri::State;

/// Validates the selection and enqueues what passes. Rejections only raise a
/// toast; they never reach the queue. Each accepted file gets its own driver
/// task and the command returns immediately with the accepted entries.
#[tauri::command]
pub async fn enqueue_files(
    queue: State<'_, UploadQueue>,
    analysis: State<'_, AnalysisClient>,
    events: State<'_, EventBus>,
    files: Vec<FileSelection>,
) -> Result<Vec<TrackedFile>, AppError> {
    let mut accepted = Vec::new();

    for selection in files {
        let name = Path::new(&selection.path)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| selection.path.clone());
        let size = tokio::fs::metadata(&selection.path).await?.len();

        if let Err(rejection) = validator::validate(&name, size, selection.content_type.as_deref())
        {
            tracing::info!("rejected {}: {:?}", name, rejection);
            events.publish(AppEvent::Toast(rejection.toast()));
            continue;
        }

        let entry = queue.enqueue(&name, &selection.path, size).await;

        let task_queue = queue.inner().clone();
        let task_analysis = analysis.inner().clone();
        let task_events = events.inner().clone();
        let id = entry.id.clone();
        tauri::async_runtime::spawn(async move {
            pipeline::drive_file(&task_queue, &task_analysis, &task_events, &id, STEP_DELAY).await;
        });

        accepted.push(entry);
    }

    Ok(accepted)
}

#[tauri::command]
pub async fn get_queue(queue: State<'_, UploadQueue>) -> Result<Vec<TrackedFile>, AppError> {
    Ok(queue.snapshot().await)
}

/// Removes the display entry only. An in-flight driver is not aborted; its
/// late updates fall on the absent id and are dropped.
#[tauri::command]
pub async fn remove_file(queue: State<'_, UploadQueue>, id: String) -> Result<(), AppError> {
    queue.remove_by_id(&id).await;
    Ok(())
}

#[tauri::command]
pub async fn set_api_endpoint(
    analysis: State<'_, AnalysisClient>,
    endpoint: Option<String>,
) -> Result<(), AppError> {
    analysis.set_endpoint(endpoint).await;
    Ok(())
}
