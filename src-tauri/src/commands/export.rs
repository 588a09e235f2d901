use crate::error::AppError;
use crate::models::upload_types::Toast;
use crate::services::events::{AppEvent, EventBus};
use crate::services::exporter;
use crate::services::queue::UploadQueue;
use std::path::Path;
use tauri::State;

/// Writes the completed results into `dest_dir` (picked by the user through
/// the dialog plugin). Returns the written path, or `None` when nothing was
/// completed yet.
#[tauri::command]
pub async fn export_results(
    queue: State<'_, UploadQueue>,
    events: State<'_, EventBus>,
    dest_dir: String,
) -> Result<Option<String>, AppError> {
    let entries = queue.snapshot().await;

    match exporter::write_export(Path::new(&dest_dir), &entries).await? {
        Some((path, count)) => {
            tracing::info!("exported {} results to {}", count, path.display());
            events.publish(AppEvent::Toast(Toast::info(
                "Results Downloaded",
                format!("Downloaded analysis results for {} files.", count),
            )));
            Ok(Some(path.to_string_lossy().to_string()))
        }
        None => {
            events.publish(AppEvent::Toast(Toast::destructive(
                "No Results",
                "No completed analyses to download.".to_string(),
            )));
            Ok(None)
        }
    }
}
