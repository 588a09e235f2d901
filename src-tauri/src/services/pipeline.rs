use crate::error::AppError;
use crate::models::upload_types::{FileStatus, QueuePatch, Toast};
use crate::services::analysis::AnalysisClient;
use crate::services::events::{AppEvent, EventBus};
use crate::services::queue::UploadQueue;
use std::time::Duration;

/// Pause between simulated upload steps.
pub const STEP_DELAY: Duration = Duration::from_millis(200);

/// Drives one queue entry from Uploading to a terminal state. The 20/40/60
/// ramp is a fixed-duration simulation, not real transfer progress. Each
/// driver only ever patches its own id, so drivers for different files can
/// run concurrently without coordination.
pub async fn drive_file(
    queue: &UploadQueue,
    analysis: &AnalysisClient,
    events: &EventBus,
    id: &str,
    step_delay: Duration,
) {
    let (name, path) = match queue.get(id).await {
        Some(entry) => (entry.name, entry.path),
        None => return,
    };

    match run_steps(queue, analysis, events, id, &name, &path, step_delay).await {
        Ok(()) => {
            events.publish(AppEvent::UploadCompleted { id: id.to_string() });
            events.publish(AppEvent::Toast(Toast::info(
                "Analysis Complete",
                format!("Analysis for {} completed successfully.", name),
            )));
        }
        Err(e) => {
            tracing::error!("processing failed for {}: {}", name, e.message);
            queue
                .update_by_id(
                    id,
                    QueuePatch {
                        status: Some(FileStatus::Error),
                        progress: Some(0),
                        result: None,
                    },
                )
                .await;
            events.publish(AppEvent::UploadFailed { id: id.to_string() });
            events.publish(AppEvent::Toast(Toast::destructive(
                "Processing Failed",
                format!("Failed to analyze {}. Please try again.", name),
            )));
        }
    }
}

async fn run_steps(
    queue: &UploadQueue,
    analysis: &AnalysisClient,
    events: &EventBus,
    id: &str,
    name: &str,
    path: &str,
    step_delay: Duration,
) -> Result<(), AppError> {
    queue
        .update_by_id(
            id,
            QueuePatch {
                status: Some(FileStatus::Processing),
                progress: Some(20),
                result: None,
            },
        )
        .await;
    events.publish(AppEvent::UploadProgress {
        id: id.to_string(),
        progress: 20,
    });

    for progress in [20u8, 40, 60] {
        tokio::time::sleep(step_delay).await;
        queue
            .update_by_id(
                id,
                QueuePatch {
                    progress: Some(progress),
                    ..Default::default()
                },
            )
            .await;
        events.publish(AppEvent::UploadProgress {
            id: id.to_string(),
            progress,
        });
    }

    // The analysis call itself never fails; the read can, if the file went
    // away between selection and processing
    let bytes = tokio::fs::read(path).await?;
    let result = analysis.analyze(name, bytes).await;

    queue
        .update_by_id(
            id,
            QueuePatch {
                status: Some(FileStatus::Completed),
                progress: Some(100),
                result: Some(result),
            },
        )
        .await;
    events.publish(AppEvent::UploadProgress {
        id: id.to_string(),
        progress: 100,
    });

    Ok(())
}
