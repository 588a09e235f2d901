mod commands;
mod error;
mod models;
mod services;

use services::analysis::AnalysisClient;
use services::events::{AppEvent, EventBus};
use services::queue::UploadQueue;
use tauri::{Emitter, Manager};
use tokio::sync::broadcast::error::RecvError;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            app.manage(UploadQueue::new());
            // No endpoint by default: every analysis falls back to the demo
            // mock until the frontend configures one
            app.manage(AnalysisClient::new(None));

            let events = EventBus::new(256);
            app.manage(events.clone());

            // Forward pipeline events to the webview
            let app_handle = app.handle().clone();
            let mut receiver = events.subscribe();
            tauri::async_runtime::spawn(async move {
                loop {
                    let event = match receiver.recv().await {
                        Ok(event) => event,
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!("event forwarder lagged, skipped {} events", skipped);
                            continue;
                        }
                        Err(RecvError::Closed) => break,
                    };

                    let emitted = match event {
                        AppEvent::UploadProgress { id, progress } => app_handle.emit(
                            "upload-progress",
                            serde_json::json!({ "id": id, "progress": progress }),
                        ),
                        AppEvent::UploadCompleted { id } => {
                            app_handle.emit("upload-completed", serde_json::json!({ "id": id }))
                        }
                        AppEvent::UploadFailed { id } => {
                            app_handle.emit("upload-failed", serde_json::json!({ "id": id }))
                        }
                        AppEvent::Toast(toast) => app_handle.emit("toast", toast),
                    };
                    if let Err(e) = emitted {
                        tracing::warn!("failed to emit event to webview: {}", e);
                    }
                }
            });

            tracing::info!("lungcan started");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::upload::enqueue_files,
            commands::upload::get_queue,
            commands::upload::remove_file,
            commands::upload::set_api_endpoint,
            commands::export::export_results,
            commands::dashboard::get_dashboard_metrics,
            commands::dashboard::get_recent_results,
            commands::dashboard::get_model_performance,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
