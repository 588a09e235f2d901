use crate::models::upload_types::{FileStatus, QueuePatch, TrackedFile};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory processing queue. Insertion order is the display order. Shared
/// between commands and the per-file drivers; every mutation goes through an
/// id lookup so concurrent drivers never touch each other's entries.
#[derive(Clone)]
pub struct UploadQueue {
    entries: Arc<Mutex<Vec<TrackedFile>>>,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends a new entry in the Uploading state and returns a copy of it.
    pub async fn enqueue(&self, name: &str, path: &str, size: u64) -> TrackedFile {
        let entry = TrackedFile {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            path: path.to_string(),
            size,
            status: FileStatus::Uploading,
            progress: 0,
            result: None,
        };
        self.entries.lock().await.push(entry.clone());
        entry
    }

    /// Applies a patch to the matching entry. A missing id means the user
    /// already removed the entry; the late update is dropped silently.
    pub async fn update_by_id(&self, id: &str, patch: QueuePatch) {
        let mut entries = self.entries.lock().await;
        if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
            if let Some(status) = patch.status {
                entry.status = status;
            }
            if let Some(progress) = patch.progress {
                entry.progress = progress;
            }
            if let Some(result) = patch.result {
                entry.result = Some(result);
            }
        }
    }

    /// Removes the matching entry; no-op if already absent.
    pub async fn remove_by_id(&self, id: &str) {
        self.entries.lock().await.retain(|e| e.id != id);
    }

    pub async fn get(&self, id: &str) -> Option<TrackedFile> {
        self.entries.lock().await.iter().find(|e| e.id == id).cloned()
    }

    pub async fn snapshot(&self) -> Vec<TrackedFile> {
        self.entries.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::upload_types::{AnalysisResult, RiskLevel};

    #[tokio::test]
    async fn enqueue_starts_uploading_at_zero() {
        let queue = UploadQueue::new();
        let entry = queue.enqueue("scan.jpg", "/tmp/scan.jpg", 2048).await;

        assert_eq!(entry.status, FileStatus::Uploading);
        assert_eq!(entry.progress, 0);
        assert!(entry.result.is_none());
        assert_eq!(queue.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn ids_are_unique_and_order_is_preserved() {
        let queue = UploadQueue::new();
        let a = queue.enqueue("a.jpg", "/tmp/a.jpg", 1).await;
        let b = queue.enqueue("b.jpg", "/tmp/b.jpg", 2).await;
        let c = queue.enqueue("c.jpg", "/tmp/c.jpg", 3).await;

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);

        let names: Vec<String> = queue.snapshot().await.into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[tokio::test]
    async fn patch_updates_only_given_fields() {
        let queue = UploadQueue::new();
        let entry = queue.enqueue("scan.jpg", "/tmp/scan.jpg", 2048).await;

        queue
            .update_by_id(
                &entry.id,
                QueuePatch {
                    status: Some(FileStatus::Processing),
                    progress: Some(20),
                    result: None,
                },
            )
            .await;

        let updated = queue.get(&entry.id).await.unwrap();
        assert_eq!(updated.status, FileStatus::Processing);
        assert_eq!(updated.progress, 20);
        assert_eq!(updated.name, "scan.jpg");
        assert!(updated.result.is_none());
    }

    #[tokio::test]
    async fn completion_patch_attaches_result_atomically() {
        let queue = UploadQueue::new();
        let entry = queue.enqueue("scan.jpg", "/tmp/scan.jpg", 2048).await;

        queue
            .update_by_id(
                &entry.id,
                QueuePatch {
                    status: Some(FileStatus::Completed),
                    progress: Some(100),
                    result: Some(AnalysisResult {
                        prediction: "No Cancer Detected".to_string(),
                        confidence: 94.2,
                        risk_level: RiskLevel::Low,
                        processing_time: 1.4,
                    }),
                },
            )
            .await;

        let updated = queue.get(&entry.id).await.unwrap();
        assert_eq!(updated.status, FileStatus::Completed);
        assert_eq!(updated.progress, 100);
        assert!(updated.result.is_some());
    }

    #[tokio::test]
    async fn update_on_absent_id_is_a_noop() {
        let queue = UploadQueue::new();
        queue.enqueue("scan.jpg", "/tmp/scan.jpg", 2048).await;

        // A driver finishing after the user removed its entry lands here
        queue
            .update_by_id(
                "no-such-id",
                QueuePatch {
                    progress: Some(60),
                    ..Default::default()
                },
            )
            .await;

        let entries = queue.snapshot().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].progress, 0);
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let queue = UploadQueue::new();
        let entry = queue.enqueue("scan.jpg", "/tmp/scan.jpg", 2048).await;

        queue.remove_by_id(&entry.id).await;
        queue.remove_by_id(&entry.id).await;

        assert!(queue.snapshot().await.is_empty());
    }
}
