use crate::models::upload_types::Toast;
use tokio::sync::broadcast;

/// Events published by the upload pipeline. The Tauri layer forwards them to
/// the webview; tests subscribe to them directly.
#[derive(Debug, Clone)]
pub enum AppEvent {
    UploadProgress { id: String, progress: u8 },
    UploadCompleted { id: String },
    UploadFailed { id: String },
    Toast(Toast),
}

/// Broadcast-based publish/subscribe bus decoupling the pipeline from the
/// window. Events published with no subscribers are dropped, which is normal.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, event: AppEvent) {
        match self.sender.send(event) {
            Ok(receiver_count) => {
                tracing::trace!("event published to {} subscribers", receiver_count);
            }
            Err(_) => {
                tracing::trace!("event published with no subscribers");
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_event_to_subscriber() {
        let bus = EventBus::new(100);
        let mut receiver = bus.subscribe();

        bus.publish(AppEvent::UploadCompleted {
            id: "abc".to_string(),
        });

        match receiver.recv().await {
            Ok(AppEvent::UploadCompleted { id }) => assert_eq!(id, "abc"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn delivers_to_multiple_subscribers() {
        let bus = EventBus::new(100);
        let mut receiver1 = bus.subscribe();
        let mut receiver2 = bus.subscribe();

        bus.publish(AppEvent::UploadProgress {
            id: "abc".to_string(),
            progress: 40,
        });

        assert!(receiver1.try_recv().is_ok());
        assert!(receiver2.try_recv().is_ok());
    }

    #[tokio::test]
    async fn publish_without_subscribers_is_harmless() {
        let bus = EventBus::new(100);
        bus.publish(AppEvent::Toast(Toast::info("Analysis Complete", String::new())));
    }
}
