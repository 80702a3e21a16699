use gloo_timers::callback::Timeout;
use leptos::*;
use shared::{AlertMessage, AlertSeverity};

/// Fire-and-forget destination for user notifications.
pub trait AlertSink {
    fn post(&self, alert: AlertMessage);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedAlert {
    pub id: u64,
    pub alert: AlertMessage,
}

/// Alerts waiting to be shown, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertQueue {
    next_id: u64,
    alerts: Vec<QueuedAlert>,
}

impl AlertQueue {
    pub fn push(&mut self, alert: AlertMessage) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.alerts.push(QueuedAlert { id, alert });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.alerts.retain(|queued| queued.id != id);
    }

    pub fn alerts(&self) -> &[QueuedAlert] {
        &self.alerts
    }
}

/// Global notification sink backed by a signal, rendered by `AlertDisplay`.
#[derive(Clone, Copy)]
pub struct AlertApi {
    queue: RwSignal<AlertQueue>,
    timeout_ms: u32,
}

impl AlertApi {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: create_rw_signal(AlertQueue::default()),
            timeout_ms,
        }
    }

    pub fn alerts(&self) -> Vec<QueuedAlert> {
        self.queue.with(|q| q.alerts().to_vec())
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl AlertSink for AlertApi {
    fn post(&self, alert: AlertMessage) {
        let transient = alert.severity == AlertSeverity::Success;
        let Some(id) = self.queue.try_update(|q| q.push(alert)) else {
            return;
        };

        if transient && self.timeout_ms > 0 {
            let queue = self.queue;
            Timeout::new(self.timeout_ms, move || {
                queue.try_update(|q| q.dismiss(id));
            })
            .forget();
        }
    }
}

pub fn provide_alerts(timeout_ms: u32) {
    provide_context(AlertApi::new(timeout_ms));
}

pub fn use_alerts() -> AlertApi {
    expect_context::<AlertApi>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_post_order() {
        let mut queue = AlertQueue::default();
        queue.push(AlertMessage::success("first"));
        queue.push(AlertMessage::error("second"));

        let messages: Vec<&str> = queue
            .alerts()
            .iter()
            .map(|q| q.alert.message.as_str())
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_dismiss_removes_only_matching_alert() {
        let mut queue = AlertQueue::default();
        let first = queue.push(AlertMessage::success("first"));
        let second = queue.push(AlertMessage::success("second"));
        assert_ne!(first, second);

        queue.dismiss(first);
        assert_eq!(queue.alerts().len(), 1);
        assert_eq!(queue.alerts()[0].id, second);

        // Dismissing twice is harmless
        queue.dismiss(first);
        assert_eq!(queue.alerts().len(), 1);
    }
}
