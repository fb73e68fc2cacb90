use std::collections::VecDeque;

/// Visual style of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

/// A user-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Pending notifications, oldest first
#[derive(Debug, Default)]
pub struct Notifications {
    queue: VecDeque<Toast>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        match toast.variant {
            ToastVariant::Success => tracing::info!(title = %toast.title, "{}", toast.description),
            ToastVariant::Destructive => {
                tracing::warn!(title = %toast.title, "{}", toast.description)
            }
        }
        self.queue.push_back(toast);
    }

    pub fn success(&mut self, description: impl Into<String>) {
        self.push(Toast {
            title: "Success".to_string(),
            description: description.into(),
            variant: ToastVariant::Success,
        });
    }

    pub fn error(&mut self, description: impl Into<String>) {
        self.push(Toast {
            title: "Error".to_string(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        });
    }

    /// Most recent notification
    pub fn last(&self) -> Option<&Toast> {
        self.queue.back()
    }

    /// Takes all pending notifications
    pub fn drain(&mut self) -> Vec<Toast> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
