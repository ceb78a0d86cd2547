//! Notification center: transient, non-blocking toasts.
//!
//! No queue, no deduplication. The UI drives the lifecycle with timers:
//! `push` → (visible time) → `begin_dismiss` → (exit animation) → `remove`.

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// CSS modifier class
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Info => "toast--info",
            Severity::Success => "toast--success",
            Severity::Error => "toast--error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Success => "✓",
            Severity::Error => "⚠",
        }
    }
}

/// A single toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// Set once the exit animation has started
    pub leaving: bool,
}

/// Live notifications, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    next_id: u64,
    items: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification and return its id
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let message = message.into();
        match severity {
            Severity::Error => tracing::error!("{}", message),
            _ => tracing::info!("{}", message),
        }
        self.items.push(Notification {
            id: self.next_id,
            message,
            severity,
            leaving: false,
        });
        self.next_id
    }

    /// Mark a notification as animating out
    pub fn begin_dismiss(&mut self, id: u64) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
            n.leaving = true;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.items.last()
    }
}
