//! Transient user-facing notifications
//!
//! One-shot, non-persistent messages (toast-equivalent). Fire-and-forget
//! with most-recent-wins semantics: a new notice replaces any unread one.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Kind of transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// A single transient notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Sender side of the notification channel
#[derive(Clone)]
pub struct Notifier {
    tx: watch::Sender<Option<Notice>>,
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx }
    }

    /// Show a notice, replacing any unread one.
    pub fn show(&self, kind: NoticeKind, message: impl Into<String>) {
        let notice = Notice {
            kind,
            message: message.into(),
        };
        tracing::debug!(kind = kind.as_str(), message = %notice.message, "notice");
        // No receiver connected is fine; the notice is fire-and-forget
        self.tx.send_replace(Some(notice));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NoticeKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NoticeKind::Error, message);
    }

    /// Subscribe to notices; the receiver only ever sees the latest one.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notice>> {
        self.tx.subscribe()
    }

    /// The most recently shown notice, if any.
    pub fn latest(&self) -> Option<Notice> {
        self.tx.borrow().clone()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
