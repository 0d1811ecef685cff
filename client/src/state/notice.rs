//! Transient user-facing notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin controller reports every outcome as a `Notice`; the layout's
//! tray renders the queue and drops each entry after a short delay.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Maximum number of notices shown at once. Older ones are dropped first.
pub const MAX_VISIBLE: usize = 5;

/// How long the tray keeps a notice before dismissing it.
pub const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One message reporting success or validation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// A notice waiting in the tray.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueuedNotice {
    pub id: u64,
    pub notice: Notice,
}

/// Notice tray queue, provided via context.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<QueuedNotice>,
    next_id: u64,
}

impl NoticeState {
    /// Queue `notice` and return the id used to dismiss it.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(QueuedNotice { id, notice });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove the notice with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
