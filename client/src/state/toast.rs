//! Transient user-facing notifications.
//!
//! ERROR HANDLING
//! ==============
//! Request failures end here: hooks push an error toast and the page keeps
//! rendering whatever data it already had.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays visible.
pub const TOAST_TTL_MS: i64 = 5_000;

/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub created_at: i64,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a toast. Repeating a visible message restarts its timer instead
    /// of stacking a duplicate.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>, now: i64) -> u64 {
        let message = message.into();
        if let Some(existing) = self
            .toasts
            .iter_mut()
            .find(|t| t.level == level && t.message == message)
        {
            existing.created_at = now;
            return existing.id;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, level, message, created_at: now });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
        id
    }

    pub fn error(&mut self, message: impl Into<String>, now: i64) -> u64 {
        self.push(ToastLevel::Error, message, now)
    }

    pub fn success(&mut self, message: impl Into<String>, now: i64) -> u64 {
        self.push(ToastLevel::Success, message, now)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop toasts older than [`TOAST_TTL_MS`]; returns how many were dropped.
    pub fn expire(&mut self, now: i64) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| now - t.created_at < TOAST_TTL_MS);
        before - self.toasts.len()
    }
}
