//! Toast notifications raised by auth operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store reports outcomes through the `Notifier` trait. In the
//! app that trait is backed by `ToastNotifier`, which queues toasts in a
//! signal the `Toaster` component renders.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

use crate::session::Notifier;

/// How long a toast stays up before it dismisses itself.
pub const TOAST_TTL_MS: u32 = 4_000;

/// Visual tone of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Success,
    Error,
}

impl Tone {
    /// Accent color name, as rendered in the toast border.
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "green",
            Self::Error => "red",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

/// A single user-visible message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: Option<String>,
    pub message: String,
    pub tone: Tone,
}

impl Notification {
    /// Green toast titled "Success".
    pub fn success(message: impl Into<String>) -> Self {
        Self { title: Some("Success".to_owned()), message: message.into(), tone: Tone::Success }
    }

    /// Red toast titled "Error".
    pub fn error(message: impl Into<String>) -> Self {
        Self { title: Some("Error".to_owned()), message: message.into(), tone: Tone::Error }
    }

    pub fn untitled(tone: Tone, message: impl Into<String>) -> Self {
        Self { title: None, message: message.into(), tone }
    }
}

/// A queued notification with its dismissal id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl NotificationsState {
    /// Queue a notification and return its id.
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notification });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// `Notifier` backed by the toast signal.
#[derive(Clone, Copy, Debug)]
pub struct ToastNotifier {
    toasts: RwSignal<NotificationsState>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<NotificationsState>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn show(&self, notification: Notification) {
        let mut id = 0;
        self.toasts.update(|t| id = t.push(notification));

        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                let _ = toasts.try_update(|t| t.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
