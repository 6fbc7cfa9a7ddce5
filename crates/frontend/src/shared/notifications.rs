//! Transient notifications ("toasts") shown after an operation completes.
//!
//! `NotificationService` is provided once at the app root; `NotificationHost`
//! renders the queue. Each entry removes itself after `AUTO_DISMISS_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

pub const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[derive(Clone, Debug)]
struct NotificationEntry {
    id: u64,
    notification: Notification,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    entries: RwSignal<Vec<NotificationEntry>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Show a notification and schedule its removal.
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        if notification.is_error() {
            log::warn!("notification: {}", notification.message);
        } else {
            log::info!("notification: {}", notification.message);
        }

        self.entries
            .update(|list| list.push(NotificationEntry { id, notification }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        // The host may already be gone when a timer fires.
        let _ = self.entries.try_update(|list| list.retain(|e| e.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders active notifications in the top-right corner.
///
/// Must be mounted exactly once, next to the provider.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    view! {
        <div
            class="notification-host"
            style="position: fixed; top: 16px; right: 16px; z-index: 2000; display: flex; flex-direction: column; gap: 8px; max-width: 360px;"
        >
            <For
                each=move || svc.entries.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let intent = match entry.notification.kind {
                        NotificationKind::Success => MessageBarIntent::Success,
                        NotificationKind::Error => MessageBarIntent::Error,
                    };
                    view! {
                        <div role="status" on:click=move |_| svc.dismiss(id) style="cursor: pointer;">
                            <MessageBar intent=intent>
                                <span>{entry.notification.message}</span>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let ok = Notification::success("Books created successfully");
        assert_eq!(ok.kind, NotificationKind::Success);
        assert!(!ok.is_error());

        let err = Notification::error("Failed to create category");
        assert!(err.is_error());
        assert_eq!(err.message, "Failed to create category");
    }
}
