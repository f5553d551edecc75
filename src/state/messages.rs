//! Message toasts.
//!
//! `MessageQueue` is the plain model; `Messages` wraps it in a signal, is
//! provided through context, and is the `Notifier` the HTTP interceptor
//! reports through. Each toast removes itself after `DISMISS_AFTER_MS`.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;

use crate::net::interceptor::Notifier;

/// How long a toast stays visible.
pub const DISMISS_AFTER_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Info,
    Error,
}

impl MessageKind {
    /// CSS modifier for the toast element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "message message--success",
            Self::Info => "message message--info",
            Self::Error => "message message--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub kind: MessageKind,
    pub text: String,
}

/// Visible toasts in arrival order.
#[derive(Clone, Debug, Default)]
pub struct MessageQueue {
    next_id: u64,
    items: Vec<Message>,
}

impl MessageQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: MessageKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Message { id, kind, text: text.into() });
        id
    }

    /// Remove the toast with `id`. Returns whether it was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|m| m.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Message] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Context handle for showing toasts.
#[derive(Clone, Copy, Debug)]
pub struct Messages(RwSignal<MessageQueue>);

impl Messages {
    pub fn new() -> Self {
        Self(RwSignal::new(MessageQueue::default()))
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(MessageKind::Success, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(MessageKind::Info, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(MessageKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|q| {
            q.dismiss(id);
        });
    }

    /// Current toasts; tracked when read inside a reactive scope.
    pub fn items(&self) -> Vec<Message> {
        self.0.with(|q| q.items().to_vec())
    }

    fn show(&self, kind: MessageKind, text: String) {
        let mut id = 0;
        self.0.update(|q| id = q.push(kind, text));
        self.schedule_dismiss(id);
    }

    fn schedule_dismiss(&self, id: u64) {
        #[cfg(feature = "csr")]
        {
            let this = *self;
            gloo_timers::callback::Timeout::new(DISMISS_AFTER_MS, move || this.dismiss(id)).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Messages {
    fn error(&self, text: &str) {
        Messages::error(self, text);
    }
}

/// The `Messages` handle provided by `App`.
pub fn use_messages() -> Messages {
    expect_context::<Messages>()
}
