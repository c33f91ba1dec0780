//! Toast notifications
//!
//! One provider near the app root; screens call [`use_toast`] and queue
//! messages. Each toast dismisses itself after a fixed delay or on click.

use dioxus::prelude::*;

const TOAST_DISMISS_MS: u32 = 3_500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastVariant {
    fn class_suffix(&self) -> &'static str {
        match self {
            ToastVariant::Info => "info",
            ToastVariant::Success => "success",
            ToastVariant::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub variant: ToastVariant,
}

/// Handle for queueing notifications. Copy, so handlers capture it freely.
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastContext {
    /// Queue a message; it dismisses itself after the fixed delay.
    pub fn show(mut self, message: impl Into<String>, variant: ToastVariant) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast {
            id,
            message: message.into(),
            variant,
        });

        #[cfg(feature = "web")]
        {
            let mut toasts = self.toasts;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
                toasts.write().retain(|toast| toast.id != id);
            });
        }
    }

    pub fn info(self, message: impl Into<String>) {
        self.show(message, ToastVariant::Info);
    }

    pub fn success(self, message: impl Into<String>) {
        self.show(message, ToastVariant::Success);
    }

    pub fn error(self, message: impl Into<String>) {
        self.show(message, ToastVariant::Error);
    }

    pub fn dismiss(mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }
}

/// Provider that renders the notification stack above the app.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    let context = use_context_provider(|| ToastContext { toasts, next_id });

    rsx! {
        {children}
        div { class: "toast-stack",
            for toast in context.toasts.read().iter() {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let context = use_toast();
    let class = format!("toast toast--{}", toast.variant.class_suffix());

    rsx! {
        div {
            class: "{class}",
            role: "status",
            onclick: move |_| context.dismiss(toast.id),
            "{toast.message}"
        }
    }
}

/// Hook to access the toast queue
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
}
