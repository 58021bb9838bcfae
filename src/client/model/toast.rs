use dioxus::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn alert_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "alert-success",
            ToastKind::Error => "alert-error",
            ToastKind::Info => "alert-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of transient notifications, provided once by the app root.
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.write().retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = *self.next_id.peek();
        self.next_id.set(id.wrapping_add(1));
        self.toasts.write().push(Toast { id, kind, message });

        #[cfg(feature = "web")]
        {
            let mut ctx = *self;
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                ctx.dismiss(id);
            });
        }
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}
