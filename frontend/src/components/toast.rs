//! 右上角提示，3 秒后自动消失

use std::time::Duration;

use leptos::prelude::*;

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, title: &str, description: &str) {
        self.show(ToastKind::Success, title, description);
    }

    pub fn error(&self, title: &str, description: &str) {
        self.show(ToastKind::Error, title, description);
    }

    fn show(&self, kind: ToastKind, title: &str, description: &str) {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.current.set(Some(Toast {
            id,
            kind,
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        }));

        // 只清除自己这一条，后来的提示不受影响
        let current = self.current;
        set_timeout(
            move || {
                if current.with_untracked(|t| t.as_ref().is_some_and(|t| t.id == id)) {
                    current.set(None);
                }
            },
            TOAST_DURATION,
        );
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

#[component]
pub fn Toaster(toast: ToastContext) -> impl IntoView {
    view! {
        {move || {
            toast.current.get().map(|t| {
                let class = match t.kind {
                    ToastKind::Success => "alert alert-success shadow-lg",
                    ToastKind::Error => "alert alert-error shadow-lg",
                };
                view! {
                    <div class="toast toast-top toast-end z-50">
                        <div class=class>
                            <div class="flex flex-col">
                                <span class="font-semibold">{t.title}</span>
                                {t.description.map(|d| view! { <span class="text-sm">{d}</span> })}
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
