//! 明暗主题

use leptos::prelude::*;
use nationpost::{Theme, ThemeStore};

use crate::web::WebLocalStorage;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    store: RwSignal<ThemeStore<WebLocalStorage>>,
}

impl ThemeContext {
    pub fn load() -> Self {
        let ctx = Self {
            store: RwSignal::new(ThemeStore::load(WebLocalStorage)),
        };
        ctx.sync_document();
        ctx
    }

    pub fn theme(&self) -> Theme {
        self.store.with(|s| s.theme())
    }

    pub fn toggle(&self) {
        self.store.update(|s| {
            s.toggle();
        });
    }

    /// 主题变化时同步到 `<html data-theme=...>`
    fn sync_document(&self) {
        let store = self.store;
        Effect::new(move |_| {
            let theme = store.with(|s| s.theme());
            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element());
            if let Some(root) = root {
                let _ = root.set_attribute("data-theme", theme.as_str());
            }
        });
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
