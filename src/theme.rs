use nationpost_shared::{STORAGE_THEME_KEY, Theme};

use crate::storage::KeyValueStore;

/// 明暗主题偏好，持久化
pub struct ThemeStore<S: KeyValueStore> {
    storage: S,
    theme: Theme,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// 读取已保存的偏好，无效值按浅色处理
    pub fn load(storage: S) -> Self {
        let theme = storage
            .get(STORAGE_THEME_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default();
        Self { storage, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.storage.set(STORAGE_THEME_KEY, theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::rc::Rc;

    #[test]
    fn defaults_to_light_for_missing_or_bad_value() {
        let storage = MemoryStorage::new();
        assert_eq!(ThemeStore::load(&storage).theme(), Theme::Light);

        storage.set(STORAGE_THEME_KEY, "sepia");
        assert_eq!(ThemeStore::load(&storage).theme(), Theme::Light);
    }

    #[test]
    fn toggle_persists() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = ThemeStore::load(storage.clone());
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(storage.get(STORAGE_THEME_KEY).as_deref(), Some("dark"));

        let reloaded = ThemeStore::load(storage);
        assert_eq!(reloaded.theme(), Theme::Dark);
    }
}
