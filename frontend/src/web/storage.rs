//! Web Storage 封装模块
//!
//! `localStorage` 是持久作用域，`sessionStorage` 是标签页作用域；
//! 两者都实现核心库的 `KeyValueStore`。

use nationpost::storage::KeyValueStore;

fn local() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn session() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

fn get(storage: Option<web_sys::Storage>, key: &str) -> Option<String> {
    storage?.get_item(key).ok()?
}

fn set(storage: Option<web_sys::Storage>, key: &str, value: &str) -> bool {
    storage.and_then(|s| s.set_item(key, value).ok()).is_some()
}

fn remove(storage: Option<web_sys::Storage>, key: &str) -> bool {
    storage.and_then(|s| s.remove_item(key).ok()).is_some()
}

/// 浏览器 LocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct WebLocalStorage;

impl KeyValueStore for WebLocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get(local(), key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        set(local(), key, value)
    }

    fn remove(&self, key: &str) -> bool {
        remove(local(), key)
    }
}

/// 浏览器 SessionStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSessionStorage;

impl KeyValueStore for WebSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        get(session(), key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        set(session(), key, value)
    }

    fn remove(&self, key: &str) -> bool {
        remove(session(), key)
    }
}
