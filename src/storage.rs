//! 本地持久化存储抽象
//!
//! 浏览器的 Web Storage 是同步的字符串键值表，这里保持相同的形状：
//! 前端为 `localStorage` / `sessionStorage` 实现该 trait，原生环境和测试使用 `MemoryStorage`。

use std::cell::RefCell;
use std::collections::HashMap;

/// 键值存储
pub trait KeyValueStore {
    /// 键不存在或读取失败时返回 `None`
    fn get(&self, key: &str) -> Option<String>;
    /// 返回是否写入成功
    fn set(&self, key: &str, value: &str) -> bool;
    /// 返回是否删除成功（键不存在也算成功）
    fn remove(&self, key: &str) -> bool;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> bool {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> bool {
        (**self).remove(key)
    }
}

/// 内存实现
#[derive(Debug, Default)]
pub struct MemoryStorage {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.map.borrow_mut().remove(key);
        true
    }
}

/// 两级存储作用域：持久（localStorage）与会话级（sessionStorage）
///
/// 读取时先查 `primary`，找到即返回。
pub struct StorageScopes<P, S> {
    pub primary: P,
    pub secondary: S,
}

impl<P: KeyValueStore, S: KeyValueStore> StorageScopes<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    pub fn get_first(&self, key: &str) -> Option<String> {
        self.primary
            .get(key)
            .filter(|v| !v.is_empty())
            .or_else(|| self.secondary.get(key).filter(|v| !v.is_empty()))
    }

    pub fn remove_everywhere(&self, key: &str) {
        self.primary.remove(key);
        self.secondary.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.get("k").is_none());
        assert!(storage.set("k", "v"));
        assert_eq!(storage.get("k").as_deref(), Some("v"));
        assert!(storage.remove("k"));
        assert!(storage.is_empty());
    }

    #[test]
    fn scopes_prefer_primary() {
        let scopes = StorageScopes::new(MemoryStorage::new(), MemoryStorage::new());
        scopes.secondary.set("authToken", "session-token");
        assert_eq!(scopes.get_first("authToken").as_deref(), Some("session-token"));

        scopes.primary.set("authToken", "local-token");
        assert_eq!(scopes.get_first("authToken").as_deref(), Some("local-token"));

        scopes.remove_everywhere("authToken");
        assert!(scopes.get_first("authToken").is_none());
    }
}
