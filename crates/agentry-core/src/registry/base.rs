//! Generic registry storage.

use dashmap::DashMap;
use std::sync::Arc;

use agentry_protocols::error::ExtensionError;

/// Trait for items that can be stored in a registry.
pub trait Registerable: Send + Sync {
    /// Returns the unique identifier for this item.
    fn registry_id(&self) -> &str;
}

/// Generic registry for managing items by ID.
///
/// Thread-safe storage with duplicate-checked registration. Concrete
/// registries (e.g. [`super::ToolRegistry`]) wrap this with a typed API.
pub struct BaseRegistry<T: ?Sized + Registerable> {
    items: DashMap<String, Arc<T>>,
}

impl<T: ?Sized + Registerable> BaseRegistry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// Register an item.
    ///
    /// Returns an error if an item with the same ID is already registered.
    pub fn register(&self, item: Arc<T>) -> Result<(), ExtensionError> {
        let id = item.registry_id().to_string();

        if self.items.contains_key(&id) {
            return Err(ExtensionError::AlreadyRegistered(id));
        }

        self.items.insert(id, item);
        Ok(())
    }

    /// Unregister an item by ID.
    ///
    /// Returns an error if no item with the given ID exists.
    pub fn unregister(&self, id: &str) -> Result<(), ExtensionError> {
        self.items
            .remove(id)
            .ok_or_else(|| ExtensionError::NotFound(id.to_string()))?;
        Ok(())
    }

    /// Get an item by ID.
    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.items.get(id).map(|item| item.clone())
    }

    /// Check if an item with the given ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Get the number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all items.
    pub fn iter(&self) -> impl Iterator<Item = Arc<T>> + '_ {
        self.items.iter().map(|entry| entry.value().clone())
    }
}

impl<T: ?Sized + Registerable> Default for BaseRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestItem {
        id: String,
    }

    impl TestItem {
        fn new(id: &str) -> Self {
            Self { id: id.to_string() }
        }
    }

    impl Registerable for TestItem {
        fn registry_id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn test_new_is_empty() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register_and_get() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        registry.register(Arc::new(TestItem::new("item"))).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("item"));
        assert_eq!(registry.get("item").unwrap().registry_id(), "item");
    }

    #[test]
    fn test_register_duplicate() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        registry.register(Arc::new(TestItem::new("item"))).unwrap();

        let result = registry.register(Arc::new(TestItem::new("item")));
        assert!(matches!(result, Err(ExtensionError::AlreadyRegistered(_))));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        registry.register(Arc::new(TestItem::new("item"))).unwrap();

        registry.unregister("item").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_nonexistent() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        let result = registry.unregister("nonexistent");
        assert!(matches!(result, Err(ExtensionError::NotFound(_))));
    }

    #[test]
    fn test_get_nonexistent() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_iter() {
        let registry: BaseRegistry<TestItem> = BaseRegistry::new();
        registry.register(Arc::new(TestItem::new("a"))).unwrap();
        registry.register(Arc::new(TestItem::new("b"))).unwrap();

        let items: Vec<_> = registry.iter().collect();
        assert_eq!(items.len(), 2);
    }
}
