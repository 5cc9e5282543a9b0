//! Typed lookup for shared values handed to dependents.
//!
//! A [`Key<T>`] carries the value type, so `registry.get(&REVIEWS_KEY)` can
//! only ever yield a [`Reviews`](super::Reviews).

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;

/// Named handle whose type parameter fixes the stored value type.
pub struct Key<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Key<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Values stored by key name and type.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<(&'static str, TypeId), Box<dyn Any + Send + Sync>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, returning whatever was there before.
    pub fn provide<T: Any + Send + Sync>(&mut self, key: &Key<T>, value: T) -> Option<T> {
        self.entries
            .insert((key.name, TypeId::of::<T>()), Box::new(value))
            .and_then(|previous| previous.downcast::<T>().ok())
            .map(|previous| *previous)
    }

    /// Returns the value stored under `key`, if any.
    pub fn get<T: Any + Send + Sync>(&self, key: &Key<T>) -> Option<&T> {
        self.entries
            .get(&(key.name, TypeId::of::<T>()))
            .and_then(|value| value.downcast_ref::<T>())
    }

    pub fn contains<T: Any + Send + Sync>(&self, key: &Key<T>) -> bool {
        self.get(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PORT: Key<u16> = Key::new("port");
    const PORT_LABEL: Key<String> = Key::new("port");

    #[test]
    fn test_same_name_different_type_do_not_collide() {
        let mut registry = Registry::new();
        registry.provide(&PORT, 8080);
        registry.provide(&PORT_LABEL, "http-alt".to_string());

        assert_eq!(registry.get(&PORT), Some(&8080));
        assert_eq!(registry.get(&PORT_LABEL).map(String::as_str), Some("http-alt"));
    }

    #[test]
    fn test_provide_replaces_and_returns_previous() {
        let mut registry = Registry::new();
        assert_eq!(registry.provide(&PORT, 1), None);
        assert_eq!(registry.provide(&PORT, 2), Some(1));
        assert_eq!(registry.get(&PORT), Some(&2));
    }

    #[test]
    fn test_missing_key() {
        let registry = Registry::new();
        assert!(!registry.contains(&PORT));
    }
}
