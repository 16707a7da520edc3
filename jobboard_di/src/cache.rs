use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

/// Values a provider has already built, keyed by their type.
#[derive(Debug, Default)]
pub struct BuildCache {
    built: HashMap<TypeId, Box<dyn Any>>,
}

impl BuildCache {
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.built
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref())
    }

    /// Stores `value`, replacing an earlier value of the same type.
    /// Returns `true` if one was replaced.
    pub fn insert<T: 'static>(&mut self, value: T) -> bool {
        self.built
            .insert(TypeId::of::<T>(), Box::new(value))
            .is_some()
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.built.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.built.len()
    }

    pub fn is_empty(&self) -> bool {
        self.built.is_empty()
    }
}
