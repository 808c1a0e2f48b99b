// Mon Jan 19 2026 - Alex

use crate::config::GraphConfig;
use crate::reflect::Reflect;
use crate::structure::{structural_hash_with, structurally_equal_with, ReflectError};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

/// Equivalence relation over `T` backed by structural equality and the
/// structural hash builder.
pub struct StructuralComparer<T> {
    config: GraphConfig,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Reflect> StructuralComparer<T> {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn equals(&self, x: &T, y: &T) -> Result<bool, ReflectError> {
        structurally_equal_with(&self.config, x, y, Some(T::declared()))
    }

    pub fn hash(&self, obj: &T) -> i32 {
        structural_hash_with(&self.config, obj)
    }
}

impl<T: Reflect> Default for StructuralComparer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Key wrapper giving `T` structural `Eq` and `Hash`, for use in hash maps
/// and sets.
///
/// A value always equals itself. Otherwise a comparison that fails on an
/// unreadable member counts as unequal.
pub struct Structural<T>(pub T);

impl<T: Reflect> Structural<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Reflect> PartialEq for Structural<T> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(&self.0, &other.0) {
            return true;
        }
        StructuralComparer::<T>::new()
            .equals(&self.0, &other.0)
            .unwrap_or_else(|e| {
                log::warn!("Structural comparison failed: {}", e);
                false
            })
    }
}

impl<T: Reflect> Eq for Structural<T> {}

impl<T: Reflect> Hash for Structural<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(StructuralComparer::<T>::new().hash(&self.0));
    }
}

impl<T> Deref for Structural<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Structural<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Structural").field(&self.0).finish()
    }
}
