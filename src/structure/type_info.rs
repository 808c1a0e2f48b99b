// Mon Jan 19 2026 - Alex

use crate::reflect::Reflect;
use crate::utils::HashComputer;
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime description of a reflected type.
///
/// Two descriptors are equal when they describe the same `TypeId`. Transparent
/// wrappers (`Option`, `Box`, `Rc`, cells) record their pointee so a declared
/// member type can be resolved to the runtime type that will actually be
/// classified.
#[derive(Clone, Copy)]
pub struct TypeDesc {
    id: TypeId,
    name: &'static str,
    leaf: bool,
    pointee: Option<fn() -> TypeDesc>,
}

impl TypeDesc {
    pub fn new<T: ?Sized + 'static>(leaf: bool) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            leaf,
            pointee: None,
        }
    }

    /// Descriptor for a transparent wrapper around `P`. Leafness passes through.
    pub fn indirect<T: ?Sized + 'static, P: Reflect>() -> Self {
        let target = P::declared();
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            leaf: target.leaf,
            pointee: Some(P::declared),
        }
    }

    pub fn of<T: Reflect>() -> Self {
        T::declared()
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    pub fn is_indirect(&self) -> bool {
        self.pointee.is_some()
    }

    /// Strip every transparent wrapper.
    pub fn resolved(&self) -> TypeDesc {
        let mut current = *self;
        while let Some(next) = current.pointee {
            current = next();
        }
        current
    }

    /// Native hash of the type's name.
    pub fn type_hash(&self) -> i32 {
        HashComputer::native_hash(self.name)
    }
}

impl PartialEq for TypeDesc {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDesc {}

impl Hash for TypeDesc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDesc")
            .field("name", &self.name)
            .field("leaf", &self.leaf)
            .field("indirect", &self.is_indirect())
            .finish()
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
