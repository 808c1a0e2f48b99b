// Mon Jan 19 2026 - Alex

//! Runtime introspection for object graphs.
//!
//! Every type that can sit in a graph implements [`Reflect`]. Its [`Shape`]
//! says how the traversal engine treats it: as a leaf compared natively, a
//! sequence walked through its elements, a composite walked through its
//! members, or an indirection (`Option`, `Box`, `Rc`, `RefCell`, ...) that is
//! followed before anything else happens.

pub mod impls;
mod macros;

use crate::structure::{Member, ReflectError, TypeDesc};
use std::any::Any;
use std::ops::Deref;

pub trait Reflect: Any + 'static {
    /// Descriptor of the implementing type, used as a member's declared type.
    fn declared() -> TypeDesc
    where
        Self: Sized;

    /// Descriptor of the value's runtime type.
    fn type_desc(&self) -> TypeDesc;

    fn as_any(&self) -> &dyn Any;

    fn shape(&self) -> Shape<'_>;
}

/// Native equality and hashing of atomic values.
pub trait LeafValue {
    fn leaf_eq(&self, other: &dyn Any) -> bool;
    fn leaf_hash(&self) -> i32;
}

/// Lists every member of a composite type, structural or not.
pub type MemberSource = fn() -> Vec<Member>;

pub type Elements<'a> = Box<dyn Iterator<Item = &'a dyn Reflect> + 'a>;

pub enum Shape<'a> {
    Null,
    Leaf(&'a dyn LeafValue),
    Sequence(Elements<'a>),
    Composite(MemberSource),
    Indirect(Result<Value<'a>, ReflectError>),
}

impl<'a> Shape<'a> {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Leaf(_) => "leaf",
            Self::Sequence(_) => "sequence",
            Self::Composite(_) => "composite",
            Self::Indirect(_) => "indirect",
        }
    }
}

/// A value reached through an indirection.
pub enum Value<'a> {
    Borrowed(&'a dyn Reflect),
    Guarded(Box<dyn Deref<Target = dyn Reflect> + 'a>),
}

impl<'a> Value<'a> {
    /// Wrap a borrow guard (`Ref`, lock guards) whose target is reflectable.
    pub fn guarded<G>(guard: G) -> Self
    where
        G: Deref + 'a,
        G::Target: Reflect + Sized,
    {
        Value::Guarded(Box::new(GuardAdapter(guard)))
    }
}

impl<'a> Deref for Value<'a> {
    type Target = dyn Reflect;

    fn deref(&self) -> &Self::Target {
        match self {
            Value::Borrowed(value) => *value,
            Value::Guarded(guard) => &***guard,
        }
    }
}

struct GuardAdapter<G>(G);

impl<G> Deref for GuardAdapter<G>
where
    G: Deref,
    G::Target: Reflect + Sized,
{
    type Target = dyn Reflect;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// Follow indirections from `value` and hand the resolved node to `f`.
///
/// `None` means the chain ended in a null. Guards taken along the way stay
/// alive while `f` runs.
pub fn resolve<R>(
    value: &dyn Reflect,
    f: impl FnOnce(Option<&dyn Reflect>) -> R,
) -> Result<R, ReflectError> {
    match value.shape() {
        Shape::Null => Ok(f(None)),
        Shape::Indirect(inner) => {
            let inner = inner?;
            resolve(&*inner, f)
        }
        Shape::Leaf(_) | Shape::Sequence(_) | Shape::Composite(_) => Ok(f(Some(value))),
    }
}

/// Native equality of two leaf-declared values, looking through wrappers.
pub fn leaf_equal(a: &dyn Reflect, b: &dyn Reflect) -> Result<bool, ReflectError> {
    resolve(a, |a| {
        resolve(b, |b| match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => match a.shape() {
                Shape::Leaf(leaf) => leaf.leaf_eq(b.as_any()),
                _ => false,
            },
            _ => false,
        })
    })?
}

/// Native hash of a leaf-declared value; null hashes to `0`.
pub fn leaf_hash(value: &dyn Reflect) -> Result<i32, ReflectError> {
    resolve(value, |node| match node.map(|n| n.shape()) {
        Some(Shape::Leaf(leaf)) => leaf.leaf_hash(),
        Some(_) => node.map(|n| n.type_desc().type_hash()).unwrap_or(0),
        None => 0,
    })
}
