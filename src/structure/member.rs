// Mon Jan 19 2026 - Alex

use crate::reflect::Reflect;
use crate::structure::{ReflectError, TypeDesc};
use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

pub type Getter =
    Arc<dyn for<'a> Fn(&'a dyn Any) -> Result<&'a dyn Reflect, ReflectError> + Send + Sync>;

pub type IndexedGetter =
    Arc<dyn for<'a> Fn(&'a dyn Any, usize) -> Result<&'a dyn Reflect, ReflectError> + Send + Sync>;

/// How a member's value is obtained.
#[derive(Clone)]
pub enum Accessor {
    Field(Getter),
    /// Requires an index argument; never part of structural identity.
    Indexed(IndexedGetter),
    WriteOnly,
}

/// A named, typed attribute of a composite type.
#[derive(Clone)]
pub struct Member {
    name: &'static str,
    declared: TypeDesc,
    accessor: Accessor,
}

fn erase<G>(getter: G) -> G
where
    G: for<'a> Fn(&'a dyn Any) -> Result<&'a dyn Reflect, ReflectError>,
{
    getter
}

fn erase_indexed<G>(getter: G) -> G
where
    G: for<'a> Fn(&'a dyn Any, usize) -> Result<&'a dyn Reflect, ReflectError>,
{
    getter
}

impl Member {
    /// Plain field projection.
    pub fn field<O, F, G>(name: &'static str, get: G) -> Self
    where
        O: Reflect,
        F: Reflect,
        G: for<'a> Fn(&'a O) -> &'a F + Send + Sync + 'static,
    {
        Self::try_field::<O, F, _>(name, move |owner| Ok(get(owner)))
    }

    /// Projection that can fail, e.g. a computed property.
    pub fn try_field<O, F, G>(name: &'static str, get: G) -> Self
    where
        O: Reflect,
        F: Reflect,
        G: for<'a> Fn(&'a O) -> Result<&'a F, ReflectError> + Send + Sync + 'static,
    {
        let getter = erase(move |owner: &dyn Any| {
            let owner = owner
                .downcast_ref::<O>()
                .ok_or(ReflectError::TypeMismatch {
                    member: name,
                    expected: type_name::<O>(),
                })?;
            get(owner).map(|value| value as &dyn Reflect)
        });

        Self {
            name,
            declared: F::declared(),
            accessor: Accessor::Field(Arc::new(getter)),
        }
    }

    pub fn indexed<O, F, G>(name: &'static str, get: G) -> Self
    where
        O: Reflect,
        F: Reflect,
        G: for<'a> Fn(&'a O, usize) -> Option<&'a F> + Send + Sync + 'static,
    {
        let getter = erase_indexed(move |owner: &dyn Any, index: usize| {
            let owner = owner
                .downcast_ref::<O>()
                .ok_or(ReflectError::TypeMismatch {
                    member: name,
                    expected: type_name::<O>(),
                })?;
            get(owner, index)
                .map(|value| value as &dyn Reflect)
                .ok_or(ReflectError::IndexOutOfRange { member: name, index })
        });

        Self {
            name,
            declared: F::declared(),
            accessor: Accessor::Indexed(Arc::new(getter)),
        }
    }

    pub fn write_only<F: Reflect>(name: &'static str) -> Self {
        Self {
            name,
            declared: F::declared(),
            accessor: Accessor::WriteOnly,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn declared(&self) -> TypeDesc {
        self.declared
    }

    pub fn accessor(&self) -> &Accessor {
        &self.accessor
    }

    pub fn is_readable(&self) -> bool {
        !matches!(self.accessor, Accessor::WriteOnly)
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self.accessor, Accessor::Indexed(_))
    }

    /// Members that take part in traversal, comparison and hashing.
    pub fn is_structural(&self) -> bool {
        self.is_readable() && !self.is_indexed()
    }

    /// Read this member's value from `owner`.
    pub fn read<'a>(&self, owner: &'a dyn Reflect) -> Result<&'a dyn Reflect, ReflectError> {
        match &self.accessor {
            Accessor::Field(getter) => getter(owner.as_any()),
            Accessor::Indexed(_) | Accessor::WriteOnly => Err(ReflectError::NotReadable(self.name)),
        }
    }

    pub fn read_at<'a>(
        &self,
        owner: &'a dyn Reflect,
        index: usize,
    ) -> Result<&'a dyn Reflect, ReflectError> {
        match &self.accessor {
            Accessor::Indexed(getter) => getter(owner.as_any(), index),
            Accessor::Field(_) | Accessor::WriteOnly => Err(ReflectError::NotReadable(self.name)),
        }
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let access = match self.accessor {
            Accessor::Field(_) => "field",
            Accessor::Indexed(_) => "indexed",
            Accessor::WriteOnly => "write-only",
        };
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("declared", &self.declared.name())
            .field("access", &access)
            .finish()
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.declared)
    }
}
