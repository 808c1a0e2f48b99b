// Mon Jan 19 2026 - Alex

use crate::config::GraphConfig;
use crate::reflect::{leaf_equal, resolve, Reflect, Shape};
use crate::structure::{MemberEnumerator, PairSet, ReflectError, TypeClassifier, TypeDesc};

/// Value equality of two object graphs.
///
/// Composites are compared member by member in enumeration order, leaves by
/// native equality, sequences element by element. Both sides must share one
/// runtime type. A failing getter aborts the comparison with its error.
pub struct StructuralComparator<'c> {
    config: &'c GraphConfig,
    pairs: PairSet,
    depth: usize,
}

impl<'c> StructuralComparator<'c> {
    pub fn new(config: &'c GraphConfig) -> Self {
        Self {
            config,
            pairs: PairSet::new(),
            depth: 0,
        }
    }

    /// Compare `x` and `y` as `ty`, or as `x`'s runtime type when `ty` is `None`.
    pub fn compare(
        &mut self,
        x: &dyn Reflect,
        y: &dyn Reflect,
        ty: Option<TypeDesc>,
    ) -> Result<bool, ReflectError> {
        resolve(x, |x| resolve(y, |y| self.compare_nodes(x, y, ty))?)?
    }

    fn compare_nodes(
        &mut self,
        x: Option<&dyn Reflect>,
        y: Option<&dyn Reflect>,
        ty: Option<TypeDesc>,
    ) -> Result<bool, ReflectError> {
        let (x, y) = match (x, y) {
            (None, None) => return Ok(true),
            (Some(x), Some(y)) => (x, y),
            _ => return Ok(false),
        };

        let ty = ty.map(|t| t.resolved()).unwrap_or_else(|| x.type_desc());
        if x.type_desc() != ty || y.type_desc() != ty {
            log::debug!(
                "Runtime types {} and {} differ from {}",
                x.type_desc(),
                y.type_desc(),
                ty
            );
            return Ok(false);
        }

        match x.shape() {
            Shape::Leaf(leaf) => Ok(leaf.leaf_eq(y.as_any())),
            Shape::Sequence(xs) => {
                let ys = match y.shape() {
                    Shape::Sequence(ys) => ys,
                    _ => return Ok(false),
                };
                if !self.enter(x, y)? {
                    return Ok(true);
                }
                let result = self.compare_elements(xs, ys);
                self.depth -= 1;
                result
            }
            Shape::Composite(source) => {
                if !self.enter(x, y)? {
                    return Ok(true);
                }
                let result = self.compare_members(x, y, &ty, source);
                self.depth -= 1;
                result
            }
            Shape::Null | Shape::Indirect(_) => Ok(false),
        }
    }

    fn compare_members(
        &mut self,
        x: &dyn Reflect,
        y: &dyn Reflect,
        ty: &TypeDesc,
        source: crate::reflect::MemberSource,
    ) -> Result<bool, ReflectError> {
        let members = MemberEnumerator::members(ty, source, self.config.cache_members);

        for member in members.iter() {
            let xv = member.read(x)?;
            let yv = member.read(y)?;
            let declared = member.declared();

            let equal = if TypeClassifier::is_leaf_type(&declared) {
                leaf_equal(xv, yv)?
            } else {
                self.compare(xv, yv, Some(declared))?
            };

            if !equal {
                log::trace!("Member {}.{} differs", ty, member.name());
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn compare_elements<'x, 'y>(
        &mut self,
        xs: impl Iterator<Item = &'x dyn Reflect>,
        mut ys: impl Iterator<Item = &'y dyn Reflect>,
    ) -> Result<bool, ReflectError> {
        for x in xs {
            let Some(y) = ys.next() else {
                return Ok(false);
            };
            if !self.compare(x, y, None)? {
                return Ok(false);
            }
        }
        Ok(ys.next().is_none())
    }

    /// Returns `Ok(false)` when the pair is already under comparison.
    fn enter(&mut self, x: &dyn Reflect, y: &dyn Reflect) -> Result<bool, ReflectError> {
        if self.config.equality_cycle_guard && !self.pairs.insert(x, y) {
            log::debug!("Re-entered pair of {}, treating as equal", x.type_desc());
            return Ok(false);
        }

        self.depth += 1;
        if !self.config.allows_depth(self.depth) {
            self.depth -= 1;
            return Err(ReflectError::DepthExceeded(self.config.max_depth.unwrap_or(self.depth)));
        }
        Ok(true)
    }
}

/// Structural equality of `x` and `y` using `x`'s runtime type.
pub fn structurally_equal(x: &dyn Reflect, y: &dyn Reflect) -> Result<bool, ReflectError> {
    structurally_equal_with(&GraphConfig::default(), x, y, None)
}

/// Structural equality of `x` and `y` as the given type.
pub fn structurally_equal_as(
    x: &dyn Reflect,
    y: &dyn Reflect,
    ty: TypeDesc,
) -> Result<bool, ReflectError> {
    structurally_equal_with(&GraphConfig::default(), x, y, Some(ty))
}

pub fn structurally_equal_with(
    config: &GraphConfig,
    x: &dyn Reflect,
    y: &dyn Reflect,
    ty: Option<TypeDesc>,
) -> Result<bool, ReflectError> {
    StructuralComparator::new(config).compare(x, y, ty)
}
