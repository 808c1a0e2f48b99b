// Mon Jan 19 2026 - Alex

use crate::reflect::{MemberSource, Reflect, Shape};
use crate::structure::{Member, TypeDesc};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::any::TypeId;
use std::sync::Arc;

static SHARED: Lazy<MemberCache> = Lazy::new(MemberCache::new);

/// Per-type structural member lists. Holds type metadata only.
pub struct MemberCache {
    cache: RwLock<AHashMap<TypeId, Arc<[Member]>>>,
}

impl MemberCache {
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(AHashMap::new()),
        }
    }

    pub fn shared() -> &'static MemberCache {
        &SHARED
    }

    pub fn get(&self, desc: &TypeDesc) -> Option<Arc<[Member]>> {
        self.cache.read().get(&desc.id()).cloned()
    }

    pub fn get_or_insert(&self, desc: &TypeDesc, source: MemberSource) -> Arc<[Member]> {
        if let Some(members) = self.get(desc) {
            return members;
        }

        let members = MemberEnumerator::enumerate(source);
        self.cache
            .write()
            .entry(desc.id())
            .or_insert(members)
            .clone()
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }

    pub fn size(&self) -> usize {
        self.cache.read().len()
    }
}

impl Default for MemberCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces the readable, non-indexed members of a composite type.
pub struct MemberEnumerator;

impl MemberEnumerator {
    pub fn enumerate(source: MemberSource) -> Arc<[Member]> {
        source().into_iter().filter(Member::is_structural).collect()
    }

    /// Structural members of a resolved node; empty for anything but a composite.
    pub fn members_of(node: &dyn Reflect) -> Arc<[Member]> {
        match node.shape() {
            Shape::Composite(source) => Self::members(&node.type_desc(), source, true),
            _ => Vec::new().into(),
        }
    }

    pub fn members(desc: &TypeDesc, source: MemberSource, use_cache: bool) -> Arc<[Member]> {
        if use_cache {
            MemberCache::shared().get_or_insert(desc, source)
        } else {
            Self::enumerate(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    struct Grid {
        cells: Vec<u8>,
        width: usize,
    }

    impl Reflect for Grid {
        fn declared() -> TypeDesc {
            TypeDesc::new::<Self>(false)
        }

        fn type_desc(&self) -> TypeDesc {
            Self::declared()
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn shape(&self) -> Shape<'_> {
            Shape::Composite(grid_members)
        }
    }

    fn grid_members() -> Vec<Member> {
        vec![
            Member::field::<Grid, _, _>("width", |g| &g.width),
            Member::indexed::<Grid, u8, _>("cell", |g, i| g.cells.get(i)),
            Member::write_only::<String>("label"),
            Member::field::<Grid, _, _>("cells", |g| &g.cells),
        ]
    }

    #[test]
    fn test_enumerate_filters_indexed_and_write_only() {
        let members = MemberEnumerator::enumerate(grid_members);
        let names: Vec<_> = members.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["width", "cells"]);
    }

    #[test]
    fn test_cache_roundtrip() {
        let cache = MemberCache::new();
        let desc = TypeDesc::of::<Grid>();

        assert!(cache.get(&desc).is_none());
        let first = cache.get_or_insert(&desc, grid_members);
        let second = cache.get_or_insert(&desc, grid_members);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.size(), 1);

        cache.clear();
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_uncached_enumeration_matches_cached() {
        let grid = Grid { cells: vec![1, 2], width: 2 };
        let desc = grid.type_desc();
        let cached = MemberEnumerator::members(&desc, grid_members, true);
        let fresh = MemberEnumerator::members(&desc, grid_members, false);
        assert_eq!(cached.len(), fresh.len());
        assert_eq!(grid.cells.len(), 2);
    }

    #[test]
    fn test_members_of_node() {
        let grid = Grid { cells: vec![0], width: 1 };
        let names: Vec<_> = MemberEnumerator::members_of(&grid).iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["width", "cells"]);
        assert!(MemberEnumerator::members_of(&grid.cells).is_empty());
        assert!(MemberEnumerator::members_of(&7_u8).is_empty());
    }
}
