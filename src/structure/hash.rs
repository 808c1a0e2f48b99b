// Mon Jan 19 2026 - Alex

use crate::config::GraphConfig;
use crate::reflect::{resolve, Reflect, Shape};
use crate::structure::{MemberEnumerator, ReflectError, TypeDesc, VisitedSet};
use crate::utils::HashComputer;
use itertools::Itertools;

/// Deterministic 32-bit hash of an object graph's value.
///
/// Consistent with [`structurally_equal`](crate::structure::structurally_equal):
/// members are combined in name order, sequence elements in iteration order.
/// A node reached again while its own hash is still being built contributes
/// the configured sentinel; shared but acyclic nodes hash in full at every
/// occurrence. The builder never fails; unreadable members contribute only
/// their name.
pub struct StructuralHasher<'c> {
    config: &'c GraphConfig,
    path: VisitedSet,
    depth: usize,
}

impl<'c> StructuralHasher<'c> {
    pub fn new(config: &'c GraphConfig) -> Self {
        Self {
            config,
            path: VisitedSet::new(),
            depth: 0,
        }
    }

    pub fn hash(&mut self, value: &dyn Reflect) -> i32 {
        match resolve(value, |node| node.map_or(0, |node| self.hash_node(node))) {
            Ok(h) => h,
            Err(e) => {
                log::warn!("Hashing unreadable {} by type: {}", value.type_desc(), e);
                value.type_desc().type_hash()
            }
        }
    }

    fn hash_node(&mut self, node: &dyn Reflect) -> i32 {
        let shape = node.shape();
        if let Shape::Leaf(leaf) = shape {
            return leaf.leaf_hash();
        }

        let desc = node.type_desc();
        if !self.path.insert(node) {
            log::debug!("Cycle at {}, using sentinel", desc);
            return self.config.cycle_sentinel;
        }

        let h = if self.config.allows_depth(self.depth + 1) {
            self.depth += 1;
            let h = self.hash_children(node, &desc, shape);
            self.depth -= 1;
            h
        } else {
            log::debug!("Depth limit reached at {}", desc);
            desc.type_hash()
        };

        self.path.remove(node);
        h
    }

    fn hash_children(&mut self, node: &dyn Reflect, desc: &TypeDesc, shape: Shape<'_>) -> i32 {
        match shape {
            Shape::Sequence(elements) => {
                let mut h = desc.type_hash();
                for element in elements {
                    h = HashComputer::combine(h, self.hash(element));
                }
                h
            }
            Shape::Composite(source) => {
                let members = MemberEnumerator::members(desc, source, self.config.cache_members);
                let mut h = desc.type_hash();
                for member in members.iter().sorted_by(|a, b| a.name().cmp(b.name())) {
                    h = HashComputer::combine(h, HashComputer::native_hash(member.name()));
                    match member.read(node).and_then(|value| self.try_hash(value)) {
                        Ok(value_hash) => h = HashComputer::combine(h, value_hash),
                        Err(e) => log::warn!("Member {}.{} unreadable: {}", desc, member.name(), e),
                    }
                }
                h
            }
            Shape::Leaf(_) | Shape::Null | Shape::Indirect(_) => desc.type_hash(),
        }
    }

    /// Hash of a member value; fails only when its wrappers cannot be followed.
    fn try_hash(&mut self, value: &dyn Reflect) -> Result<i32, ReflectError> {
        resolve(value, |node| node.map_or(0, |node| self.hash_node(node)))
    }
}

/// Structural hash of `value` with the default configuration.
pub fn structural_hash(value: &dyn Reflect) -> i32 {
    structural_hash_with(&GraphConfig::default(), value)
}

pub fn structural_hash_with(config: &GraphConfig, value: &dyn Reflect) -> i32 {
    StructuralHasher::new(config).hash(value)
}
