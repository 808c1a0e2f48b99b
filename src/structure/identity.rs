// Mon Jan 19 2026 - Alex

use crate::reflect::Reflect;
use ahash::AHashSet;
use std::any::TypeId;

/// Reference identity of a node: its address plus its concrete type.
///
/// The type id keeps a struct apart from its first field, which lives at the
/// same address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    addr: usize,
    type_id: TypeId,
}

impl NodeId {
    pub fn of(node: &dyn Reflect) -> Self {
        Self {
            addr: node as *const dyn Reflect as *const () as usize,
            type_id: node.type_desc().id(),
        }
    }

    pub fn addr(&self) -> usize {
        self.addr
    }
}

/// Nodes entered during one traversal.
#[derive(Debug, Default)]
pub struct VisitedSet {
    seen: AHashSet<NodeId>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the node was already present.
    pub fn insert(&mut self, node: &dyn Reflect) -> bool {
        self.seen.insert(NodeId::of(node))
    }

    /// Returns `true` if the node was present.
    pub fn remove(&mut self, node: &dyn Reflect) -> bool {
        self.seen.remove(&NodeId::of(node))
    }

    pub fn contains(&self, node: &dyn Reflect) -> bool {
        self.seen.contains(&NodeId::of(node))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// `(x, y)` pairs entered during one structural comparison.
#[derive(Debug, Default)]
pub struct PairSet {
    seen: AHashSet<(NodeId, NodeId)>,
}

impl PairSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, x: &dyn Reflect, y: &dyn Reflect) -> bool {
        self.seen.insert((NodeId::of(x), NodeId::of(y)))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
