// Mon Jan 19 2026 - Alex

use crate::reflect::{resolve, Reflect, Shape};
use crate::structure::{ReflectError, TypeDesc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Leaf,
    Sequence,
    Composite,
}

impl NodeKind {
    pub fn is_leaf(self) -> bool {
        self == Self::Leaf
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => write!(f, "leaf"),
            Self::Sequence => write!(f, "sequence"),
            Self::Composite => write!(f, "composite"),
        }
    }
}

pub struct TypeClassifier;

impl TypeClassifier {
    /// Leaf types: primitives, text, enums, date/time, identifiers, tuples of
    /// leaves, and any nullable wrapper of those.
    pub fn is_leaf_type(desc: &TypeDesc) -> bool {
        desc.is_leaf()
    }

    /// Kind of an already-resolved node. Indirections and nulls have none.
    pub fn kind_of(node: &dyn Reflect) -> Option<NodeKind> {
        match node.shape() {
            Shape::Leaf(_) => Some(NodeKind::Leaf),
            Shape::Sequence(_) => Some(NodeKind::Sequence),
            Shape::Composite(_) => Some(NodeKind::Composite),
            Shape::Null | Shape::Indirect(_) => None,
        }
    }

    /// Follow wrappers from `value` and classify what they lead to; `None`
    /// for null.
    pub fn classify(value: &dyn Reflect) -> Result<Option<NodeKind>, ReflectError> {
        resolve(value, |node| node.and_then(Self::kind_of))
    }
}
