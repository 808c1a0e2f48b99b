// Mon Jan 19 2026 - Alex

//! Structural operations over object graphs discovered at run time: visiting
//! every reachable node, value equality, and a deterministic structural hash.

pub mod config;
pub mod reflect;
pub mod structure;
pub mod utils;

pub use config::GraphConfig;
pub use reflect::{LeafValue, Reflect, Shape, Value};
pub use structure::{
    collect_nodes, count_nodes, structural_hash, structural_hash_with, structurally_equal,
    structurally_equal_as, structurally_equal_with, visit, visit_all, visit_typed, visit_with,
    Member, MemberEnumerator, NodeKind, ReflectError, Structural, StructuralComparer, TypeClassifier,
    TypeDesc, VisitError,
};
