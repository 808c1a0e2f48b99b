// Mon Jan 19 2026 - Alex

pub mod cache;
pub mod classifier;
pub mod comparer;
pub mod comparison;
pub mod error;
pub mod hash;
pub mod identity;
pub mod member;
pub mod traversal;
pub mod type_info;

pub use cache::{MemberCache, MemberEnumerator};
pub use classifier::{NodeKind, TypeClassifier};
pub use comparer::{Structural, StructuralComparer};
pub use comparison::{structurally_equal, structurally_equal_as, structurally_equal_with, StructuralComparator};
pub use error::{ReflectError, VisitError};
pub use hash::{structural_hash, structural_hash_with, StructuralHasher};
pub use identity::{NodeId, PairSet, VisitedSet};
pub use member::{Accessor, Getter, IndexedGetter, Member};
pub use traversal::{collect_nodes, count_nodes, visit, visit_all, visit_typed, visit_with, GraphVisitor};
pub use type_info::TypeDesc;
