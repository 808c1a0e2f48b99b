// Mon Jan 19 2026 - Alex

use crate::reflect::{leaf_equal, leaf_hash, LeafValue, Reflect, Shape, Value};
use crate::structure::{Member, ReflectError, TypeDesc};
use crate::utils::HashComputer;
use indexmap::{IndexMap, IndexSet};
use std::any::{type_name, Any};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

crate::impl_leaf!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    String,
    &'static str,
    std::cmp::Ordering,
    std::time::Duration,
    std::time::SystemTime,
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::FixedOffset>,
    uuid::Uuid,
    rust_decimal::Decimal,
);

macro_rules! impl_float_leaf {
    ($($ty:ty),+) => {
        $(
            impl Reflect for $ty {
                fn declared() -> TypeDesc {
                    TypeDesc::new::<Self>(true)
                }

                fn type_desc(&self) -> TypeDesc {
                    Self::declared()
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn shape(&self) -> Shape<'_> {
                    Shape::Leaf(self)
                }
            }

            impl LeafValue for $ty {
                fn leaf_eq(&self, other: &dyn Any) -> bool {
                    other
                        .downcast_ref::<Self>()
                        .map_or(false, |other| HashComputer::float_eq(*self as f64, *other as f64))
                }

                fn leaf_hash(&self) -> i32 {
                    HashComputer::float_hash(*self as f64)
                }
            }
        )+
    };
}

impl_float_leaf!(f32, f64);

// Transparent wrappers: followed before classification, leafness passes through.

impl<T: Reflect> Reflect for Option<T> {
    fn declared() -> TypeDesc {
        TypeDesc::indirect::<Self, T>()
    }

    fn type_desc(&self) -> TypeDesc {
        Self::declared()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => Shape::Indirect(Ok(Value::Borrowed(value))),
            None => Shape::Null,
        }
    }
}

macro_rules! impl_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<T: Reflect> Reflect for $ptr<T> {
                fn declared() -> TypeDesc {
                    TypeDesc::indirect::<Self, T>()
                }

                fn type_desc(&self) -> TypeDesc {
                    Self::declared()
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn shape(&self) -> Shape<'_> {
                    Shape::Indirect(Ok(Value::Borrowed(&**self)))
                }
            }
        )+
    };
}

impl_pointer!(Box, Rc, Arc);

impl<T: Reflect> Reflect for RefCell<T> {
    fn declared() -> TypeDesc {
        TypeDesc::indirect::<Self, T>()
    }

    fn type_desc(&self) -> TypeDesc {
        Self::declared()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn shape(&self) -> Shape<'_> {
        let value = self
            .try_borrow()
            .map(Value::guarded)
            .map_err(|_| ReflectError::Unavailable(type_name::<Self>()));
        Shape::Indirect(value)
    }
}

impl<T: Reflect> Reflect for parking_lot::RwLock<T> {
    fn declared() -> TypeDesc {
        TypeDesc::indirect::<Self, T>()
    }

    fn type_desc(&self) -> TypeDesc {
        Self::declared()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn shape(&self) -> Shape<'_> {
        let value = self
            .try_read()
            .map(Value::guarded)
            .ok_or(ReflectError::Unavailable(type_name::<Self>()));
        Shape::Indirect(value)
    }
}

impl<T: Reflect> Reflect for parking_lot::Mutex<T> {
    fn declared() -> TypeDesc {
        TypeDesc::indirect::<Self, T>()
    }

    fn type_desc(&self) -> TypeDesc {
        Self::declared()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn shape(&self) -> Shape<'_> {
        let value = self
            .try_lock()
            .map(Value::guarded)
            .ok_or(ReflectError::Unavailable(type_name::<Self>()));
        Shape::Indirect(value)
    }
}

// Sequences

macro_rules! impl_sequence_generic {
    ($($seq:ident),+) => {
        $(
            impl<T: Reflect> Reflect for $seq<T> {
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
                    Shape::Sequence(Box::new(self.iter().map(|item| item as &dyn Reflect)))
                }
            }
        )+
    };
}

impl_sequence_generic!(Vec, VecDeque, BTreeSet);

impl<T: Reflect, const N: usize> Reflect for [T; N] {
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
        Shape::Sequence(Box::new(self.iter().map(|item| item as &dyn Reflect)))
    }
}

impl<T: Reflect, S: 'static> Reflect for IndexSet<T, S> {
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
        Shape::Sequence(Box::new(self.iter().map(|item| item as &dyn Reflect)))
    }
}

// Maps are sequences of their entries in iteration order. An entry is laid
// out as its key followed by its value, since no `(K, V)` is stored.

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
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
        Shape::Sequence(Box::new(
            self.iter()
                .flat_map(|(key, value)| [key as &dyn Reflect, value as &dyn Reflect]),
        ))
    }
}

impl<K: Reflect, V: Reflect, S: 'static> Reflect for IndexMap<K, V, S> {
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
        Shape::Sequence(Box::new(
            self.iter()
                .flat_map(|(key, value)| [key as &dyn Reflect, value as &dyn Reflect]),
        ))
    }
}

// Tuples are leaves when every component is; otherwise composites with
// members "0", "1", ...

macro_rules! impl_tuple {
    ($members:ident; $tuple:ty; $($name:ident : $idx:tt),+) => {
        fn $members<$($name: Reflect),+>() -> Vec<Member> {
            vec![$(Member::field::<$tuple, $name, _>(stringify!($idx), |t| &t.$idx)),+]
        }

        impl<$($name: Reflect),+> Reflect for $tuple {
            fn declared() -> TypeDesc {
                TypeDesc::new::<Self>(true $(&& $name::declared().is_leaf())+)
            }

            fn type_desc(&self) -> TypeDesc {
                Self::declared()
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn shape(&self) -> Shape<'_> {
                if Self::declared().is_leaf() {
                    Shape::Leaf(self)
                } else {
                    Shape::Composite($members::<$($name),+>)
                }
            }
        }

        impl<$($name: Reflect),+> LeafValue for $tuple {
            fn leaf_eq(&self, other: &dyn Any) -> bool {
                let Some(other) = other.downcast_ref::<Self>() else {
                    return false;
                };
                true $(&& leaf_equal(&self.$idx, &other.$idx).unwrap_or(false))+
            }

            fn leaf_hash(&self) -> i32 {
                let mut h = Self::declared().type_hash();
                $(h = HashComputer::combine(h, leaf_hash(&self.$idx).unwrap_or(0));)+
                h
            }
        }
    };
}

impl_tuple!(tuple1_members; (A,); A: 0);
impl_tuple!(tuple2_members; (A, B); A: 0, B: 1);
impl_tuple!(tuple3_members; (A, B, C); A: 0, B: 1, C: 2);
impl_tuple!(tuple4_members; (A, B, C, D); A: 0, B: 1, C: 2, D: 3);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{
        collect_nodes, structural_hash, structurally_equal, visit_typed, NodeKind, TypeClassifier,
    };
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::convert::Infallible;

    struct Item {
        sku: String,
    }

    crate::impl_composite!(Item { sku });

    fn item(sku: &str) -> Item {
        Item { sku: sku.to_string() }
    }

    #[test]
    fn test_primitive_leaves() {
        for desc in [
            TypeDesc::of::<bool>(),
            TypeDesc::of::<char>(),
            TypeDesc::of::<u64>(),
            TypeDesc::of::<f32>(),
            TypeDesc::of::<String>(),
            TypeDesc::of::<&'static str>(),
            TypeDesc::of::<NaiveDate>(),
            TypeDesc::of::<chrono::DateTime<Utc>>(),
            TypeDesc::of::<uuid::Uuid>(),
            TypeDesc::of::<std::time::Duration>(),
        ] {
            assert!(TypeClassifier::is_leaf_type(&desc), "{} should be a leaf", desc);
        }
    }

    #[test]
    fn test_nullable_leaf() {
        assert!(TypeDesc::of::<Option<i32>>().is_leaf());
        assert!(TypeDesc::of::<Option<uuid::Uuid>>().is_leaf());
        assert!(!TypeDesc::of::<Option<Vec<i32>>>().is_leaf());
    }

    #[test]
    fn test_string_is_not_a_sequence() {
        let text = String::from("abc");
        assert_eq!(TypeClassifier::classify(&text).unwrap(), Some(NodeKind::Leaf));
        assert_eq!(TypeClassifier::classify(&vec![1_u8]).unwrap(), Some(NodeKind::Sequence));
    }

    #[test]
    fn test_float_leaf_semantics() {
        assert!(f64::NAN.leaf_eq(&f64::NAN));
        assert!(0.0_f32.leaf_eq(&-0.0_f32));
        assert!(!1.0_f64.leaf_eq(&1.0_f32));
        assert_eq!(0.0_f64.leaf_hash(), (-0.0_f64).leaf_hash());
    }

    #[test]
    fn test_tuple_classification() {
        assert!(TypeDesc::of::<(i32, String)>().is_leaf());
        assert!(TypeDesc::of::<(i32, Option<char>, bool)>().is_leaf());
        assert!(!TypeDesc::of::<(i32, Vec<i32>)>().is_leaf());

        let mixed = (1_i32, vec![2_i32]);
        assert_eq!(TypeClassifier::classify(&mixed).unwrap(), Some(NodeKind::Composite));
    }

    #[test]
    fn test_tuple_leaf_equality() {
        let a = (1_i32, Some("x".to_string()));
        let b = (1_i32, Some("x".to_string()));
        let c = (1_i32, None::<String>);
        assert!(a.leaf_eq(&b));
        assert!(!a.leaf_eq(&c));
        assert_eq!(a.leaf_hash(), b.leaf_hash());
    }

    #[test]
    fn test_datetime_leaf_equality() {
        let a = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(a.leaf_eq(&b));
        assert_eq!(a.leaf_hash(), b.leaf_hash());
    }

    #[test]
    fn test_sequences_are_not_leaves() {
        assert!(!TypeDesc::of::<Vec<i32>>().is_leaf());
        assert!(!TypeDesc::of::<[u8; 4]>().is_leaf());
        assert!(!TypeDesc::of::<IndexSet<String>>().is_leaf());
        assert_eq!(TypeClassifier::classify(&[1_u8, 2]).unwrap(), Some(NodeKind::Sequence));
    }

    #[test]
    fn test_locked_cell_is_unavailable() {
        let lock = parking_lot::RwLock::new(3_i32);
        let _writer = lock.write();
        assert!(matches!(lock.shape(), Shape::Indirect(Err(ReflectError::Unavailable(_)))));
    }

    #[test]
    fn test_decimal_is_leaf() {
        assert!(TypeClassifier::is_leaf_type(&TypeDesc::of::<Decimal>()));
        assert!(TypeClassifier::is_leaf_type(&TypeDesc::of::<Option<Decimal>>()));
        assert_eq!(
            TypeClassifier::classify(&Decimal::new(1999, 2)).unwrap(),
            Some(NodeKind::Leaf)
        );

        let price = Decimal::new(1999, 2);
        assert!(price.leaf_eq(&Decimal::new(1999, 2)));
        assert!(!price.leaf_eq(&Decimal::new(2000, 2)));
        assert!(Decimal::new(10, 1).leaf_eq(&Decimal::new(100, 2)));
        assert_eq!(price.leaf_hash(), Decimal::new(1999, 2).leaf_hash());
    }

    #[test]
    fn test_maps_are_sequences() {
        assert!(!TypeDesc::of::<BTreeMap<String, u32>>().is_leaf());
        let map: IndexMap<u8, Item> = IndexMap::new();
        assert_eq!(TypeClassifier::classify(&map).unwrap(), Some(NodeKind::Sequence));
    }

    #[test]
    fn test_btree_map_equality_and_hash() {
        let mut a = BTreeMap::new();
        a.insert("x".to_string(), 1_u32);
        a.insert("y".to_string(), 2_u32);
        let mut b = BTreeMap::new();
        b.insert("y".to_string(), 2_u32);
        b.insert("x".to_string(), 1_u32);

        assert!(structurally_equal(&a, &b).unwrap());
        assert_eq!(structural_hash(&a), structural_hash(&b));

        b.insert("y".to_string(), 3);
        assert!(!structurally_equal(&a, &b).unwrap());

        b.insert("y".to_string(), 2);
        b.insert("z".to_string(), 2);
        assert!(!structurally_equal(&a, &b).unwrap());
    }

    #[test]
    fn test_index_map_keeps_insertion_order() {
        let mut a = IndexMap::new();
        a.insert(1_u8, item("a"));
        a.insert(2_u8, item("b"));
        let mut b = IndexMap::new();
        b.insert(1_u8, item("a"));
        b.insert(2_u8, item("b"));
        let mut c = IndexMap::new();
        c.insert(2_u8, item("b"));
        c.insert(1_u8, item("a"));

        assert!(structurally_equal(&a, &b).unwrap());
        assert_eq!(structural_hash(&a), structural_hash(&b));
        assert!(!structurally_equal(&a, &c).unwrap());

        if let Some((_, last)) = b.get_index_mut(1) {
            last.sku.push('!');
        }
        assert!(!structurally_equal(&a, &b).unwrap());
    }

    #[test]
    fn test_map_entries_are_visited() {
        let mut map = BTreeMap::new();
        map.insert(1_u8, item("a"));
        map.insert(2_u8, item("b"));

        // map, then per entry: key, item, item.sku
        assert_eq!(collect_nodes(&map).len(), 7);

        let mut skus = Vec::new();
        visit_typed::<Item, Infallible, _>(&map, |i| {
            skus.push(i.sku.clone());
            Ok(())
        })
        .unwrap();
        assert_eq!(skus, vec!["a", "b"]);
    }
}
