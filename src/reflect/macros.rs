// Mon Jan 19 2026 - Alex

/// Implement [`Reflect`](crate::reflect::Reflect) for atomic types compared and
/// hashed natively. Each type needs `Eq + Hash`.
///
/// ```ignore
/// #[derive(PartialEq, Eq, Hash)]
/// enum Color { Red, Green }
/// structural_graph::impl_leaf!(Color);
/// ```
#[macro_export]
macro_rules! impl_leaf {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::reflect::Reflect for $ty {
                fn declared() -> $crate::structure::TypeDesc {
                    $crate::structure::TypeDesc::new::<Self>(true)
                }

                fn type_desc(&self) -> $crate::structure::TypeDesc {
                    <Self as $crate::reflect::Reflect>::declared()
                }

                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn shape(&self) -> $crate::reflect::Shape<'_> {
                    $crate::reflect::Shape::Leaf(self)
                }
            }

            impl $crate::reflect::LeafValue for $ty {
                fn leaf_eq(&self, other: &dyn ::std::any::Any) -> bool {
                    other.downcast_ref::<Self>().map_or(false, |other| self == other)
                }

                fn leaf_hash(&self) -> i32 {
                    $crate::utils::HashComputer::native_hash(self)
                }
            }
        )+
    };
}

/// Implement [`Reflect`](crate::reflect::Reflect) for a struct by listing the
/// fields that make up its structure. Tuple structs use indices.
///
/// ```ignore
/// struct Person { id: i64, name: String, manager: Option<Box<Person>> }
/// structural_graph::impl_composite!(Person { id, name, manager });
/// ```
#[macro_export]
macro_rules! impl_composite {
    ($ty:ty { $($field:tt),* $(,)? }) => {
        impl $crate::reflect::Reflect for $ty {
            fn declared() -> $crate::structure::TypeDesc {
                $crate::structure::TypeDesc::new::<Self>(false)
            }

            fn type_desc(&self) -> $crate::structure::TypeDesc {
                <Self as $crate::reflect::Reflect>::declared()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn shape(&self) -> $crate::reflect::Shape<'_> {
                fn members() -> ::std::vec::Vec<$crate::structure::Member> {
                    ::std::vec![$(
                        $crate::structure::Member::field::<$ty, _, _>(
                            ::std::stringify!($field),
                            |owner| &owner.$field,
                        )
                    ),*]
                }
                $crate::reflect::Shape::Composite(members)
            }
        }
    };
}

/// Implement [`Reflect`](crate::reflect::Reflect) for a collection type given
/// an expression producing an iterator of element references.
///
/// ```ignore
/// struct Path(Vec<Point>);
/// structural_graph::impl_sequence!(Path, |path| path.0.iter());
/// ```
#[macro_export]
macro_rules! impl_sequence {
    ($ty:ty, |$this:ident| $iter:expr) => {
        impl $crate::reflect::Reflect for $ty {
            fn declared() -> $crate::structure::TypeDesc {
                $crate::structure::TypeDesc::new::<Self>(false)
            }

            fn type_desc(&self) -> $crate::structure::TypeDesc {
                <Self as $crate::reflect::Reflect>::declared()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn shape(&self) -> $crate::reflect::Shape<'_> {
                let $this = self;
                $crate::reflect::Shape::Sequence(::std::boxed::Box::new(
                    $iter.map(|item| item as &dyn $crate::reflect::Reflect),
                ))
            }
        }
    };
}
