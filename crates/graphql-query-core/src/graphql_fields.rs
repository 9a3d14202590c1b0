use crate::FieldSlot;
use crate::Result;
use std::collections::BTreeSet;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

/// Implemented by Rust types that describe the GraphQL selection set needed
/// to fetch them.
///
/// Scalars select nothing, so their impls return an empty list and a field
/// of that type renders as a leaf. Containers (`Option<T>`, `Vec<T>`,
/// `Box<T>`, ...) select whatever `T` selects.
///
/// Usually implemented with `#[derive(GraphQLQueryModel)]` from
/// `graphql_query::macros`, and handed to a builder:
///
/// ```
/// use graphql_query_core::FieldSlot;
/// use graphql_query_core::GraphQLFields;
/// use graphql_query_core::Query;
///
/// struct Hero;
/// impl GraphQLFields for Hero {
///     fn graphql_fields() -> graphql_query_core::Result<Vec<FieldSlot>> {
///         Ok(vec!["name".into()])
///     }
/// }
///
/// let query = Query::builder("hero")
///     .set_fields(Hero::graphql_fields().unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(query.render().unwrap(), "hero {\n  name\n}");
/// ```
pub trait GraphQLFields {
    fn graphql_fields() -> Result<Vec<FieldSlot>>;
}

macro_rules! impl_scalar_graphql_fields {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl GraphQLFields for $scalar {
                fn graphql_fields() -> Result<Vec<FieldSlot>> {
                    Ok(vec![])
                }
            }
        )*
    };
}

impl_scalar_graphql_fields!(
    bool, char, str, String,
    f32, f64,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
);

macro_rules! impl_wrapper_graphql_fields {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: GraphQLFields> GraphQLFields for $wrapper<T> {
                fn graphql_fields() -> Result<Vec<FieldSlot>> {
                    T::graphql_fields()
                }
            }
        )*
    };
}

impl_wrapper_graphql_fields!(BTreeSet, HashSet, Option, Vec, VecDeque);

impl<T: GraphQLFields + ?Sized> GraphQLFields for Arc<T> {
    fn graphql_fields() -> Result<Vec<FieldSlot>> {
        T::graphql_fields()
    }
}

impl<T: GraphQLFields + ?Sized> GraphQLFields for Box<T> {
    fn graphql_fields() -> Result<Vec<FieldSlot>> {
        T::graphql_fields()
    }
}

impl<T: GraphQLFields + ?Sized> GraphQLFields for Rc<T> {
    fn graphql_fields() -> Result<Vec<FieldSlot>> {
        T::graphql_fields()
    }
}

impl<T: GraphQLFields + ?Sized> GraphQLFields for &T {
    fn graphql_fields() -> Result<Vec<FieldSlot>> {
        T::graphql_fields()
    }
}

impl<T: GraphQLFields> GraphQLFields for [T] {
    fn graphql_fields() -> Result<Vec<FieldSlot>> {
        T::graphql_fields()
    }
}

impl<T: GraphQLFields, const N: usize> GraphQLFields for [T; N] {
    fn graphql_fields() -> Result<Vec<FieldSlot>> {
        T::graphql_fields()
    }
}
