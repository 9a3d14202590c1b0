//! Build GraphQL queries, mutations, and subscriptions as trees of typed
//! Rust values and render them as GraphQL document text.
//!
//! ```
//! use graphql_query::Argument;
//! use graphql_query::Field;
//! use graphql_query::Operation;
//! use graphql_query::OperationKind;
//! use graphql_query::Query;
//! use graphql_query::Variable;
//!
//! let episode = Variable::new("episode", "Episode").unwrap();
//! let operation = Operation::builder(OperationKind::Query)
//!     .set_name(Some("Hero".to_string()))
//!     .add_variable(episode.clone())
//!     .add_query(
//!         Query::builder("hero")
//!             .add_argument(Argument::new("episode", &episode).unwrap())
//!             .add_field("name")
//!             .add_field(Field::builder("friends").add_field("name").build().unwrap())
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(operation.render().unwrap(), r#"query Hero(
//!   $episode: Episode
//! ) {
//!   hero(
//!     episode: $episode
//!   ) {
//!     name
//!     friends {
//!       name
//!     }
//!   }
//! }"#);
//! ```

pub use graphql_query_core::*;

/// Derive macros for describing a query's selection set with Rust types.
#[cfg(feature = "macros")]
pub mod macros {
    pub use graphql_query_macros::*;
}

#[cfg(test)]
mod tests;
