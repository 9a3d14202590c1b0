use crate::NodeKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphQLQueryError>;

/// Every way that building or rendering a GraphQL document can fail.
///
/// All of these indicate a programming error on the caller's side (a bad
/// name, a missing selection, a value GraphQL can't express) rather than a
/// transient condition, so none of them are worth retrying.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphQLQueryError {
    #[error("Empty list of queries for this operation.")]
    EmptyQueriesList,

    #[error("Empty list of fields for this {node_kind}.")]
    EmptyRequiredFieldList {
        node_kind: NodeKind,
    },

    #[error("Invalid value for argument `{argument_name}`: {reason}")]
    InvalidArgumentValue {
        argument_name: String,
        reason: String,
    },

    #[error(
        "Invalid GraphQL name `{name}`. Names must match \
        /^[_A-Za-z][_0-9A-Za-z]*$/."
    )]
    InvalidName {
        name: String,
    },

    #[error(
        "Unsupported operation type `{0}`. Expected one of `query`, \
        `mutation`, or `subscription`."
    )]
    UnsupportedOperationType(String),
}
