mod operation;
mod operation_builder;
mod operation_kind;
mod query;
mod query_builder;

pub use operation::Operation;
pub use operation_builder::OperationBuilder;
pub use operation_kind::OperationKind;
pub use query::Query;
pub use query_builder::QueryBuilder;
