mod argument;
mod argument_value;
mod directive;
mod error;
mod graphql_fields;
mod name;
mod node_kind;
pub mod operation;
mod render;
pub mod selection;
mod templates;
mod variable;

pub use argument::Argument;
pub use argument_value::ArgumentValue;
pub use directive::Directive;
pub use error::GraphQLQueryError;
pub use error::Result;
pub use graphql_fields::GraphQLFields;
pub use name::is_valid_name;
pub use node_kind::NodeKind;
pub use operation::Operation;
pub use operation::OperationBuilder;
pub use operation::OperationKind;
pub use operation::Query;
pub use operation::QueryBuilder;
pub use render::line_shift;
pub use render::Render;
pub use selection::Field;
pub use selection::FieldBuilder;
pub use selection::FieldSlot;
pub use selection::Fragment;
pub use selection::FragmentBuilder;
pub use selection::InlineFragment;
pub use selection::InlineFragmentBuilder;
pub use variable::Variable;
