use crate::name::validate_name;
use crate::name::validate_optional_name;
use crate::operation::Query;
use crate::selection::require_slots;
use crate::selection::FieldSlot;
use crate::Argument;
use crate::NodeKind;
use crate::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct QueryBuilder {
    alias: Option<String>,
    arguments: Vec<Argument>,
    fields: Vec<FieldSlot>,
    name: String,
    typename: bool,
}
impl QueryBuilder {
    /// Add an [`Argument`] after any previously added `Argument`s.
    pub fn add_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Add a sub-field after any previously added sub-fields.
    pub fn add_field(mut self, field: impl Into<FieldSlot>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Consume this [`QueryBuilder`] to produce a [`Query`]. Fails if no
    /// sub-fields were added.
    pub fn build(self) -> Result<Query> {
        Ok(Query {
            alias: validate_optional_name(NodeKind::Query, self.alias)?,
            arguments: self.arguments,
            name: validate_name(NodeKind::Query, self.name)?,
            fields: require_slots(NodeKind::Query, self.fields)?,
            typename: self.typename,
        })
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: vec![],
            fields: vec![],
            name: name.into(),
            typename: false,
        }
    }

    pub fn set_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the list of [`Argument`]s.
    ///
    /// NOTE: Any previously added arguments are fully replaced.
    pub fn set_arguments(mut self, arguments: Vec<Argument>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Set the list of sub-fields.
    ///
    /// NOTE: Any previously added sub-fields are fully replaced.
    pub fn set_fields<T: Into<FieldSlot>>(
        mut self,
        fields: impl IntoIterator<Item = T>,
    ) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_typename(mut self, typename: bool) -> Self {
        self.typename = typename;
        self
    }
}
