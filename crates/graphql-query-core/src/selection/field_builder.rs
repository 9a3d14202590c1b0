use crate::name::validate_name;
use crate::name::validate_optional_name;
use crate::selection::Field;
use crate::selection::FieldSlot;
use crate::Argument;
use crate::Directive;
use crate::NodeKind;
use crate::Result;

/// Assembles a [`Field`]. Names are validated when [`FieldBuilder::build()`]
/// is called.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldBuilder {
    alias: Option<String>,
    arguments: Vec<Argument>,
    directives: Vec<Directive>,
    fields: Vec<FieldSlot>,
    name: String,
    typename: bool,
}
impl FieldBuilder {
    /// Add an [`Argument`] after any previously added `Argument`s.
    pub fn add_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Add a [`Directive`] after any previously added `Directive`s.
    pub fn add_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Add a sub-field after any previously added sub-fields.
    pub fn add_field(mut self, field: impl Into<FieldSlot>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Consume this [`FieldBuilder`] to produce a [`Field`].
    pub fn build(self) -> Result<Field> {
        Ok(Field {
            alias: validate_optional_name(NodeKind::Field, self.alias)?,
            arguments: self.arguments,
            directives: self.directives,
            fields: self.fields,
            name: validate_name(NodeKind::Field, self.name)?,
            typename: self.typename,
        })
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: vec![],
            directives: vec![],
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

    /// Set the list of [`Directive`]s.
    ///
    /// NOTE: Any previously added directives are fully replaced.
    pub fn set_directives(mut self, directives: Vec<Directive>) -> Self {
        self.directives = directives;
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

    /// Request the `__typename` meta field as the first sub-field.
    pub fn set_typename(mut self, typename: bool) -> Self {
        self.typename = typename;
        self
    }
}
