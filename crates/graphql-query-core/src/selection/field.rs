use crate::selection::render_slots;
use crate::selection::FieldBuilder;
use crate::selection::FieldSlot;
use crate::templates;
use crate::Argument;
use crate::Directive;
use crate::Render;
use crate::Result;
use inherent::inherent;

/// A [field](https://graphql.org/learn/queries/#fields) selection.
///
/// A `Field` with no sub-fields (and no `__typename` request) renders as a
/// leaf; otherwise it renders with a `{ ... }` selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(super) alias: Option<String>,
    pub(super) arguments: Vec<Argument>,
    pub(super) directives: Vec<Directive>,
    pub(super) fields: Vec<FieldSlot>,
    pub(super) name: String,
    pub(super) typename: bool,
}
impl Field {
    pub fn builder(name: impl Into<String>) -> FieldBuilder {
        FieldBuilder::new(name)
    }

    /// Shorthand for a leaf field with nothing but a name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        FieldBuilder::new(name).build()
    }

    /// Access the alias of this [`Field`] (if one was specified).
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Access the [`Argument`]s passed to this [`Field`].
    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    /// Access the [`Directive`]s annotating this [`Field`].
    pub fn directives(&self) -> &[Directive] {
        self.directives.as_slice()
    }

    /// Access the sub-fields selected by this [`Field`].
    pub fn fields(&self) -> &[FieldSlot] {
        self.fields.as_slice()
    }

    /// Whether this [`Field`] renders without a selection set.
    pub fn is_leaf(&self) -> bool {
        !self.typename && self.fields.is_empty()
    }

    /// Access the name of this [`Field`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// If an alias was specified for this field, return the alias.
    /// Otherwise return the name of the field.
    pub fn selected_name(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }

    /// Whether `__typename` is selected as this [`Field`]'s first sub-field.
    pub fn typename(&self) -> bool {
        self.typename
    }
}

#[inherent]
impl Render for Field {
    pub fn render(&self) -> Result<String> {
        let directives = self.directives.iter()
            .map(Directive::render)
            .collect::<Result<Vec<_>>>()?;
        Ok(templates::field(
            self.alias.as_deref(),
            self.name.as_str(),
            &Argument::render_all(&self.arguments)?,
            &directives,
            self.typename,
            &render_slots(&self.fields)?,
        ))
    }
}
