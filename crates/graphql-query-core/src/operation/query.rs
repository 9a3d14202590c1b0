use crate::operation::QueryBuilder;
use crate::selection::render_slots;
use crate::selection::FieldSlot;
use crate::templates;
use crate::Argument;
use crate::Render;
use crate::Result;
use inherent::inherent;

/// A root field selected by an [`Operation`](crate::Operation), e.g.
/// `empireHero: hero(episode: EMPIRE) { name }`.
///
/// Unlike a [`Field`](crate::Field), a `Query` always has a selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    pub(super) alias: Option<String>,
    pub(super) arguments: Vec<Argument>,
    pub(super) fields: Vec<FieldSlot>,
    pub(super) name: String,
    pub(super) typename: bool,
}
impl Query {
    pub fn builder(name: impl Into<String>) -> QueryBuilder {
        QueryBuilder::new(name)
    }

    /// Access the alias of this [`Query`] (if one was specified).
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Access the [`Argument`]s passed to this [`Query`].
    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    /// Access the sub-fields selected by this [`Query`].
    pub fn fields(&self) -> &[FieldSlot] {
        self.fields.as_slice()
    }

    /// Access the name of the root field this [`Query`] selects.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether `__typename` is selected as this [`Query`]'s first sub-field.
    pub fn typename(&self) -> bool {
        self.typename
    }
}

#[inherent]
impl Render for Query {
    pub fn render(&self) -> Result<String> {
        Ok(templates::query(
            self.alias.as_deref(),
            self.name.as_str(),
            &Argument::render_all(&self.arguments)?,
            self.typename,
            &render_slots(&self.fields)?,
        ))
    }
}
