use crate::selection::render_slots;
use crate::selection::FieldSlot;
use crate::selection::InlineFragmentBuilder;
use crate::templates;
use crate::Argument;
use crate::Render;
use crate::Result;
use inherent::inherent;

/// An [inline fragment](https://graphql.org/learn/queries/#inline-fragments),
/// e.g. `... on Droid { primaryFunction }`. Always has at least one
/// sub-field.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(super) arguments: Vec<Argument>,
    pub(super) fields: Vec<FieldSlot>,
    pub(super) type_condition: String,
    pub(super) typename: bool,
}
impl InlineFragment {
    pub fn builder(type_condition: impl Into<String>) -> InlineFragmentBuilder {
        InlineFragmentBuilder::new(type_condition)
    }

    /// Access the [`Argument`]s passed to this [`InlineFragment`].
    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    /// Access the sub-fields selected by this [`InlineFragment`].
    pub fn fields(&self) -> &[FieldSlot] {
        self.fields.as_slice()
    }

    /// Access the name of the type this [`InlineFragment`] applies to.
    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }

    /// Whether `__typename` is selected as this [`InlineFragment`]'s first
    /// sub-field.
    pub fn typename(&self) -> bool {
        self.typename
    }
}

#[inherent]
impl Render for InlineFragment {
    pub fn render(&self) -> Result<String> {
        Ok(templates::inline_fragment(
            self.type_condition.as_str(),
            &Argument::render_all(&self.arguments)?,
            self.typename,
            &render_slots(&self.fields)?,
        ))
    }
}
