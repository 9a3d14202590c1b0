use crate::selection::render_slots;
use crate::selection::FieldSlot;
use crate::selection::FragmentBuilder;
use crate::templates;
use crate::Render;
use crate::Result;
use inherent::inherent;

/// A named [fragment](https://graphql.org/learn/queries/#fragments).
///
/// Rendered on its own (or from an [`Operation`](crate::Operation)'s
/// fragment list) a `Fragment` produces its full definition:
///
/// ```text
/// fragment comparisonFields on Character {
///   name
/// }
/// ```
///
/// Placed in another node's sub-fields (as a [`FieldSlot::Fragment`]) it
/// produces only the spread `...comparisonFields`.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub(super) fields: Vec<FieldSlot>,
    pub(super) name: String,
    pub(super) type_condition: String,
    pub(super) typename: bool,
}
impl Fragment {
    pub fn builder(
        name: impl Into<String>,
        type_condition: impl Into<String>,
    ) -> FragmentBuilder {
        FragmentBuilder::new(name, type_condition)
    }

    /// Access the sub-fields selected by this [`Fragment`].
    pub fn fields(&self) -> &[FieldSlot] {
        self.fields.as_slice()
    }

    /// Access the name of this [`Fragment`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The `...Name` text used when this fragment is selected from within
    /// another selection set.
    pub fn spread(&self) -> String {
        templates::fragment_spread(self.name.as_str())
    }

    /// Access the name of the type this [`Fragment`] applies to.
    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }

    /// Whether `__typename` is selected as this [`Fragment`]'s first sub-field.
    pub fn typename(&self) -> bool {
        self.typename
    }
}

#[inherent]
impl Render for Fragment {
    pub fn render(&self) -> Result<String> {
        Ok(templates::fragment(
            self.name.as_str(),
            self.type_condition.as_str(),
            self.typename,
            &render_slots(&self.fields)?,
        ))
    }
}
