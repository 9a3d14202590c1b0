use crate::selection::Field;
use crate::selection::Fragment;
use crate::selection::InlineFragment;
use crate::GraphQLQueryError;
use crate::NodeKind;
use crate::Render;
use crate::Result;
use inherent::inherent;

/// One entry in a selection set.
///
/// A [`Fragment`] in this position is only ever printed as a spread
/// (`...Name`); its definition has to be added to the owning
/// [`Operation`](crate::Operation) separately.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldSlot {
    Field(Field),
    Fragment(Fragment),
    InlineFragment(InlineFragment),
    /// A leaf field, printed verbatim.
    Name(String),
}

#[inherent]
impl Render for FieldSlot {
    pub fn render(&self) -> Result<String> {
        Ok(match self {
            Self::Name(name) => name.to_owned(),
            Self::Fragment(fragment) => fragment.spread(),
            Self::Field(field) => field.render()?,
            Self::InlineFragment(inline_fragment) => inline_fragment.render()?,
        })
    }
}

impl std::convert::From<&str> for FieldSlot {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}
impl std::convert::From<String> for FieldSlot {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}
impl std::convert::From<Field> for FieldSlot {
    fn from(value: Field) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<Fragment> for FieldSlot {
    fn from(value: Fragment) -> Self {
        Self::Fragment(value)
    }
}
impl std::convert::From<InlineFragment> for FieldSlot {
    fn from(value: InlineFragment) -> Self {
        Self::InlineFragment(value)
    }
}

pub(crate) fn render_slots(slots: &[FieldSlot]) -> Result<Vec<String>> {
    slots.iter()
        .map(FieldSlot::render)
        .collect()
}

pub(crate) fn require_slots(
    node_kind: NodeKind,
    slots: Vec<FieldSlot>,
) -> Result<Vec<FieldSlot>> {
    if slots.is_empty() {
        log::debug!("Rejected {node_kind} with an empty selection set.");
        return Err(GraphQLQueryError::EmptyRequiredFieldList { node_kind });
    }
    Ok(slots)
}
