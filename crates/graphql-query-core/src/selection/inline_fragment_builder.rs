use crate::name::validate_name;
use crate::selection::require_slots;
use crate::selection::FieldSlot;
use crate::selection::InlineFragment;
use crate::Argument;
use crate::NodeKind;
use crate::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragmentBuilder {
    arguments: Vec<Argument>,
    fields: Vec<FieldSlot>,
    type_condition: String,
    typename: bool,
}
impl InlineFragmentBuilder {
    pub fn add_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn add_field(mut self, field: impl Into<FieldSlot>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Consume this [`InlineFragmentBuilder`] to produce an
    /// [`InlineFragment`]. Fails if no sub-fields were added.
    pub fn build(self) -> Result<InlineFragment> {
        Ok(InlineFragment {
            arguments: self.arguments,
            type_condition: validate_name(
                NodeKind::InlineFragment,
                self.type_condition,
            )?,
            fields: require_slots(NodeKind::InlineFragment, self.fields)?,
            typename: self.typename,
        })
    }

    pub fn new(type_condition: impl Into<String>) -> Self {
        Self {
            arguments: vec![],
            fields: vec![],
            type_condition: type_condition.into(),
            typename: false,
        }
    }

    pub fn set_arguments(mut self, arguments: Vec<Argument>) -> Self {
        self.arguments = arguments;
        self
    }

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
