use crate::name::validate_name;
use crate::selection::require_slots;
use crate::selection::FieldSlot;
use crate::selection::Fragment;
use crate::NodeKind;
use crate::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentBuilder {
    fields: Vec<FieldSlot>,
    name: String,
    type_condition: String,
    typename: bool,
}
impl FragmentBuilder {
    pub fn add_field(mut self, field: impl Into<FieldSlot>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Consume this [`FragmentBuilder`] to produce a [`Fragment`]. Fails if
    /// no sub-fields were added.
    pub fn build(self) -> Result<Fragment> {
        Ok(Fragment {
            name: validate_name(NodeKind::Fragment, self.name)?,
            type_condition: validate_name(
                NodeKind::Fragment,
                self.type_condition,
            )?,
            fields: require_slots(NodeKind::Fragment, self.fields)?,
            typename: self.typename,
        })
    }

    pub fn new(
        name: impl Into<String>,
        type_condition: impl Into<String>,
    ) -> Self {
        Self {
            fields: vec![],
            name: name.into(),
            type_condition: type_condition.into(),
            typename: false,
        }
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
