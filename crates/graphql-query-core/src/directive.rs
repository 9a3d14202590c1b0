use crate::name::validate_name;
use crate::templates;
use crate::Argument;
use crate::NodeKind;
use crate::Render;
use crate::Result;
use inherent::inherent;

/// A [directive](https://graphql.org/learn/queries/#directives) annotation
/// on a [`Field`](crate::Field), e.g. `@include(if: $withFriends)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) arguments: Vec<Argument>,
    pub(crate) name: String,
}
impl Directive {
    pub fn new(
        name: impl Into<String>,
        arguments: Vec<Argument>,
    ) -> Result<Self> {
        Ok(Self {
            arguments,
            name: validate_name(NodeKind::Directive, name.into())?,
        })
    }

    /// Access the [`Argument`]s passed to this [`Directive`].
    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    /// Access the name of this [`Directive`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[inherent]
impl Render for Directive {
    pub fn render(&self) -> Result<String> {
        Ok(templates::directive(
            self.name.as_str(),
            &Argument::render_all(&self.arguments)?,
        ))
    }
}
