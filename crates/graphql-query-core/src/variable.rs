use crate::name::validate_name;
use crate::templates;
use crate::NodeKind;
use crate::Render;
use crate::Result;
use inherent::inherent;

/// A [GraphQL variable](https://graphql.org/learn/queries/#variables)
/// definition, e.g. `$episode: Episode = JEDI`.
///
/// The type annotation and default value are raw GraphQL text and are
/// emitted exactly as given. An [`Argument`](crate::Argument) that refers to a
/// `Variable` only ever prints its name, so the same `Variable` can be both
/// declared on an [`Operation`](crate::Operation) and used as an argument
/// value.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub(crate) default_value: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: String,
}
impl Variable {
    pub fn new(
        name: impl Into<String>,
        type_annotation: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            default_value: None,
            name: validate_name(NodeKind::Variable, name.into())?,
            type_annotation: type_annotation.into(),
        })
    }

    pub fn with_default(
        name: impl Into<String>,
        type_annotation: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            default_value: Some(default_value.into()),
            ..Self::new(name, type_annotation)?
        })
    }

    /// Access the raw default value of this [`Variable`] (if one was
    /// specified).
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Access the name of this [`Variable`], without the leading `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Access the raw type annotation of this [`Variable`].
    pub fn type_annotation(&self) -> &str {
        self.type_annotation.as_str()
    }
}

#[inherent]
impl Render for Variable {
    pub fn render(&self) -> Result<String> {
        Ok(templates::variable(
            self.name.as_str(),
            self.type_annotation.as_str(),
            self.default_value.as_deref(),
        ))
    }
}
