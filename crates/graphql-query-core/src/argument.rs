use crate::name::validate_name;
use crate::templates;
use crate::ArgumentValue;
use crate::GraphQLQueryError;
use crate::NodeKind;
use crate::Render;
use crate::Result;
use inherent::inherent;

/// A [GraphQL argument](https://graphql.org/learn/queries/#arguments): a name
/// paired with an [`ArgumentValue`].
///
/// Arguments nest: an argument whose value is another `Argument` (or a list
/// of them) renders as a GraphQL input object.
///
/// ```
/// use graphql_query_core::Argument;
///
/// let arg = Argument::new("id", "\"1000\"").unwrap();
/// assert_eq!(arg.render().unwrap(), "id: \"1000\"");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub(crate) name: String,
    pub(crate) value: ArgumentValue,
}
impl Argument {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<ArgumentValue>,
    ) -> Result<Self> {
        Ok(Self {
            name: validate_name(NodeKind::Argument, name.into())?,
            value: value.into(),
        })
    }

    /// Access the name of this [`Argument`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Access the [`ArgumentValue`] of this [`Argument`].
    pub fn value(&self) -> &ArgumentValue {
        &self.value
    }

    fn invalid_value(&self, reason: impl Into<String>) -> GraphQLQueryError {
        let reason = reason.into();
        log::debug!(
            "Refusing to render argument `{}`: {reason}",
            self.name,
        );
        GraphQLQueryError::InvalidArgumentValue {
            argument_name: self.name.to_owned(),
            reason,
        }
    }

    fn raw_literal<'a>(&self, raw: &'a str) -> Result<&'a str> {
        if raw.is_empty() {
            Err(self.invalid_value("an empty literal is not a GraphQL value"))
        } else {
            Ok(raw)
        }
    }

    /// Shortest round-trippable decimal text that always keeps a fractional
    /// part (`1.0`, never `1`). `f64`'s `Display` never uses exponent
    /// notation and doesn't depend on locale.
    fn float_literal(&self, value: f64) -> Result<String> {
        if !value.is_finite() {
            return Err(self.invalid_value(format!(
                "`{value}` has no GraphQL Float representation",
            )));
        }
        let text = value.to_string();
        Ok(if text.contains('.') {
            text
        } else {
            format!("{text}.0")
        })
    }

    pub(crate) fn render_all(arguments: &[Argument]) -> Result<Vec<String>> {
        arguments.iter()
            .map(Argument::render)
            .collect()
    }
}

#[inherent]
impl Render for Argument {
    pub fn render(&self) -> Result<String> {
        let name = self.name.as_str();
        Ok(match &self.value {
            ArgumentValue::String(raw) =>
                templates::key_value(name, self.raw_literal(raw)?),

            ArgumentValue::Bool(value) =>
                templates::key_value(name, bool_literal(*value)),

            ArgumentValue::Int(value) =>
                templates::key_value(name, value.to_string().as_str()),

            ArgumentValue::Float(value) =>
                templates::key_value(name, self.float_literal(*value)?.as_str()),

            ArgumentValue::Argument(argument) =>
                templates::key_object(name, &[argument.render()?]),

            ArgumentValue::Variable(variable) =>
                templates::key_variable(name, variable.name()),

            ArgumentValue::StringList(values) => {
                let values = values.iter()
                    .map(|raw| self.raw_literal(raw).map(str::to_string))
                    .collect::<Result<Vec<_>>>()?;
                templates::key_values(name, &values)
            },

            ArgumentValue::IntList(values) => {
                let values = values.iter()
                    .map(i64::to_string)
                    .collect::<Vec<_>>();
                templates::key_values(name, &values)
            },

            ArgumentValue::BoolList(values) => {
                let values = values.iter()
                    .map(|value| bool_literal(*value).to_string())
                    .collect::<Vec<_>>();
                templates::key_values(name, &values)
            },

            ArgumentValue::FloatList(values) => {
                let values = values.iter()
                    .map(|value| self.float_literal(*value))
                    .collect::<Result<Vec<_>>>()?;
                templates::key_values(name, &values)
            },

            ArgumentValue::Arguments(arguments) =>
                templates::key_object(name, &Self::render_all(arguments)?),

            ArgumentValue::ArgumentLists(objects) => {
                let objects = objects.iter()
                    .map(|entries| {
                        Self::render_all(entries)
                            .map(|entries| templates::object(&entries))
                    })
                    .collect::<Result<Vec<_>>>()?;
                templates::key_objects(name, &objects)
            },
        })
    }
}

fn bool_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
