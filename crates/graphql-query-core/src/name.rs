use crate::GraphQLQueryError;
use crate::NodeKind;
use crate::Result;

/// Returns `true` if `name` is a valid
/// [GraphQL `Name`](https://spec.graphql.org/October2021/#Name), i.e. it
/// matches `/^[_A-Za-z][_0-9A-Za-z]*$/`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => (),
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

pub(crate) fn validate_name(
    node_kind: NodeKind,
    name: String,
) -> Result<String> {
    if is_valid_name(name.as_str()) {
        Ok(name)
    } else {
        log::debug!("Rejected invalid {node_kind} name `{name}`.");
        Err(GraphQLQueryError::InvalidName { name })
    }
}

pub(crate) fn validate_optional_name(
    node_kind: NodeKind,
    name: Option<String>,
) -> Result<Option<String>> {
    name.map(|name| validate_name(node_kind, name)).transpose()
}
