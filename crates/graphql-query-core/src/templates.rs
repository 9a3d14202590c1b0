//! The fixed text shapes each node kind renders into.
//!
//! Every function here is pure: it receives the already-rendered text of a
//! node's children and fills it into that node's shape. Nesting a child one
//! level deeper always goes through [`block()`], which applies
//! [`line_shift()`] once per level.

use crate::line_shift;

const INDENT: &str = "  ";
const TYPENAME_FIELD: &str = "__typename";

/// `open`, then each item on its own line one level deeper, then `close` on
/// its own line at the starting level.
fn block<'a>(
    open: &str,
    items: impl IntoIterator<Item = &'a str>,
    close: &str,
) -> String {
    let mut out = String::from(open);
    for item in items {
        out.push('\n');
        out.push_str(INDENT);
        out.push_str(line_shift(item).as_str());
    }
    out.push('\n');
    out.push_str(close);
    out
}

fn as_strs(items: &[String]) -> impl Iterator<Item = &str> {
    items.iter().map(String::as_str)
}

fn aliased_name(alias: Option<&str>, name: &str) -> String {
    match alias {
        Some(alias) => format!("{alias}: {name}"),
        None => name.to_string(),
    }
}

pub(crate) fn key_value(name: &str, value: &str) -> String {
    format!("{name}: {value}")
}

pub(crate) fn key_values(name: &str, values: &[String]) -> String {
    format!("{name}: [{}]", values.join(", "))
}

pub(crate) fn key_variable(name: &str, variable_name: &str) -> String {
    format!("{name}: ${variable_name}")
}

pub(crate) fn key_object(name: &str, entries: &[String]) -> String {
    format!("{name}: {}", object(entries))
}

pub(crate) fn key_objects(name: &str, objects: &[String]) -> String {
    if objects.is_empty() {
        format!("{name}: []")
    } else {
        format!("{name}: {}", block("[", as_strs(objects), "]"))
    }
}

pub(crate) fn object(entries: &[String]) -> String {
    if entries.is_empty() {
        "{}".to_string()
    } else {
        block("{", as_strs(entries), "}")
    }
}

/// Parenthesized, one-per-line argument (or variable definition) block.
/// Empty when there is nothing to put in it.
pub(crate) fn argument_block(arguments: &[String]) -> String {
    if arguments.is_empty() {
        String::new()
    } else {
        block("(", as_strs(arguments), ")")
    }
}

/// ` { ... }` with `__typename` first when requested. Empty when there is
/// nothing to select, which leaves the owning node rendered as a leaf.
pub(crate) fn selection_set(typename: bool, fields: &[String]) -> String {
    if !typename && fields.is_empty() {
        return String::new();
    }
    let entries =
        typename.then_some(TYPENAME_FIELD)
            .into_iter()
            .chain(as_strs(fields));
    format!(" {}", block("{", entries, "}"))
}

pub(crate) fn variable(
    name: &str,
    type_annotation: &str,
    default_value: Option<&str>,
) -> String {
    match default_value {
        Some(default_value) =>
            format!("${name}: {type_annotation} = {default_value}"),
        None =>
            format!("${name}: {type_annotation}"),
    }
}

pub(crate) fn directive(name: &str, arguments: &[String]) -> String {
    format!("@{name}{}", argument_block(arguments))
}

pub(crate) fn field(
    alias: Option<&str>,
    name: &str,
    arguments: &[String],
    directives: &[String],
    typename: bool,
    fields: &[String],
) -> String {
    let mut out = aliased_name(alias, name);
    out.push_str(argument_block(arguments).as_str());
    for directive in directives {
        out.push(' ');
        out.push_str(directive);
    }
    out.push_str(selection_set(typename, fields).as_str());
    out
}

pub(crate) fn query(
    alias: Option<&str>,
    name: &str,
    arguments: &[String],
    typename: bool,
    fields: &[String],
) -> String {
    field(alias, name, arguments, &[], typename, fields)
}

pub(crate) fn inline_fragment(
    type_condition: &str,
    arguments: &[String],
    typename: bool,
    fields: &[String],
) -> String {
    format!(
        "... on {type_condition}{}{}",
        argument_block(arguments),
        selection_set(typename, fields),
    )
}

pub(crate) fn fragment(
    name: &str,
    type_condition: &str,
    typename: bool,
    fields: &[String],
) -> String {
    format!(
        "fragment {name} on {type_condition}{}",
        selection_set(typename, fields),
    )
}

pub(crate) fn fragment_spread(name: &str) -> String {
    format!("...{name}")
}

/// The operation body holds one query per entry with a blank line between
/// siblings. Fragment definitions follow the body, each after a blank line.
pub(crate) fn operation(
    operation_type: &str,
    name: Option<&str>,
    variables: &[String],
    queries: &[String],
    fragments: &[String],
) -> String {
    let mut out = String::from(operation_type);
    if let Some(name) = name {
        out.push(' ');
        out.push_str(name);
    }
    out.push_str(argument_block(variables).as_str());
    out.push_str(" {");
    for (idx, query) in queries.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push('\n');
        out.push_str(INDENT);
        out.push_str(line_shift(query).as_str());
    }
    out.push_str("\n}");
    for fragment in fragments {
        out.push_str("\n\n");
        out.push_str(fragment);
    }
    out
}
