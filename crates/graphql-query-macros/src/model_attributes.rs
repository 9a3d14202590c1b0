//! Parsing for the `#[graphql(...)]` helper attributes accepted by
//! `#[derive(GraphQLQueryModel)]`.

use graphql_query_core::is_valid_name;
use heck::ToLowerCamelCase;
use heck::ToShoutySnakeCase;
use heck::ToSnakeCase;
use heck::ToUpperCamelCase;
use syn::meta::ParseNestedMeta;
use syn::Attribute;
use syn::Expr;
use syn::LitStr;

const ATTRIBUTE_NAME: &str = "graphql";

/// Reads a string literal and checks it against the GraphQL `Name` grammar.
fn parse_graphql_name(meta: &ParseNestedMeta) -> syn::Result<String> {
    let lit: LitStr = meta.value()?.parse()?;
    let name = lit.value();
    if is_valid_name(name.as_str()) {
        Ok(name)
    } else {
        Err(syn::Error::new(
            lit.span(),
            format!("`{name}` is not a valid GraphQL name"),
        ))
    }
}

fn graphql_attributes(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident(ATTRIBUTE_NAME))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum RenameRule {
    CamelCase,
    PascalCase,
    ScreamingSnakeCase,
    SnakeCase,
}
impl RenameRule {
    fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "camelCase" => Ok(Self::CamelCase),
            "PascalCase" => Ok(Self::PascalCase),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnakeCase),
            "snake_case" => Ok(Self::SnakeCase),
            other => Err(syn::Error::new(
                lit.span(),
                format!(
                    "unsupported `rename_all` rule `{other}` (expected one of \
                    `camelCase`, `PascalCase`, `SCREAMING_SNAKE_CASE`, \
                    `snake_case`)",
                ),
            )),
        }
    }

    pub(crate) fn apply(&self, name: &str) -> String {
        match self {
            Self::CamelCase => name.to_lower_camel_case(),
            Self::PascalCase => name.to_upper_camel_case(),
            Self::ScreamingSnakeCase => name.to_shouty_snake_case(),
            Self::SnakeCase => name.to_snake_case(),
        }
    }
}

/// Attributes placed on the deriving struct or enum itself.
#[derive(Debug, Default)]
pub(crate) struct ContainerAttributes {
    pub rename_all: Option<RenameRule>,
}
impl ContainerAttributes {
    pub(crate) fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in graphql_attributes(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.rename_all = Some(RenameRule::from_lit(&lit)?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported `graphql` container attribute"))
                }
            })?;
        }
        Ok(out)
    }
}

/// `argument(name = "...", value = <expr>)`
pub(crate) struct ArgumentAttribute {
    pub name: String,
    pub value: Expr,
}
impl ArgumentAttribute {
    fn parse(meta: &ParseNestedMeta) -> syn::Result<Self> {
        let mut name = None;
        let mut value = None;
        meta.parse_nested_meta(|inner| {
            if inner.path.is_ident("name") {
                name = Some(parse_graphql_name(&inner)?);
            } else if inner.path.is_ident("value") {
                value = Some(inner.value()?.parse::<Expr>()?);
            } else {
                return Err(inner.error("expected `name = \"...\"` or `value = ...`"));
            }
            Ok(())
        })?;

        match (name, value) {
            (Some(name), Some(value)) => Ok(Self { name, value }),
            (None, _) => Err(meta.error("`argument(...)` is missing `name = \"...\"`")),
            (_, None) => Err(meta.error("`argument(...)` is missing `value = ...`")),
        }
    }
}

/// `directive(name = "...", argument(...), ...)`
pub(crate) struct DirectiveAttribute {
    pub arguments: Vec<ArgumentAttribute>,
    pub name: String,
}
impl DirectiveAttribute {
    fn parse(meta: &ParseNestedMeta) -> syn::Result<Self> {
        let mut arguments = vec![];
        let mut name = None;
        meta.parse_nested_meta(|inner| {
            if inner.path.is_ident("name") {
                name = Some(parse_graphql_name(&inner)?);
            } else if inner.path.is_ident("argument") {
                arguments.push(ArgumentAttribute::parse(&inner)?);
            } else {
                return Err(inner.error("expected `name = \"...\"` or `argument(...)`"));
            }
            Ok(())
        })?;

        match name {
            Some(name) => Ok(Self { arguments, name }),
            None => Err(meta.error("`directive(...)` is missing `name = \"...\"`")),
        }
    }
}

/// Attributes placed on a named struct field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub alias: Option<String>,
    pub arguments: Vec<ArgumentAttribute>,
    pub directives: Vec<DirectiveAttribute>,
    pub rename: Option<String>,
    pub scalar: bool,
    pub skip: bool,
    pub typename: bool,
}
impl FieldAttributes {
    pub(crate) fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in graphql_attributes(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("alias") {
                    out.alias = Some(parse_graphql_name(&meta)?);
                } else if meta.path.is_ident("argument") {
                    out.arguments.push(ArgumentAttribute::parse(&meta)?);
                } else if meta.path.is_ident("directive") {
                    out.directives.push(DirectiveAttribute::parse(&meta)?);
                } else if meta.path.is_ident("rename") {
                    out.rename = Some(parse_graphql_name(&meta)?);
                } else if meta.path.is_ident("scalar") {
                    out.scalar = true;
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                } else if meta.path.is_ident("typename") {
                    out.typename = true;
                } else {
                    return Err(meta.error("unsupported `graphql` field attribute"));
                }
                Ok(())
            })?;
        }
        Ok(out)
    }
}

/// Attributes placed on an enum variant.
#[derive(Debug, Default)]
pub(crate) struct VariantAttributes {
    pub on: Option<String>,
    pub skip: bool,
    pub typename: bool,
}
impl VariantAttributes {
    pub(crate) fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in graphql_attributes(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("on") {
                    out.on = Some(parse_graphql_name(&meta)?);
                } else if meta.path.is_ident("skip") {
                    out.skip = true;
                } else if meta.path.is_ident("typename") {
                    out.typename = true;
                } else {
                    return Err(meta.error("unsupported `graphql` variant attribute"));
                }
                Ok(())
            })?;
        }
        Ok(out)
    }
}
