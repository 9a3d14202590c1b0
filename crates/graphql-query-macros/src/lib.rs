mod graphql_query_model;
mod model_attributes;


use syn::DeriveInput;
use syn::parse_macro_input;

/// Derives [`GraphQLFields`](graphql_query::GraphQLFields) for a struct (one
/// [`Field`](graphql_query::Field) per named field) or for an enum whose
/// variants each wrap one type (one
/// [`InlineFragment`](graphql_query::InlineFragment) per variant).
///
/// A field's sub-fields come from its type's own `GraphQLFields` impl, so
/// scalars render as leaves and `Option<T>`/`Vec<T>` select whatever `T`
/// selects.
///
/// Example usage:
///
/// ```rust
/// use graphql_query::macros::GraphQLQueryModel;
/// use graphql_query::GraphQLFields;
/// use graphql_query::Query;
///
/// #[derive(GraphQLQueryModel)]
/// #[graphql(rename_all = "camelCase")]
/// struct Droid {
///     primary_function: String,
/// }
///
/// #[derive(GraphQLQueryModel)]
/// struct Human {
///     #[graphql(argument(name = "unit", value = "FOOT"))]
///     height: f64,
/// }
///
/// #[derive(GraphQLQueryModel)]
/// enum Character {
///     Droid(Droid),
///     Human(Human),
/// }
///
/// #[derive(GraphQLQueryModel)]
/// #[graphql(rename_all = "camelCase")]
/// struct Hero {
///     name: String,
///     #[graphql(rename = "__typename", scalar)]
///     kind: String,
///     details: Option<Character>,
/// }
///
/// let query = Query::builder("hero")
///     .set_fields(Hero::graphql_fields().unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(query.render().unwrap(), r#"hero {
///   name
///   __typename
///   details {
///     ... on Droid {
///       primaryFunction
///     }
///     ... on Human {
///       height(
///         unit: FOOT
///       )
///     }
///   }
/// }"#);
/// ```
///
/// Supported `#[graphql(...)]` attributes:
///
/// * On the struct or enum: `rename_all = "camelCase" | "PascalCase" |
///   "snake_case" | "SCREAMING_SNAKE_CASE"`. It renames struct fields only;
///   a variant's type condition is the variant name unless `on` is given.
/// * On a struct field: `rename = "..."`, `alias = "..."`, `typename`,
///   `skip`, `scalar`, `argument(name = "...", value = <expr>)` and
///   `directive(name = "...", argument(...))`. `argument` and `directive`
///   may be repeated.
/// * On an enum variant: `on = "..."`, `typename`, `skip`.
///
/// Every name is checked against the GraphQL `Name` grammar at compile time.
#[proc_macro_derive(GraphQLQueryModel, attributes(graphql))]
pub fn derive_graphql_query_model(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match graphql_query_model::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
