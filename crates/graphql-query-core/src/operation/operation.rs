use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::operation::Query;
use crate::selection::Fragment;
use crate::templates;
use crate::Render;
use crate::Result;
use crate::Variable;
use inherent::inherent;

/// A complete GraphQL
/// [operation](https://graphql.org/learn/queries/#operation-name) followed
/// by the definitions of the fragments it uses.
///
/// ```
/// use graphql_query_core::Operation;
/// use graphql_query_core::OperationKind;
/// use graphql_query_core::Query;
///
/// let operation = Operation::builder(OperationKind::Query)
///     .add_query(Query::builder("hero").add_field("name").build().unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     operation.render().unwrap(),
///     "query {\n  hero {\n    name\n  }\n}",
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(super) fragments: Vec<Fragment>,
    pub(super) kind: OperationKind,
    pub(super) name: Option<String>,
    pub(super) queries: Vec<Query>,
    pub(super) variables: Vec<Variable>,
}
impl Operation {
    pub fn builder(kind: OperationKind) -> OperationBuilder {
        OperationBuilder::new(kind)
    }

    /// Access the [`Fragment`] definitions rendered after this [`Operation`].
    pub fn fragments(&self) -> &[Fragment] {
        self.fragments.as_slice()
    }

    /// Access the [`OperationKind`] of this [`Operation`].
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Access the name of this [`Operation`] (if one was specified).
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Access the [`Query`]s selected by this [`Operation`].
    pub fn queries(&self) -> &[Query] {
        self.queries.as_slice()
    }

    /// Access the [`Variable`]s declared on this [`Operation`].
    pub fn variables(&self) -> &[Variable] {
        self.variables.as_slice()
    }
}

#[inherent]
impl Render for Operation {
    pub fn render(&self) -> Result<String> {
        log::trace!(
            "Rendering {} operation `{}` ({} queries, {} fragments).",
            self.kind,
            self.name.as_deref().unwrap_or("<anonymous>"),
            self.queries.len(),
            self.fragments.len(),
        );

        let variables = self.variables.iter()
            .map(Variable::render)
            .collect::<Result<Vec<_>>>()?;
        let queries = self.queries.iter()
            .map(Query::render)
            .collect::<Result<Vec<_>>>()?;
        let fragments = self.fragments.iter()
            .map(Fragment::render)
            .collect::<Result<Vec<_>>>()?;

        Ok(templates::operation(
            self.kind.as_str(),
            self.name.as_deref(),
            &variables,
            &queries,
            &fragments,
        ))
    }
}
