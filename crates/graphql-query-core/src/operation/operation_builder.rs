use crate::name::validate_optional_name;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::operation::Query;
use crate::selection::Fragment;
use crate::GraphQLQueryError;
use crate::NodeKind;
use crate::Result;
use crate::Variable;

/// Assembles an [`Operation`].
///
/// Variables referenced by arguments are not cross-checked against the
/// variables declared here, and fragments spread inside the queries are not
/// cross-checked against the fragments added here. Keeping those consistent
/// is up to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationBuilder {
    fragments: Vec<Fragment>,
    kind: OperationKind,
    name: Option<String>,
    queries: Vec<Query>,
    variables: Vec<Variable>,
}
impl OperationBuilder {
    /// Add a [`Fragment`] definition after any previously added `Fragment`s.
    pub fn add_fragment(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    /// Add a [`Query`] after any previously added `Query`s.
    pub fn add_query(mut self, query: Query) -> Self {
        self.queries.push(query);
        self
    }

    /// Add a [`Variable`] after any previously added `Variable`s.
    pub fn add_variable(mut self, variable: Variable) -> Self {
        self.variables.push(variable);
        self
    }

    /// Consume this [`OperationBuilder`] to produce an [`Operation`].
    pub fn build(self) -> Result<Operation> {
        let name = validate_optional_name(NodeKind::Operation, self.name)?;
        if self.queries.is_empty() {
            log::debug!(
                "Rejected {} operation `{}` with no queries.",
                self.kind,
                name.as_deref().unwrap_or("<anonymous>"),
            );
            return Err(GraphQLQueryError::EmptyQueriesList);
        }

        Ok(Operation {
            fragments: self.fragments,
            kind: self.kind,
            name,
            queries: self.queries,
            variables: self.variables,
        })
    }

    pub fn new(kind: OperationKind) -> Self {
        Self {
            fragments: vec![],
            kind,
            name: None,
            queries: vec![],
            variables: vec![],
        }
    }

    /// Set the list of [`Fragment`] definitions.
    ///
    /// NOTE: Any previously added fragments are fully replaced.
    pub fn set_fragments(mut self, fragments: Vec<Fragment>) -> Self {
        self.fragments = fragments;
        self
    }

    pub fn set_kind(mut self, kind: OperationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the name of the [`Operation`].
    pub fn set_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Set the list of [`Query`]s.
    ///
    /// NOTE: Any previously added queries are fully replaced.
    pub fn set_queries(mut self, queries: Vec<Query>) -> Self {
        self.queries = queries;
        self
    }

    /// Set the list of [`Variable`]s.
    ///
    /// NOTE: Any previously added variables are fully replaced.
    pub fn set_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }
}
