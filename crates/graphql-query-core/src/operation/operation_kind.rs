use crate::GraphQLQueryError;
use std::str::FromStr;

/// The keyword an [`Operation`](crate::Operation) is rendered with.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    #[default]
    Query,
    Subscription,
}
impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}
impl FromStr for OperationKind {
    type Err = GraphQLQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mutation" => Ok(Self::Mutation),
            "query" => Ok(Self::Query),
            "subscription" => Ok(Self::Subscription),
            other => Err(GraphQLQueryError::UnsupportedOperationType(
                other.to_string(),
            )),
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
