/// The kinds of node that make up a renderable GraphQL document.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Argument,
    Directive,
    Field,
    Fragment,
    InlineFragment,
    Operation,
    Query,
    Variable,
}
impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Argument => "argument",
            Self::Directive => "directive",
            Self::Field => "field",
            Self::Fragment => "fragment",
            Self::InlineFragment => "inline fragment",
            Self::Operation => "operation",
            Self::Query => "query",
            Self::Variable => "variable",
        }
    }
}
impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
