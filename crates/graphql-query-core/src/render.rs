use crate::Result;

/// Implemented by every node that can be turned into GraphQL document text.
///
/// Rendering is a pure function of the node: rendering the same node twice
/// always produces identical text.
pub trait Render {
    fn render(&self) -> Result<String>;
}

/// Indent every line after the first of an already-rendered block by one
/// level (two spaces) so it can be nested inside an enclosing block.
///
/// The first line is left alone because the enclosing template places it
/// after its own indentation.
pub fn line_shift(text: &str) -> String {
    text.split('\n').collect::<Vec<_>>().join("\n  ")
}
