use crate::Argument;
use crate::Variable;

/// Every shape an [`Argument`]'s value can take.
///
/// `String` values are raw GraphQL literal text and are printed verbatim, so
/// the caller supplies any quoting: pass `"\"1000\""` for the string
/// `"1000"`, and `"FOOT"` for the enum value `FOOT`.
///
/// `Arguments` is printed as a single input object (`{ a: 1  b: 2 }`), while
/// `ArgumentLists` is printed as a list of input objects
/// (`[ { a: 1 } { a: 2 } ]`).
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentValue {
    Argument(Box<Argument>),
    ArgumentLists(Vec<Vec<Argument>>),
    Arguments(Vec<Argument>),
    Bool(bool),
    BoolList(Vec<bool>),
    Float(f64),
    FloatList(Vec<f64>),
    Int(i64),
    IntList(Vec<i64>),
    String(String),
    StringList(Vec<String>),
    Variable(Variable),
}

impl std::convert::From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl std::convert::From<String> for ArgumentValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl std::convert::From<bool> for ArgumentValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl std::convert::From<i32> for ArgumentValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}
impl std::convert::From<i64> for ArgumentValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}
impl std::convert::From<f64> for ArgumentValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl std::convert::From<Argument> for ArgumentValue {
    fn from(value: Argument) -> Self {
        Self::Argument(Box::new(value))
    }
}
impl std::convert::From<Variable> for ArgumentValue {
    fn from(value: Variable) -> Self {
        Self::Variable(value)
    }
}
impl std::convert::From<&Variable> for ArgumentValue {
    fn from(value: &Variable) -> Self {
        Self::Variable(value.to_owned())
    }
}
impl std::convert::From<Vec<&str>> for ArgumentValue {
    fn from(value: Vec<&str>) -> Self {
        Self::StringList(value.into_iter().map(str::to_string).collect())
    }
}
impl std::convert::From<Vec<String>> for ArgumentValue {
    fn from(value: Vec<String>) -> Self {
        Self::StringList(value)
    }
}
impl std::convert::From<Vec<bool>> for ArgumentValue {
    fn from(value: Vec<bool>) -> Self {
        Self::BoolList(value)
    }
}
impl std::convert::From<Vec<i32>> for ArgumentValue {
    fn from(value: Vec<i32>) -> Self {
        Self::IntList(value.into_iter().map(i64::from).collect())
    }
}
impl std::convert::From<Vec<i64>> for ArgumentValue {
    fn from(value: Vec<i64>) -> Self {
        Self::IntList(value)
    }
}
impl std::convert::From<Vec<f64>> for ArgumentValue {
    fn from(value: Vec<f64>) -> Self {
        Self::FloatList(value)
    }
}
impl std::convert::From<Vec<Argument>> for ArgumentValue {
    fn from(value: Vec<Argument>) -> Self {
        Self::Arguments(value)
    }
}
impl std::convert::From<Vec<Vec<Argument>>> for ArgumentValue {
    fn from(value: Vec<Vec<Argument>>) -> Self {
        Self::ArgumentLists(value)
    }
}
