use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,
    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("invalid number '{text}' at {pos}")]
    InvalidNumber { text: String, pos: usize },
    #[error("unexpected '{found}' at {pos}")]
    UnexpectedToken { found: String, pos: usize },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unknown name '{name}' at {pos}")]
    UnknownIdent { name: String, pos: usize },
    #[error("unknown function '{name}' at {pos}")]
    UnknownFunction { name: String, pos: usize },
    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },
    #[error("expression is longer than {limit} tokens")]
    TooLong { limit: usize },
    #[error("{name}() takes {expected} argument(s), got {found}")]
    Arity {
        name: &'static str,
        expected: usize,
        found: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("{0}() argument out of domain")]
    Domain(&'static str),
    #[error("result is not a finite number")]
    NonFinite,
}
