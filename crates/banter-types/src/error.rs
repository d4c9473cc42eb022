use thiserror::Error;

/// Errors raised while constructing the content store.
///
/// All of these are configuration bugs in the compiled-in tables, caught
/// once at startup. None of them can occur per input line.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("duplicate response key '{0}'")]
    DuplicateKey(String),

    #[error("key '{0}' is not normalized (must be trimmed and lower-case)")]
    UnnormalizedKey(String),

    #[error("alias '{alias}' points at missing canonical phrase '{target}'")]
    AliasTargetMissing { alias: String, target: String },

    #[error("{0} list must not be empty")]
    EmptyList(&'static str),
}

/// Errors produced while evaluating one calculator expression.
///
/// These are user-facing and recoverable: the calculator reports them
/// inline and stays active.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("expected <number> <operator> <number>")]
    Parse,

    #[error("unknown operator '{0}'")]
    UnknownOperator(char),

    #[error("division by zero")]
    DivisionByZero,
}
