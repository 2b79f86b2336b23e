use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown feature field '{0}'")]
pub struct UnknownFieldError(pub String);
