use cc_core::HandlerId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("{0} was released but is not in use")]
    UnknownHandler(HandlerId),

    #[error("pool invariant violated: {0}")]
    Invariant(String),
}

pub type PoolResult<T> = Result<T, PoolError>;
