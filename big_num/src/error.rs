use thiserror::Error;

/// Every way an engine operation can fail.
///
/// Malformed input and impossible arithmetic are reported here; the engine
/// never answers them with a silently approximated value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumError {
    #[error("invalid number \"{input}\": {reason}")]
    Parse { input: String, reason: &'static str },

    #[error("division by zero")]
    DivisionByZero,

    #[error("rounding necessary: value is not representable at scale {scale}")]
    Inexact { scale: i32 },

    #[error("overflow: value does not fit in {target}")]
    Overflow { target: &'static str },

    #[error("{operation} is undefined for a negative operand")]
    NegativeOperand { operation: &'static str },

    #[error("unknown rounding mode code: {0}")]
    InvalidRoundingMode(i32),
}

impl NumError {
    pub(crate) fn parse(input: &str, reason: &'static str) -> Self {
        log::debug!("rejecting numeric input {:?}: {}", input, reason);
        NumError::Parse { input: input.to_owned(), reason }
    }
}

pub type Result<T> = std::result::Result<T, NumError>;
