use std::num::ParseFloatError;

/// Failure to turn a vendor string into a [`Dimension`](crate::units::Dimension).
///
/// None of these are retried by the parser.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum UnitError {
    #[error("invalid dimension `{0}`, expected `<value> <unit>`")]
    InvalidFormat(String),

    #[error("invalid numeric value `{value}`")]
    NumericParse {
        value: String,

        #[source]
        source: ParseFloatError,
    },

    #[error("unknown unit `{0}`")]
    UnknownUnit(String),
}
