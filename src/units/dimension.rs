use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::Serialize;

use crate::units::{REGISTRY, Registry, Unit, UnitError};

/// Raw magnitude paired with the unit it is expressed in.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dimension {
    pub value: f64,
    pub unit: Unit,
}

impl Dimension {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Magnitude converted into the base unit, for example watts for `3.5 kW`.
    #[must_use]
    pub fn to_base_value(&self) -> f64 {
        self.value * self.unit.factor
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol)
    }
}

impl FromStr for Dimension {
    type Err = UnitError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        REGISTRY.parse(text)
    }
}

impl Registry {
    /// Parse `"<value> <unit>"`, for example `"3.5 kW"`.
    ///
    /// The value and the unit must be separated by whitespace: `"3.5kW"` is rejected.
    pub fn parse(&self, text: &str) -> Result<Dimension, UnitError> {
        let mut tokens = text.split_whitespace();
        let (Some(value), Some(symbol), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(UnitError::InvalidFormat(text.to_owned()));
        };
        let value = value
            .parse::<f64>()
            .map_err(|source| UnitError::NumericParse { value: value.to_owned(), source })?;
        Ok(Dimension::new(value, self.resolve(symbol)?))
    }
}
