use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
};

use serde::Serialize;

use crate::units::Prefix;

/// Physical quantity measured by a unit.
///
/// Informational only: nothing prevents combining a power with an energy.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, derive_more::Display)]
pub enum PhysicalQuantity {
    Power,
    Energy,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Unit {
    /// Human-readable label, for example `Watt` or `kWatt`.
    pub name: Cow<'static, str>,

    pub quantity: PhysicalQuantity,

    /// Canonical symbol including the prefix, for example `kW`.
    pub symbol: Cow<'static, str>,

    /// Multiplier converting a value in this unit into the base unit.
    pub factor: f64,
}

impl Unit {
    pub const fn base(name: &'static str, quantity: PhysicalQuantity, symbol: &'static str) -> Self {
        Self { name: Cow::Borrowed(name), quantity, symbol: Cow::Borrowed(symbol), factor: 1.0 }
    }

    /// Derive the prefixed unit: `k` applied to `W` gives `kW` with the factor of 1000.
    pub fn with_prefix(&self, prefix: &Prefix) -> Self {
        Self {
            name: Cow::Owned(format!("{}{}", prefix.symbol, self.name)),
            quantity: self.quantity,
            symbol: Cow::Owned(format!("{}{}", prefix.symbol, self.symbol)),
            factor: prefix.multiplier * self.factor,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

pub const WATT: Unit = Unit::base("Watt", PhysicalQuantity::Power, "W");
pub const WATT_HOUR: Unit = Unit::base("Watt-hour", PhysicalQuantity::Energy, "Wh");

pub const BASE_UNITS: [Unit; 2] = [WATT, WATT_HOUR];
