//! SI units and vendor-reported dimensions.
//!
//! The vendor reports magnitudes as free-form `"<value> <unit>"` strings, for example `"3.5 kW"`.
//! [`Registry::parse`] turns such a string into a [`Dimension`], which then normalises into the
//! base unit via [`Dimension::to_base_value`].

mod dimension;
mod error;
mod prefix;
mod registry;
mod unit;

pub use self::{
    dimension::Dimension,
    error::UnitError,
    prefix::{PREFIXES, Prefix},
    registry::{REGISTRY, Registry},
    unit::{BASE_UNITS, PhysicalQuantity, Unit, WATT, WATT_HOUR},
};
