use crate::{
    prelude::*,
    units::{Dimension, PhysicalQuantity},
};

quantity!(WattHours, f64, "Wh");

impl TryFrom<Dimension> for WattHours {
    type Error = Error;

    fn try_from(dimension: Dimension) -> Result<Self> {
        ensure!(
            dimension.unit.quantity == PhysicalQuantity::Energy,
            "`{dimension}` is not an energy",
        );
        Ok(Self(dimension.to_base_value()))
    }
}
