use crate::{
    prelude::*,
    units::{Dimension, PhysicalQuantity},
};

quantity!(Watts, f64, "W");

impl TryFrom<Dimension> for Watts {
    type Error = Error;

    fn try_from(dimension: Dimension) -> Result<Self> {
        ensure!(
            dimension.unit.quantity == PhysicalQuantity::Power,
            "`{dimension}` is not a power",
        );
        Ok(Self(dimension.to_base_value()))
    }
}
