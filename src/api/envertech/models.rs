use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::{
    prelude::*,
    quantity::{energy::WattHours, power::Watts},
    units::{Dimension, REGISTRY, WATT},
};

/// Station summary as reported by `GetStationInfo`.
///
/// Energies arrive as `"<value> <unit>"` strings, the current power as plain watts.
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct StationInfo {
    #[serde(rename = "StationName")]
    pub station_name: Option<String>,

    #[serde(rename = "InvTotal")]
    pub n_inverters: Option<u32>,

    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(rename = "Power")]
    pub power_watts: f64,

    /// Human-readable power, for example `"500.50 W"`.
    #[serde(rename = "PowerStr")]
    pub power_text: Option<String>,

    /// Installed peak power, for example `"2.40 kW"`.
    #[serde(rename = "UnitCapacity")]
    pub capacity: Option<String>,

    #[serde(rename = "UnitEToday")]
    pub today_energy: String,

    #[serde(rename = "UnitEMonth")]
    pub month_energy: Option<String>,

    #[serde(rename = "UnitEYear")]
    pub year_energy: Option<String>,

    #[serde(rename = "UnitETotal")]
    pub total_energy: String,

    /// UTC offset of the station, for example `"+01:00"`.
    #[serde(rename = "TimeZone")]
    pub time_zone: Option<String>,
}

/// Readings normalised into base units.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StationData {
    pub current_power: Watts,
    pub today_energy: WattHours,
    pub lifetime_energy: WattHours,
    pub last_updated: DateTime<Local>,
}

impl StationData {
    /// Any unparseable reading fails the whole conversion.
    pub fn try_from_info(info: &StationInfo, last_updated: DateTime<Local>) -> Result<Self> {
        Ok(Self {
            current_power: Dimension::new(info.power_watts, WATT).try_into()?,
            today_energy: REGISTRY
                .parse(&info.today_energy)
                .context("failed to parse today's energy")?
                .try_into()?,
            lifetime_energy: REGISTRY
                .parse(&info.total_energy)
                .context("failed to parse the lifetime energy")?
                .try_into()?,
            last_updated,
        })
    }
}
