use std::borrow::Cow;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::{
    api::envertech::StationData,
    coordinator::{Coordinator, Fetch},
    units::{Unit, WATT, WATT_HOUR},
};

pub const DOMAIN: &str = "pv_microinverter";
pub const MANUFACTURER: &str = "Envertech";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    #[display("power")]
    Power,

    #[display("energy")]
    Energy,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum StateClass {
    /// Instantaneous reading.
    #[display("measurement")]
    Measurement,

    /// Monotonically increasing total, which may reset to zero (for example, at midnight).
    #[display("total_increasing")]
    TotalIncreasing,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    #[display("Current Power")]
    CurrentPower,

    #[display("Today's Energy")]
    TodayEnergy,

    #[display("Lifetime Energy")]
    LifetimeEnergy,
}

impl SensorKind {
    pub const ALL: [Self; 3] = [Self::CurrentPower, Self::TodayEnergy, Self::LifetimeEnergy];

    pub const fn key(self) -> &'static str {
        match self {
            Self::CurrentPower => "current_power",
            Self::TodayEnergy => "today_energy",
            Self::LifetimeEnergy => "lifetime_energy",
        }
    }

    /// Shared by all the station sensors.
    pub const ICON: &'static str = "mdi:solar-power";

    pub const fn device_class(self) -> DeviceClass {
        match self {
            Self::CurrentPower => DeviceClass::Power,
            Self::TodayEnergy | Self::LifetimeEnergy => DeviceClass::Energy,
        }
    }

    pub const fn state_class(self) -> StateClass {
        match self {
            Self::CurrentPower => StateClass::Measurement,
            Self::TodayEnergy | Self::LifetimeEnergy => StateClass::TotalIncreasing,
        }
    }

    /// Readings are normalised into base units, so are the sensors.
    pub const fn native_unit(self) -> Unit {
        match self.device_class() {
            DeviceClass::Power => WATT,
            DeviceClass::Energy => WATT_HOUR,
        }
    }

    pub const fn value(self, data: &StationData) -> f64 {
        match self {
            Self::CurrentPower => data.current_power.0,
            Self::TodayEnergy => data.today_energy.0,
            Self::LifetimeEnergy => data.lifetime_energy.0,
        }
    }
}

/// The station as a device all its sensors belong to.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Device {
    pub identifiers: (&'static str, String),
    pub name: String,
    pub manufacturer: &'static str,
    pub model: &'static str,
}

impl Device {
    pub fn new(station_id: &str) -> Self {
        Self {
            identifiers: (DOMAIN, station_id.to_owned()),
            name: format!("PV Microinverter {station_id}"),
            manufacturer: MANUFACTURER,
            model: "Microinverter",
        }
    }
}

#[must_use]
#[derive(Clone, Debug)]
pub struct Sensor {
    station_id: String,
    kind: SensorKind,
}

impl Sensor {
    pub fn new(station_id: &str, kind: SensorKind) -> Self {
        Self { station_id: station_id.to_owned(), kind }
    }

    /// All the sensors of the station.
    pub fn all(station_id: &str) -> impl Iterator<Item = Self> {
        SensorKind::ALL.into_iter().map(move |kind| Self::new(station_id, kind))
    }

    pub const fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn unique_id(&self) -> String {
        format!("{}_{}", self.station_id, self.kind.key())
    }

    pub fn state<F>(&self, coordinator: &Coordinator<F>) -> SensorState
    where
        F: Fetch<Output = StationData>,
    {
        let data = coordinator.data();
        SensorState {
            unique_id: self.unique_id(),
            kind: self.kind,
            name: self.kind.to_string(),
            icon: SensorKind::ICON,
            device_class: self.kind.device_class(),
            state_class: self.kind.state_class(),
            unit_of_measurement: self.kind.native_unit().symbol,
            value: data.map(|data| self.kind.value(data)),
            available: coordinator.last_update_success(),
            last_updated: data.map(|data| data.last_updated),
        }
    }
}

/// Snapshot of a sensor as exposed to the outside world.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SensorState {
    pub unique_id: String,

    #[serde(skip)]
    pub kind: SensorKind,

    pub name: String,
    pub icon: &'static str,
    pub device_class: DeviceClass,
    pub state_class: StateClass,
    pub unit_of_measurement: Cow<'static, str>,

    /// `None` until the first successful refresh.
    pub value: Option<f64>,

    /// Whether the last refresh succeeded. The value is stale otherwise.
    pub available: bool,

    pub last_updated: Option<DateTime<Local>>,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use approx::assert_relative_eq;
    use async_trait::async_trait;

    use super::*;
    use crate::{
        prelude::*,
        quantity::{energy::WattHours, power::Watts},
    };

    struct Station(Option<StationData>);

    #[async_trait]
    impl Fetch for Station {
        type Output = StationData;

        async fn fetch(&self) -> Result<StationData> {
            self.0.clone().context("station is offline")
        }
    }

    fn coordinator(data: Option<StationData>) -> Coordinator<Station> {
        Coordinator::builder().fetcher(Station(data)).interval(Duration::from_secs(60)).build()
    }

    fn station_data() -> StationData {
        StationData {
            current_power: Watts(500.5),
            today_energy: WattHours(3750.0),
            lifetime_energy: WattHours(1_250_000.0),
            last_updated: Local::now(),
        }
    }

    #[test]
    fn unique_ids_ok() {
        let ids: Vec<_> = Sensor::all("42").map(|sensor| sensor.unique_id()).collect();
        assert_eq!(ids, ["42_current_power", "42_today_energy", "42_lifetime_energy"]);
    }

    #[test]
    fn descriptions_ok() {
        assert_eq!(SensorKind::CurrentPower.to_string(), "Current Power");
        assert_eq!(SensorKind::CurrentPower.device_class(), DeviceClass::Power);
        assert_eq!(SensorKind::CurrentPower.state_class(), StateClass::Measurement);
        assert_eq!(SensorKind::CurrentPower.native_unit().symbol, "W");
        assert_eq!(SensorKind::TodayEnergy.to_string(), "Today's Energy");
        assert_eq!(SensorKind::LifetimeEnergy.state_class().to_string(), "total_increasing");
        assert_eq!(SensorKind::LifetimeEnergy.native_unit().symbol, "Wh");
    }

    #[test]
    fn device_ok() {
        let device = Device::new("42");
        assert_eq!(device.identifiers, (DOMAIN, "42".to_owned()));
        assert_eq!(device.name, "PV Microinverter 42");
        assert_eq!(device.manufacturer, "Envertech");
    }

    #[test]
    fn state_without_data() {
        let state = Sensor::new("42", SensorKind::TodayEnergy).state(&coordinator(None));
        assert_eq!(state.value, None);
        assert_eq!(state.last_updated, None);
    }

    #[tokio::test]
    async fn state_after_refresh() -> Result {
        let data = station_data();
        let mut coordinator = coordinator(Some(data.clone()));
        coordinator.first_refresh().await?;

        let state = Sensor::new("42", SensorKind::LifetimeEnergy).state(&coordinator);
        assert!(state.available);
        assert_relative_eq!(state.value.unwrap(), 1_250_000.0);
        assert_eq!(state.last_updated, Some(data.last_updated));
        Ok(())
    }

    #[tokio::test]
    async fn state_unavailable_after_failure() {
        let mut coordinator = coordinator(None);
        assert!(coordinator.refresh().await.is_err());
        let state = Sensor::new("42", SensorKind::CurrentPower).state(&coordinator);
        assert!(!state.available);
        assert_eq!(state.value, None);
    }

    #[tokio::test]
    async fn state_serializes() -> Result {
        let mut coordinator = coordinator(Some(station_data()));
        coordinator.first_refresh().await?;
        let state = Sensor::new("42", SensorKind::CurrentPower).state(&coordinator);
        let json = serde_json::to_value(&state)?;
        assert_eq!(json["unique_id"], "42_current_power");
        assert_eq!(json["device_class"], "power");
        assert_eq!(json["state_class"], "measurement");
        assert_eq!(json["unit_of_measurement"], "W");
        assert_eq!(json["value"], 500.5);
        assert_eq!(json["icon"], "mdi:solar-power");
        assert!(json.get("kind").is_none());
        Ok(())
    }
}
