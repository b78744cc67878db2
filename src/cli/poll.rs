use clap::Parser;

use crate::{
    api::envertech,
    cli::StationArgs,
    coordinator::Coordinator,
    prelude::*,
    sensor::Sensor,
    tables::build_sensor_table,
};

#[derive(Parser)]
pub struct PollArgs {
    #[clap(flatten)]
    station: StationArgs,

    /// How often to refresh the readings.
    #[clap(long, env = "UPDATE_INTERVAL", default_value = "60s")]
    update_interval: humantime::Duration,

    /// Also print the sensor table after every refresh.
    #[clap(long)]
    table: bool,
}

impl PollArgs {
    #[instrument(skip_all, fields(station_id = %self.station.station_id))]
    pub async fn run(self) -> Result {
        let mut coordinator = Coordinator::builder()
            .fetcher(self.station.new_client()?)
            .interval(*self.update_interval)
            .build();
        coordinator.first_refresh().await?;

        let sensors: Vec<_> = Sensor::all(coordinator.fetcher().station_id()).collect();
        let report = |coordinator: &Coordinator<envertech::Api>| {
            let states: Vec<_> = sensors.iter().map(|sensor| sensor.state(coordinator)).collect();
            for state in &states {
                info!(
                    unique_id = %state.unique_id,
                    value = ?state.value,
                    unit = %state.unit_of_measurement,
                    available = state.available,
                    "sensor"
                );
            }
            if self.table {
                println!("{}", build_sensor_table(&states));
            }
        };
        report(&coordinator);
        coordinator.run(report).await
    }
}
