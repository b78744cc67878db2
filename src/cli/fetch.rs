use clap::Parser;

use crate::{
    cli::StationArgs,
    coordinator::Coordinator,
    prelude::*,
    sensor::Sensor,
    tables::build_sensor_table,
};

#[derive(Parser)]
pub struct FetchArgs {
    #[clap(flatten)]
    station: StationArgs,

    /// Print the sensor states as JSON instead of a table.
    #[clap(long)]
    json: bool,
}

impl FetchArgs {
    pub async fn run(self) -> Result {
        let mut coordinator = Coordinator::builder().fetcher(self.station.new_client()?).build();
        coordinator.first_refresh().await?;
        let states: Vec<_> = Sensor::all(coordinator.fetcher().station_id())
            .map(|sensor| sensor.state(&coordinator))
            .collect();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&states)?);
        } else {
            println!("{}", build_sensor_table(&states));
        }
        Ok(())
    }
}
