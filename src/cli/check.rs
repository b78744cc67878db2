use clap::Parser;

use crate::{cli::StationArgs, prelude::*, sensor::Device};

#[derive(Parser)]
pub struct CheckArgs {
    #[clap(flatten)]
    station: StationArgs,
}

impl CheckArgs {
    pub async fn run(self) -> Result {
        let api = self.station.new_client()?;
        ensure!(api.check_connection().await, "cannot connect to station `{}`", api.station_id());
        let device = Device::new(api.station_id());
        info!(name = %device.name, manufacturer = device.manufacturer, "the station is reachable");
        Ok(())
    }
}
