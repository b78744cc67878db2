use clap::Parser;
use reqwest::Url;

use crate::{
    api::envertech::{self, DEFAULT_BASE_URL},
    prelude::*,
};

#[derive(Parser)]
pub struct StationArgs {
    /// Station ID as shown in the Envertech portal.
    #[clap(long = "station-id", env = "ENVERTECH_STATION_ID")]
    pub station_id: String,

    /// Envertech portal API base URL.
    #[clap(long = "base-url", env = "ENVERTECH_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,
}

impl StationArgs {
    pub fn new_client(&self) -> Result<envertech::Api> {
        envertech::Api::new(self.station_id.clone(), self.base_url.clone())
    }
}
