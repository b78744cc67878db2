mod models;
mod response;

use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use reqwest::{Client, Url};
use serde::{Serialize, de::DeserializeOwned};

pub use self::models::{StationData, StationInfo};
use self::response::Response;
use crate::{coordinator::Fetch, prelude::*};

pub const DEFAULT_BASE_URL: &str = "https://www.envertecportal.com/ApiStations";

/// Envertech portal client bound to a single station.
pub struct Api {
    client: Client,
    base_url: Url,
    station_id: String,
}

impl Api {
    pub fn new(station_id: String, base_url: Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, base_url, station_id })
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    #[instrument(skip_all, fields(station_id = %self.station_id))]
    pub async fn get_station_info(&self) -> Result<StationInfo> {
        #[derive(Serialize)]
        struct GetStationInfoRequest<'a> {
            #[serde(rename = "stationId")]
            station_id: &'a str,
        }

        debug!("fetching…");
        self.post("GetStationInfo", &GetStationInfoRequest { station_id: &self.station_id })
            .await
            .context("failed to get the station info")
    }

    /// Fetch the station info and normalise the readings into watts and watt-hours.
    pub async fn get_data(&self) -> Result<StationData> {
        let station_info = self.get_station_info().await?;
        let data = StationData::try_from_info(&station_info, Local::now())?;
        info!(
            station_id = %self.station_id,
            current_power = %data.current_power,
            today_energy = %data.today_energy,
            lifetime_energy = %data.lifetime_energy,
            "fetched"
        );
        Ok(data)
    }

    /// Check that the station is reachable, logging the failure if it is not.
    #[instrument(skip_all, fields(station_id = %self.station_id))]
    pub async fn check_connection(&self) -> bool {
        match self.get_station_info().await {
            Ok(station_info) => {
                info!(
                    station_name = station_info.station_name.as_deref().unwrap_or_default(),
                    n_inverters = station_info.n_inverters.unwrap_or_default(),
                    "connection succeeded"
                );
                true
            }
            Err(error) => {
                error!("connection test failed: {error:#}");
                false
            }
        }
    }

    #[instrument(skip_all, level = Level::DEBUG, fields(endpoint = endpoint))]
    async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("failed to call `{endpoint}`"))?
            .error_for_status()
            .with_context(|| format!("`{endpoint}` failed"))?
            .json::<Response<R>>()
            .await
            .with_context(|| format!("failed to deserialize `{endpoint}` response"))?
            .into()
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("invalid base URL: `{}`", self.base_url))?
            .pop_if_empty()
            .push(endpoint);
        Ok(url)
    }
}

#[async_trait]
impl Fetch for Api {
    type Output = StationData;

    async fn fetch(&self) -> Result<StationData> {
        self.get_data().await
    }
}
