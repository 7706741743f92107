use reqwest::{Client, Url};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use crate::config::AmapConfig;

const GEOCODE_PATH: &str = "/v3/geocode/geo";
const DISTRICT_PATH: &str = "/v3/config/district";
const WEATHER_PATH: &str = "/v3/weather/weatherInfo";
const DRIVING_PATH: &str = "/v5/direction/driving";

#[derive(Debug, Error)]
#[error("amap request failed: {reason}")]
pub struct FetchError {
    reason: String,
}

#[derive(Debug, Deserialize)]
pub struct WeatherResponse {
    pub status: String,
    pub info: String,
    pub infocode: String,
    #[serde(default)]
    pub forecasts: Vec<Forecast>,
}

#[derive(Debug, Deserialize)]
pub struct Forecast {
    pub province: String,
    pub city: String,
    pub adcode: String,
    pub reporttime: String,
    #[serde(default)]
    pub casts: Vec<Cast>,
}

#[derive(Debug, Deserialize)]
pub struct Cast {
    pub date: String,
    pub week: String,
    pub dayweather: String,
    pub nightweather: String,
    pub daytemp: String,
    pub nighttemp: String,
    pub daywind: String,
    pub nightwind: String,
    pub daypower: String,
    pub nightpower: String,
}

#[derive(Debug, Deserialize)]
pub struct DrivingResponse {
    pub status: String,
    pub info: String,
    pub infocode: String,
    pub route: Option<DrivingRoute>,
}

#[derive(Debug, Deserialize)]
pub struct DrivingRoute {
    #[serde(default)]
    pub taxi_cost: String,
    #[serde(default)]
    pub paths: Vec<DrivingPath>,
}

#[derive(Debug, Deserialize)]
pub struct DrivingPath {
    pub distance: String,
    #[serde(default)]
    pub steps: Vec<DrivingStep>,
}

#[derive(Debug, Deserialize)]
pub struct DrivingStep {
    pub instruction: String,
    pub road_name: Option<String>,
    pub step_distance: String,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    pub info: String,
    pub infocode: String,
    #[serde(default)]
    pub geocodes: Vec<Geocode>,
}

#[derive(Debug, Deserialize)]
pub struct Geocode {
    pub formatted_address: String,
    pub adcode: String,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct DistrictResponse {
    pub status: String,
    pub info: String,
    pub infocode: String,
    #[serde(default)]
    pub districts: Vec<District>,
}

#[derive(Debug, Deserialize)]
pub struct District {
    pub name: String,
    pub adcode: String,
}

#[derive(Debug, Clone)]
pub struct AmapClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl AmapClient {
    pub fn new(config: &AmapConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub async fn geocode(&self, address: &str) -> Result<GeocodeResponse, FetchError> {
        self.get_json(GEOCODE_PATH, &[("address", address)]).await
    }

    pub async fn district(&self, keyword: &str) -> Result<DistrictResponse, FetchError> {
        self.get_json(DISTRICT_PATH, &[("keywords", keyword), ("subdistrict", "0")])
            .await
    }

    pub async fn weather_forecast(&self, adcode: &str) -> Result<WeatherResponse, FetchError> {
        self.get_json(WEATHER_PATH, &[("city", adcode), ("extensions", "all")])
            .await
    }

    pub async fn driving_route(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DrivingResponse, FetchError> {
        self.get_json(
            DRIVING_PATH,
            &[
                ("origin", origin),
                ("destination", destination),
                ("strategy", "0"),
            ],
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| fetch_error(format!("invalid url for {}: {}", path, err)))?;

        let response = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|err| fetch_error(format!("request to {} failed: {}", path, err)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| fetch_error(format!("failed to read {} body: {}", path, err)))?;

        if !status.is_success() {
            return Err(fetch_error(format!(
                "{} returned status {}",
                path, status
            )));
        }

        serde_json::from_str(&body)
            .map_err(|err| fetch_error(format!("failed to parse {} response: {}", path, err)))
    }
}

// The cause is only useful operationally, so it is logged here and the
// caller sees one opaque failure.
fn fetch_error(reason: String) -> FetchError {
    eprintln!("AMap request failed: {}", reason);
    FetchError { reason }
}
