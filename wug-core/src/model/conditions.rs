use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ResponseMeta, de, epoch_to_utc};

/// `conditions` response: the latest observation near the queried location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conditions {
    pub response: ResponseMeta,
    pub current_observation: Observation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationImage {
    pub url: String,
    pub title: String,
    pub link: String,
}

/// The place the query resolved to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayLocation {
    pub full: String,
    pub city: String,
    pub state: String,
    pub state_name: String,
    pub country: String,
    pub country_iso3166: String,
    pub zip: String,
    #[serde(deserialize_with = "de::string")]
    pub magic: String,
    #[serde(deserialize_with = "de::string")]
    pub wmo: String,
    #[serde(deserialize_with = "de::string")]
    pub latitude: String,
    #[serde(deserialize_with = "de::string")]
    pub longitude: String,
    #[serde(deserialize_with = "de::string")]
    pub elevation: String,
}

/// The station that reported the observation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationLocation {
    pub full: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub country_iso3166: String,
    #[serde(deserialize_with = "de::string")]
    pub latitude: String,
    #[serde(deserialize_with = "de::string")]
    pub longitude: String,
    #[serde(deserialize_with = "de::string")]
    pub elevation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Observation {
    pub image: ObservationImage,
    pub display_location: DisplayLocation,
    pub observation_location: ObservationLocation,
    pub estimated: serde_json::Map<String, serde_json::Value>,
    pub station_id: String,
    pub observation_time: String,
    pub observation_time_rfc822: String,
    #[serde(deserialize_with = "de::string")]
    pub observation_epoch: String,
    pub local_time_rfc822: String,
    #[serde(deserialize_with = "de::string")]
    pub local_epoch: String,
    pub local_tz_short: String,
    pub local_tz_long: String,
    pub local_tz_offset: String,
    pub weather: String,
    pub temperature_string: String,
    #[serde(deserialize_with = "de::number")]
    pub temp_f: f64,
    #[serde(deserialize_with = "de::number")]
    pub temp_c: f64,
    pub relative_humidity: String,
    pub wind_string: String,
    pub wind_dir: String,
    #[serde(deserialize_with = "de::or_default")]
    pub wind_degrees: i64,
    #[serde(deserialize_with = "de::number")]
    pub wind_mph: f64,
    #[serde(deserialize_with = "de::string")]
    pub wind_gust_mph: String,
    #[serde(deserialize_with = "de::number")]
    pub wind_kph: f64,
    #[serde(deserialize_with = "de::string")]
    pub wind_gust_kph: String,
    #[serde(deserialize_with = "de::string")]
    pub pressure_mb: String,
    #[serde(deserialize_with = "de::string")]
    pub pressure_in: String,
    pub pressure_trend: String,
    pub dewpoint_string: String,
    #[serde(deserialize_with = "de::number")]
    pub dewpoint_f: f64,
    #[serde(deserialize_with = "de::number")]
    pub dewpoint_c: f64,
    pub heat_index_string: String,
    #[serde(deserialize_with = "de::string")]
    pub heat_index_f: String,
    #[serde(deserialize_with = "de::string")]
    pub heat_index_c: String,
    pub windchill_string: String,
    #[serde(deserialize_with = "de::string")]
    pub windchill_f: String,
    #[serde(deserialize_with = "de::string")]
    pub windchill_c: String,
    pub feelslike_string: String,
    #[serde(deserialize_with = "de::string")]
    pub feelslike_f: String,
    #[serde(deserialize_with = "de::string")]
    pub feelslike_c: String,
    #[serde(deserialize_with = "de::string")]
    pub visibility_mi: String,
    #[serde(deserialize_with = "de::string")]
    pub visibility_km: String,
    #[serde(deserialize_with = "de::string")]
    pub solarradiation: String,
    #[serde(rename = "UV", deserialize_with = "de::string")]
    pub uv: String,
    pub precip_1hr_string: String,
    #[serde(deserialize_with = "de::string")]
    pub precip_1hr_in: String,
    #[serde(deserialize_with = "de::string")]
    pub precip_1hr_metric: String,
    pub precip_today_string: String,
    #[serde(deserialize_with = "de::string")]
    pub precip_today_in: String,
    #[serde(deserialize_with = "de::string")]
    pub precip_today_metric: String,
    pub icon: String,
    pub icon_url: String,
    pub forecast_url: String,
    pub history_url: String,
    pub ob_url: String,
    pub nowcast: String,
}

impl Observation {
    /// When the station took the reading.
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(&self.observation_epoch)
    }
}
