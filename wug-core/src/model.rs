//! Response records.
//!
//! The records mirror the provider's JSON field-for-field. Every struct is
//! `#[serde(default)]`: a field missing from the response keeps its default
//! value instead of failing the decode.

use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod conditions;
mod de;
pub mod forecast;
pub mod hourly;

pub use conditions::{
    Conditions, DisplayLocation, Observation, ObservationImage, ObservationLocation,
};
pub use forecast::{
    Forecast, ForecastData, ForecastDay, ForecastTenDay, SimpleForecast, TxtForecast,
    TxtForecastDay,
};
pub use hourly::{FctTime, Hourly, HourlyPeriod, HourlyTenDay};

/// The `response` header present in every payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseMeta {
    #[serde(deserialize_with = "de::string")]
    pub version: String,
    #[serde(rename = "termsofService")]
    pub terms_of_service: String,
    /// Features served, e.g. `{"conditions": 1}`.
    pub features: BTreeMap<String, i64>,
    /// Set when the API rejected the request while still answering 200.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// Candidate locations when a query was ambiguous.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<LocationMatch>,
}

impl ResponseMeta {
    pub fn api_error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationMatch {
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub country_iso3166: String,
    pub country_name: String,
    pub zmw: String,
    /// Query path for this match, e.g. `/q/zmw:94101.1.99999`.
    pub l: String,
}

/// Calendar breakdown of a forecast day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateParts {
    #[serde(deserialize_with = "de::string")]
    pub epoch: String,
    pub pretty: String,
    pub day: i64,
    pub month: i64,
    pub year: i64,
    pub yday: i64,
    pub hour: i64,
    #[serde(deserialize_with = "de::string")]
    pub min: String,
    pub sec: i64,
    #[serde(deserialize_with = "de::string")]
    pub isdst: String,
    pub monthname: String,
    pub monthname_short: String,
    pub weekday_short: String,
    pub weekday: String,
    pub ampm: String,
    pub tz_short: String,
    pub tz_long: String,
}

impl DateParts {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(&self.epoch)
    }
}

/// High or low temperature, as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TempPair {
    #[serde(deserialize_with = "de::string")]
    pub fahrenheit: String,
    #[serde(deserialize_with = "de::string")]
    pub celsius: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wind {
    #[serde(deserialize_with = "de::or_default")]
    pub mph: i64,
    #[serde(deserialize_with = "de::or_default")]
    pub kph: i64,
    pub dir: String,
    #[serde(deserialize_with = "de::or_default")]
    pub degrees: i64,
}

/// Liquid precipitation amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Precip {
    #[serde(rename = "in", deserialize_with = "de::number")]
    pub inches: f64,
    #[serde(deserialize_with = "de::or_default")]
    pub mm: i64,
}

/// Snowfall amount.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snow {
    #[serde(rename = "in", deserialize_with = "de::number")]
    pub inches: f64,
    #[serde(deserialize_with = "de::number")]
    pub cm: f64,
}

/// A measure given in both unit systems, as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnglishMetric {
    #[serde(deserialize_with = "de::string")]
    pub english: String,
    #[serde(deserialize_with = "de::string")]
    pub metric: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindDirection {
    pub dir: String,
    #[serde(deserialize_with = "de::string")]
    pub degrees: String,
}

fn epoch_to_utc(epoch: &str) -> Option<DateTime<Utc>> {
    let ts = epoch.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp(ts, 0)
}
