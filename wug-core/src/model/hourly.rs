use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EnglishMetric, ResponseMeta, WindDirection, de, epoch_to_utc};

/// `hourly` response: hour-by-hour forecast for the next day and a half.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hourly {
    pub response: ResponseMeta,
    pub hourly_forecast: Vec<HourlyPeriod>,
}

/// `hourly10day` response. Same shape as [`Hourly`], covering ten days.
pub type HourlyTenDay = Hourly;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyPeriod {
    #[serde(rename = "FCTTIME")]
    pub fcttime: FctTime,
    pub temp: EnglishMetric,
    pub dewpoint: EnglishMetric,
    pub condition: String,
    pub icon: String,
    pub icon_url: String,
    #[serde(deserialize_with = "de::string")]
    pub fctcode: String,
    #[serde(deserialize_with = "de::string")]
    pub sky: String,
    pub wspd: EnglishMetric,
    pub wdir: WindDirection,
    pub wx: String,
    #[serde(deserialize_with = "de::string")]
    pub uvi: String,
    #[serde(deserialize_with = "de::string")]
    pub humidity: String,
    pub windchill: EnglishMetric,
    pub heatindex: EnglishMetric,
    pub feelslike: EnglishMetric,
    pub qpf: EnglishMetric,
    pub snow: EnglishMetric,
    #[serde(deserialize_with = "de::string")]
    pub pop: String,
    pub mslp: EnglishMetric,
}

/// Forecast time of an hourly period. Every part arrives as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FctTime {
    #[serde(deserialize_with = "de::string")]
    pub hour: String,
    pub hour_padded: String,
    #[serde(deserialize_with = "de::string")]
    pub min: String,
    pub min_unpadded: String,
    #[serde(deserialize_with = "de::string")]
    pub sec: String,
    #[serde(deserialize_with = "de::string")]
    pub year: String,
    #[serde(deserialize_with = "de::string")]
    pub mon: String,
    pub mon_padded: String,
    pub mon_abbrev: String,
    #[serde(deserialize_with = "de::string")]
    pub mday: String,
    pub mday_padded: String,
    #[serde(deserialize_with = "de::string")]
    pub yday: String,
    #[serde(deserialize_with = "de::string")]
    pub isdst: String,
    #[serde(deserialize_with = "de::string")]
    pub epoch: String,
    pub pretty: String,
    pub civil: String,
    pub month_name: String,
    pub month_name_abbrev: String,
    pub weekday_name: String,
    pub weekday_name_night: String,
    pub weekday_name_abbrev: String,
    pub weekday_name_unlang: String,
    pub weekday_name_night_unlang: String,
    pub ampm: String,
    pub tz: String,
    pub age: String,
    #[serde(rename = "UTCDATE")]
    pub utc_date: String,
}

impl FctTime {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(&self.epoch)
    }
}
