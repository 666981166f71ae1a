use serde::{Deserialize, Serialize};

use super::{DateParts, Precip, ResponseMeta, Snow, TempPair, Wind, de};

/// `forecast` response: text and simple forecasts for the next few days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast {
    pub response: ResponseMeta,
    pub forecast: ForecastData,
}

/// `forecast10day` response. Same shape as [`Forecast`], covering ten days.
pub type ForecastTenDay = Forecast;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastData {
    pub txt_forecast: TxtForecast,
    pub simpleforecast: SimpleForecast,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxtForecast {
    pub date: String,
    pub forecastday: Vec<TxtForecastDay>,
}

/// Day or night period of the text forecast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxtForecastDay {
    pub period: i64,
    pub icon: String,
    pub icon_url: String,
    pub title: String,
    pub fcttext: String,
    pub fcttext_metric: String,
    #[serde(deserialize_with = "de::string")]
    pub pop: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleForecast {
    pub forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastDay {
    pub date: DateParts,
    pub period: i64,
    pub high: TempPair,
    pub low: TempPair,
    pub conditions: String,
    pub icon: String,
    pub icon_url: String,
    pub skyicon: String,
    #[serde(deserialize_with = "de::or_default")]
    pub pop: i64,
    pub qpf_allday: Precip,
    pub qpf_day: Precip,
    pub qpf_night: Precip,
    pub snow_allday: Snow,
    pub snow_day: Snow,
    pub snow_night: Snow,
    pub maxwind: Wind,
    pub avewind: Wind,
    #[serde(deserialize_with = "de::or_default")]
    pub avehumidity: i64,
    #[serde(deserialize_with = "de::or_default")]
    pub maxhumidity: i64,
    #[serde(deserialize_with = "de::or_default")]
    pub minhumidity: i64,
}
