use std::{fmt, str::FromStr};

use crate::error::UnknownCategory;

/// Data product requested for a [`Query`](crate::Query).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestCategory {
    Conditions,
    Forecast,
    ForecastTenDay,
    Hourly,
    HourlyTenDay,
}

impl RequestCategory {
    /// URL path segment the API uses for this category.
    pub const fn as_segment(&self) -> &'static str {
        match self {
            RequestCategory::Conditions => "conditions",
            RequestCategory::Forecast => "forecast",
            RequestCategory::ForecastTenDay => "forecast10day",
            RequestCategory::Hourly => "hourly",
            RequestCategory::HourlyTenDay => "hourly10day",
        }
    }

    pub const fn all() -> &'static [RequestCategory] {
        &[
            RequestCategory::Conditions,
            RequestCategory::Forecast,
            RequestCategory::ForecastTenDay,
            RequestCategory::Hourly,
            RequestCategory::HourlyTenDay,
        ]
    }
}

impl fmt::Display for RequestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_segment())
    }
}

impl FromStr for RequestCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.to_lowercase();

        RequestCategory::all()
            .iter()
            .copied()
            .find(|c| c.as_segment() == lower)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}
