//! Location queries.
//!
//! A [`Query`] answers "which station or place", independent of which data
//! category is fetched for it. Every query carries the API key it was built
//! with and a pre-formatted path fragment that is appended after the `q`
//! segment of the request URL.

use std::fmt;

/// Placeholder used by the path templates and by [`Query::format`].
const PLACEHOLDER: &str = "%s";

/// How a location is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryMode {
    /// Personal weather station id.
    PwsId,
    /// US state and city.
    UsStateCity,
    /// US zip code.
    UsZip,
    /// Country and city.
    CountryCity,
    /// Airport code.
    AirportCode,
    /// Latitude and longitude.
    LatLong,
    /// Geolocation of the requesting IP address.
    AutoIp,
    /// Geolocation of a given IP address.
    IpGeo,
}

impl QueryMode {
    /// Path template for this mode; `%s` slots are filled in order.
    pub const fn template(&self) -> &'static str {
        match self {
            QueryMode::PwsId => "/pws:%s.json",
            QueryMode::UsStateCity => "/%s/%s.json",
            QueryMode::UsZip => "/%s.json",
            QueryMode::CountryCity => "/%s/%s.json",
            QueryMode::AirportCode => "/%s.json",
            QueryMode::LatLong => "/%s,%s.json",
            QueryMode::AutoIp => "/autoip.json",
            QueryMode::IpGeo => "/autoip.json?geo_ip=%s",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::PwsId => "pws-id",
            QueryMode::UsStateCity => "us-state-city",
            QueryMode::UsZip => "us-zip",
            QueryMode::CountryCity => "country-city",
            QueryMode::AirportCode => "airport-code",
            QueryMode::LatLong => "lat-long",
            QueryMode::AutoIp => "auto-ip",
            QueryMode::IpGeo => "ip-geo",
        }
    }

    pub const fn all() -> &'static [QueryMode] {
        &[
            QueryMode::PwsId,
            QueryMode::UsStateCity,
            QueryMode::UsZip,
            QueryMode::CountryCity,
            QueryMode::AirportCode,
            QueryMode::LatLong,
            QueryMode::AutoIp,
            QueryMode::IpGeo,
        ]
    }

    fn fill(&self, values: &[&str]) -> String {
        let mut parts = self.template().split(PLACEHOLDER);
        let mut out = parts.next().unwrap_or_default().to_string();
        for (i, part) in parts.enumerate() {
            out.push_str(values.get(i).copied().unwrap_or_default());
            out.push_str(part);
        }
        out
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable location query.
///
/// Parameter values are embedded as given (after the per-mode normalization
/// below); nothing is validated locally, so a malformed zip code or
/// coordinate shows up as an HTTP or decode error from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    api_key: String,
    mode: QueryMode,
    path: String,
}

impl Query {
    fn new(api_key: impl Into<String>, mode: QueryMode, values: &[&str]) -> Self {
        Self {
            api_key: api_key.into(),
            mode,
            path: mode.fill(values),
        }
    }

    /// Query a personal weather station. `pws_id` is given without the
    /// leading `pws:`.
    pub fn by_pws_id(api_key: impl Into<String>, pws_id: &str) -> Self {
        Self::new(api_key, QueryMode::PwsId, &[pws_id])
    }

    /// Query a US state and city. Spaces become `_` and the state is
    /// upper-cased.
    pub fn by_us_state_city(api_key: impl Into<String>, state: &str, city: &str) -> Self {
        let state = underscored(state).to_uppercase();
        let city = underscored(city);
        Self::new(api_key, QueryMode::UsStateCity, &[&state, &city])
    }

    pub fn by_us_zip(api_key: impl Into<String>, zip: &str) -> Self {
        Self::new(api_key, QueryMode::UsZip, &[zip])
    }

    /// Query a country and city. Spaces become `_`, case is kept.
    pub fn by_country_city(api_key: impl Into<String>, country: &str, city: &str) -> Self {
        let country = underscored(country);
        let city = underscored(city);
        Self::new(api_key, QueryMode::CountryCity, &[&country, &city])
    }

    pub fn by_lat_long(api_key: impl Into<String>, latitude: &str, longitude: &str) -> Self {
        Self::new(api_key, QueryMode::LatLong, &[latitude, longitude])
    }

    pub fn by_airport_code(api_key: impl Into<String>, airport: &str) -> Self {
        Self::new(api_key, QueryMode::AirportCode, &[airport])
    }

    /// Query the station closest to the geolocated address of the caller.
    pub fn by_auto_ip(api_key: impl Into<String>) -> Self {
        Self::new(api_key, QueryMode::AutoIp, &[])
    }

    /// Query the station closest to the geolocated `ip_address`.
    pub fn by_ip_geo(api_key: impl Into<String>, ip_address: &str) -> Self {
        Self::new(api_key, QueryMode::IpGeo, &[ip_address])
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    /// Path fragment, e.g. `/CA/San_Francisco.json`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Substitute the path fragment into `template`.
    ///
    /// The fragment goes into the last `%s`; any earlier placeholders are
    /// left as they are. A template without a placeholder comes back
    /// unchanged.
    pub fn format(&self, template: &str) -> String {
        match template.rfind(PLACEHOLDER) {
            Some(at) => {
                let mut out = String::with_capacity(template.len() + self.path.len());
                out.push_str(&template[..at]);
                out.push_str(&self.path);
                out.push_str(&template[at + PLACEHOLDER.len()..]);
                out
            }
            None => template.to_string(),
        }
    }
}

fn underscored(value: &str) -> String {
    value.replace(' ', "_")
}
