use std::io::{self, Write};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use inquire::Password;
use serde::Serialize;
use tracing::debug;
use wug_core::{Config, Query, RequestCategory, model::ResponseMeta};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wug", version, about = "Weather Underground CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key used for requests.
    Configure {
        /// API key; prompted for when omitted.
        #[arg(long)]
        api_key: Option<String>,

        /// Alternative API base URL.
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Fetch weather data for a location.
    Get {
        /// One of: conditions, forecast, forecast10day, hourly, hourly10day.
        category: RequestCategory,

        #[command(flatten)]
        location: LocationArgs,

        /// Print the response body exactly as received.
        #[arg(long, conflicts_with = "json")]
        raw: bool,

        /// Print the decoded record as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Where to look. Without any of these the caller's IP address is geolocated.
#[derive(Debug, Args)]
pub struct LocationArgs {
    /// Personal weather station id, without the `pws:` prefix.
    #[arg(long)]
    pub pws: Option<String>,

    /// US state, together with --city.
    #[arg(long, requires = "city", conflicts_with = "country")]
    pub state: Option<String>,

    /// Country, together with --city.
    #[arg(long, requires = "city")]
    pub country: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// US zip code.
    #[arg(long)]
    pub zip: Option<String>,

    /// Airport code, e.g. SFO.
    #[arg(long)]
    pub airport: Option<String>,

    #[arg(long, requires = "long", allow_hyphen_values = true)]
    pub lat: Option<String>,

    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub long: Option<String>,

    /// Geolocate this IP address instead of the caller's.
    #[arg(long)]
    pub ip: Option<String>,
}

impl LocationArgs {
    pub fn into_query(self, api_key: &str) -> anyhow::Result<Query> {
        let mut queries = Vec::new();

        if let Some(id) = &self.pws {
            queries.push(Query::by_pws_id(api_key, id));
        }

        match (&self.state, &self.country, &self.city) {
            (Some(state), None, Some(city)) => {
                queries.push(Query::by_us_state_city(api_key, state, city));
            }
            (None, Some(country), Some(city)) => {
                queries.push(Query::by_country_city(api_key, country, city));
            }
            (None, None, None) => {}
            (Some(_), Some(_), _) => bail!("--state and --country cannot be combined."),
            _ => bail!("--city must be used together with --state or --country."),
        }

        if let Some(zip) = &self.zip {
            queries.push(Query::by_us_zip(api_key, zip));
        }

        if let Some(airport) = &self.airport {
            queries.push(Query::by_airport_code(api_key, airport));
        }

        match (&self.lat, &self.long) {
            (Some(lat), Some(long)) => queries.push(Query::by_lat_long(api_key, lat, long)),
            (None, None) => {}
            _ => bail!("--lat and --long must be given together."),
        }

        if let Some(ip) = &self.ip {
            queries.push(Query::by_ip_geo(api_key, ip));
        }

        match queries.len() {
            0 => Ok(Query::by_auto_ip(api_key)),
            1 => Ok(queries.remove(0)),
            _ => bail!("Only one location may be given per request."),
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { api_key, base_url } => configure(api_key, base_url),
            Command::Get { category, location, raw, json } => {
                get(category, location, raw, json).await
            }
        }
    }
}

fn configure(api_key: Option<String>, base_url: Option<String>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = match api_key {
        Some(key) => key,
        None => Password::new("Weather Underground API key:")
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?,
    };

    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("API key must not be empty.");
    }

    config.set_api_key(api_key.to_string());
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn get(
    category: RequestCategory,
    location: LocationArgs,
    raw: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load()?.with_env_overrides();
    let query = location.into_query(config.api_key()?)?;
    let client = config.client()?;

    debug!(%category, mode = %query.mode(), "fetching");

    let mut stdout = io::stdout().lock();

    if raw {
        let body = client.get(category, &query).await?;
        stdout.write_all(&body)?;
        writeln!(stdout)?;
        return Ok(());
    }

    match category {
        RequestCategory::Conditions => {
            let record = client.get_conditions(&query).await?;
            ensure_ok(&record.response)?;
            emit(&mut stdout, &record, json, render::conditions)
        }
        RequestCategory::Forecast => {
            let record = client.get_forecast(&query).await?;
            ensure_ok(&record.response)?;
            emit(&mut stdout, &record, json, render::forecast)
        }
        RequestCategory::ForecastTenDay => {
            let record = client.get_forecast_ten_day(&query).await?;
            ensure_ok(&record.response)?;
            emit(&mut stdout, &record, json, render::forecast)
        }
        RequestCategory::Hourly => {
            let record = client.get_hourly(&query).await?;
            ensure_ok(&record.response)?;
            emit(&mut stdout, &record, json, render::hourly)
        }
        RequestCategory::HourlyTenDay => {
            let record = client.get_hourly_ten_day(&query).await?;
            ensure_ok(&record.response)?;
            emit(&mut stdout, &record, json, render::hourly)
        }
    }
}

/// Turn an error reported inside the response header into a failure.
fn ensure_ok(meta: &ResponseMeta) -> anyhow::Result<()> {
    if let Some(err) = meta.api_error() {
        bail!("Weather Underground rejected the request ({err}).");
    }

    if !meta.results.is_empty() {
        let candidates: Vec<String> = meta
            .results
            .iter()
            .map(|m| format!("  {}, {} {} ({})", m.name, m.state, m.country, m.l))
            .collect();
        bail!("Location is ambiguous. Candidates:\n{}", candidates.join("\n"));
    }

    Ok(())
}

fn emit<W: Write, T: Serialize>(
    out: &mut W,
    record: &T,
    json: bool,
    text: fn(&mut W, &T) -> io::Result<()>,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, record).context("Failed to encode JSON")?;
        writeln!(out)?;
    } else {
        text(out, record)?;
    }
    Ok(())
}
