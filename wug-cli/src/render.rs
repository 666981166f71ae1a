use std::io::{self, Write};

use chrono::Local;
use wug_core::{Conditions, Forecast, Hourly};

pub fn conditions(out: &mut impl Write, conditions: &Conditions) -> io::Result<()> {
    let obs = &conditions.current_observation;

    writeln!(out, "{}", obs.display_location.full)?;
    if !obs.station_id.is_empty() {
        writeln!(out, "  Station:     {}", obs.station_id)?;
    }
    if let Some(at) = obs.observed_at() {
        writeln!(out, "  Observed:    {}", at.with_timezone(&Local).format("%Y-%m-%d %H:%M"))?;
    }
    writeln!(out, "  Weather:     {}", obs.weather)?;
    writeln!(out, "  Temperature: {}", obs.temperature_string)?;
    writeln!(out, "  Feels like:  {}", obs.feelslike_string)?;
    writeln!(out, "  Humidity:    {}", obs.relative_humidity)?;
    writeln!(out, "  Wind:        {}", obs.wind_string)?;
    writeln!(out, "  Pressure:    {} mb ({} in)", obs.pressure_mb, obs.pressure_in)?;
    writeln!(out, "  Precip today: {}", obs.precip_today_string)?;

    Ok(())
}

pub fn forecast(out: &mut impl Write, forecast: &Forecast) -> io::Result<()> {
    let data = &forecast.forecast;

    for day in &data.simpleforecast.forecastday {
        writeln!(
            out,
            "{} {} {}: {}, high {}F / {}C, low {}F / {}C, precip {}%",
            day.date.weekday_short,
            day.date.monthname_short,
            day.date.day,
            day.conditions,
            day.high.fahrenheit,
            day.high.celsius,
            day.low.fahrenheit,
            day.low.celsius,
            day.pop,
        )?;
    }

    if !data.txt_forecast.forecastday.is_empty() {
        writeln!(out)?;
        for period in &data.txt_forecast.forecastday {
            writeln!(out, "{}: {}", period.title, period.fcttext)?;
        }
    }

    Ok(())
}

pub fn hourly(out: &mut impl Write, hourly: &Hourly) -> io::Result<()> {
    for period in &hourly.hourly_forecast {
        writeln!(
            out,
            "{} {}: {}, {}F / {}C, wind {} {} mph, precip {}%",
            period.fcttime.weekday_name_abbrev,
            period.fcttime.civil,
            period.condition,
            period.temp.english,
            period.temp.metric,
            period.wdir.dir,
            period.wspd.english,
            period.pop,
        )?;
    }

    Ok(())
}
