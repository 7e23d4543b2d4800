/*
Rahu Kalam Daemon: Sends the day's Rahu Kalam to WhatsApp as a voice note.
Copyright (C) 2024 amFOSS

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
use anyhow::{anyhow, bail, Context as _, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::{debug, trace};

use super::{DayWindow, DayWindowSource};

const LOCAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Deserialize)]
struct DailyResponse {
    daily: Daily,
}

#[derive(Debug, Deserialize)]
struct Daily {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    sunrise: Vec<String>,
    #[serde(default)]
    sunset: Vec<String>,
}

/// Looks sunrise and sunset up from the Open-Meteo daily API.
pub struct RemoteLookup {
    client: reqwest::Client,
    base_url: String,
    latitude: f64,
    longitude: f64,
    tz: Tz,
}

impl RemoteLookup {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        latitude: f64,
        longitude: f64,
        tz: Tz,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            latitude,
            longitude,
            tz,
        }
    }
}

#[async_trait]
impl DayWindowSource for RemoteLookup {
    fn name(&self) -> &str {
        "Open-Meteo"
    }

    async fn day_window(&self, date: NaiveDate) -> Result<DayWindow> {
        trace!("Fetching sunrise and sunset for {}", date);
        let day = date.format("%Y-%m-%d").to_string();

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                ("daily", "sunrise,sunset".to_string()),
                ("timezone", self.tz.name().to_string()),
                ("start_date", day.clone()),
                ("end_date", day),
            ])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to reach Open-Meteo")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Open-Meteo returned {}: {}", status, body);
        }

        let response: DailyResponse = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to parse Open-Meteo response")?;
        debug!("Open-Meteo daily: {:?}", response.daily);

        parse_day_window(&response.daily, date, self.tz)
    }
}

fn parse_day_window(daily: &Daily, date: NaiveDate, tz: Tz) -> Result<DayWindow> {
    if let Some(day) = daily.time.first() {
        let expected = date.format("%Y-%m-%d").to_string();
        if *day != expected {
            bail!("Open-Meteo answered for {} instead of {}", day, expected);
        }
    }

    let sunrise = daily
        .sunrise
        .first()
        .ok_or_else(|| anyhow!("Malformed response: no sunrise for {}", date))?;
    let sunset = daily
        .sunset
        .first()
        .ok_or_else(|| anyhow!("Malformed response: no sunset for {}", date))?;

    let window = DayWindow {
        sunrise: parse_local(sunrise, tz).context("Failed to parse sunrise")?,
        sunset: parse_local(sunset, tz).context("Failed to parse sunset")?,
    };

    if window.sunset <= window.sunrise {
        bail!(
            "Sunset {} is not after sunrise {} on {}",
            window.sunset,
            window.sunrise,
            date
        );
    }

    Ok(window)
}

fn parse_local(value: &str, tz: Tz) -> Result<chrono::DateTime<Tz>> {
    let naive = NaiveDateTime::parse_from_str(value, LOCAL_TIME_FORMAT)
        .with_context(|| format!("{:?} is not a local time", value))?;
    tz.from_local_datetime(&naive)
        .single()
        .ok_or_else(|| anyhow!("{} does not exist exactly once in {}", naive, tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use chrono_tz::Asia::Kolkata;

    fn daily(json: &str) -> Daily {
        serde_json::from_str::<DailyResponse>(json).unwrap().daily
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    #[test]
    fn parses_sunrise_and_sunset() {
        let daily = daily(
            r#"{
                "latitude": 13.08,
                "longitude": 80.28,
                "timezone": "Asia/Kolkata",
                "daily_units": {"time": "iso8601", "sunrise": "iso8601", "sunset": "iso8601"},
                "daily": {
                    "time": ["2024-06-03"],
                    "sunrise": ["2024-06-03T05:43"],
                    "sunset": ["2024-06-03T18:37"]
                }
            }"#,
        );

        let window = parse_day_window(&daily, date(), Kolkata).unwrap();
        assert_eq!((window.sunrise.hour(), window.sunrise.minute()), (5, 43));
        assert_eq!((window.sunset.hour(), window.sunset.minute()), (18, 37));
        assert_eq!(window.sunrise.timezone(), Kolkata);
    }

    #[test]
    fn missing_data_is_an_error() {
        let daily = daily(r#"{"daily": {"time": ["2024-06-03"], "sunrise": [], "sunset": []}}"#);
        assert!(parse_day_window(&daily, date(), Kolkata).is_err());
    }

    #[test]
    fn answer_for_another_day_is_an_error() {
        let daily = daily(
            r#"{"daily": {
                "time": ["2024-06-02"],
                "sunrise": ["2024-06-02T05:43"],
                "sunset": ["2024-06-02T18:37"]
            }}"#,
        );
        assert!(parse_day_window(&daily, date(), Kolkata).is_err());
    }

    #[test]
    fn inverted_day_is_an_error() {
        let daily = daily(
            r#"{"daily": {
                "time": ["2024-06-03"],
                "sunrise": ["2024-06-03T18:37"],
                "sunset": ["2024-06-03T05:43"]
            }}"#,
        );
        assert!(parse_day_window(&daily, date(), Kolkata).is_err());
    }

    #[test]
    fn garbage_time_is_an_error() {
        let daily = daily(
            r#"{"daily": {
                "time": ["2024-06-03"],
                "sunrise": ["sometime in the morning"],
                "sunset": ["2024-06-03T18:37"]
            }}"#,
        );
        assert!(parse_day_window(&daily, date(), Kolkata).is_err());
    }
}
