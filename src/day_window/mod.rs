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
mod open_meteo;

pub use open_meteo::RemoteLookup;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::config::Settings;
use crate::errors::ConfigError;

/// Sunrise and sunset of one day at one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayWindow {
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
}

impl DayWindow {
    pub fn length(&self) -> Duration {
        self.sunset - self.sunrise
    }
}

/// Anything that can tell when the sun rises and sets on a given date.
#[async_trait]
pub trait DayWindowSource: Send + Sync {
    fn name(&self) -> &str;
    async fn day_window(&self, date: NaiveDate) -> Result<DayWindow>;
}

/// Which [`DayWindowSource`] a run should use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SunSource {
    #[default]
    Fixed,
    Remote,
}

impl FromStr for SunSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Ok(SunSource::Fixed),
            "remote" => Ok(SunSource::Remote),
            other => Err(ConfigError::UnknownSource(other.to_string())),
        }
    }
}

impl fmt::Display for SunSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SunSource::Fixed => write!(f, "fixed"),
            SunSource::Remote => write!(f, "remote"),
        }
    }
}

/// The traditional panchang assumption: sunrise at 06:00 local time and
/// eight 90 minute parts of daylight.
pub struct FixedAssumption {
    tz: Tz,
    sunrise: NaiveTime,
    part: Duration,
}

impl FixedAssumption {
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            sunrise: NaiveTime::from_hms_opt(6, 0, 0).expect("06:00 is a valid time"),
            part: Duration::minutes(90),
        }
    }

    pub fn window_on(&self, date: NaiveDate) -> DayWindow {
        let sunrise = self
            .tz
            .from_local_datetime(&date.and_time(self.sunrise))
            .earliest()
            .expect("Local sunrise must exist");

        DayWindow {
            sunrise,
            sunset: sunrise + self.part * crate::rahu_kalam::PARTS_PER_DAY,
        }
    }
}

#[async_trait]
impl DayWindowSource for FixedAssumption {
    fn name(&self) -> &str {
        "fixed 06:00 sunrise"
    }

    async fn day_window(&self, date: NaiveDate) -> Result<DayWindow> {
        Ok(self.window_on(date))
    }
}

/// Builds the source selected by `kind`.
pub fn build_source(
    kind: SunSource,
    settings: &Settings,
    client: reqwest::Client,
) -> Box<dyn DayWindowSource> {
    match kind {
        SunSource::Fixed => Box::new(FixedAssumption::new(settings.timezone)),
        SunSource::Remote => Box::new(RemoteLookup::new(
            client,
            settings.open_meteo_url.clone(),
            settings.latitude,
            settings.longitude,
            settings.timezone,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use chrono_tz::Asia::Kolkata;

    #[test]
    fn fixed_day_runs_from_six_to_six() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let day = FixedAssumption::new(Kolkata).window_on(date);

        assert_eq!((day.sunrise.hour(), day.sunrise.minute()), (6, 0));
        assert_eq!((day.sunset.hour(), day.sunset.minute()), (18, 0));
        assert_eq!(day.sunrise.date_naive(), date);
        assert_eq!(day.length(), Duration::hours(12));
    }

    #[test]
    fn fixed_sunrise_is_local_to_the_zone() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let day = FixedAssumption::new(chrono_tz::America::New_York).window_on(date);
        assert_eq!(day.sunrise.hour(), 6);
    }

    #[test]
    fn build_selects_by_kind() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        let client = reqwest::Client::new();
        assert_eq!(
            build_source(SunSource::Fixed, &settings, client.clone()).name(),
            "fixed 06:00 sunrise"
        );
        assert_eq!(
            build_source(SunSource::Remote, &settings, client).name(),
            "Open-Meteo"
        );
    }

    #[test]
    fn source_parsing() {
        assert_eq!("fixed".parse::<SunSource>().unwrap(), SunSource::Fixed);
        assert_eq!("Remote".parse::<SunSource>().unwrap(), SunSource::Remote);
        assert!("sundial".parse::<SunSource>().is_err());
    }
}
