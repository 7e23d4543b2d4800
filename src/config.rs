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
use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveTime;
use chrono_tz::Tz;
use tracing::debug;

use crate::day_window::SunSource;
use crate::errors::ConfigError;
use crate::ids::{
    DEFAULT_LATITUDE, DEFAULT_LONGITUDE, ELEVENLABS_URL, GREEN_API_URL, OPEN_METEO_URL,
};
use crate::rahu_kalam::Locale;

/// Everything about a run that is not a secret. All of it has defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Tz,
    pub sun_source: SunSource,
    pub locale: Locale,
    /// Local time of day at which `--daily` sends the announcement.
    pub send_at: NaiveTime,
    pub voice_id: Option<String>,
    pub open_meteo_url: String,
    pub elevenlabs_url: String,
    pub green_api_url: String,
}

/// API credentials and the recipient. Only needed when something is sent.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub elevenlabs_api_key: String,
    pub green_api_instance_id: String,
    pub green_api_token: String,
    pub to_phone_number: String,
}

// Keep tokens out of the logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("green_api_instance_id", &self.green_api_instance_id)
            .field("to_phone_number", &self.to_phone_number)
            .finish_non_exhaustive()
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let latitude: f64 = parse_or(&lookup, "RAHU_LATITUDE", DEFAULT_LATITUDE)?;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid("RAHU_LATITUDE", latitude, "must be within -90 and 90"));
        }
        let longitude: f64 = parse_or(&lookup, "RAHU_LONGITUDE", DEFAULT_LONGITUDE)?;
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid(
                "RAHU_LONGITUDE",
                longitude,
                "must be within -180 and 180",
            ));
        }

        let send_at = match optional(&lookup, "RAHU_SEND_AT") {
            Some(value) => NaiveTime::parse_from_str(&value, "%H:%M")
                .map_err(|e| invalid("RAHU_SEND_AT", &value, e))?,
            None => NaiveTime::from_hms_opt(5, 0, 0).expect("05:00 is a valid time"),
        };

        let settings = Self {
            latitude,
            longitude,
            timezone: parse_or(&lookup, "RAHU_TIMEZONE", chrono_tz::Asia::Kolkata)?,
            sun_source: parse_or(&lookup, "RAHU_SUN_SOURCE", SunSource::default())?,
            locale: parse_or(&lookup, "RAHU_LOCALE", Locale::default())?,
            send_at,
            voice_id: optional(&lookup, "ELEVENLABS_VOICE_ID"),
            open_meteo_url: optional(&lookup, "OPEN_METEO_URL")
                .unwrap_or_else(|| OPEN_METEO_URL.to_string()),
            elevenlabs_url: optional(&lookup, "ELEVENLABS_URL")
                .unwrap_or_else(|| ELEVENLABS_URL.to_string()),
            green_api_url: optional(&lookup, "GREEN_API_URL")
                .unwrap_or_else(|| GREEN_API_URL.to_string()),
        };
        debug!("Settings: {:?}", settings);
        Ok(settings)
    }
}

impl Credentials {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let to_phone_number = required(&lookup, "TO_PHONE_NUMBER")?;
        let digits = to_phone_number.trim_start_matches('+');
        if digits.len() < 7 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid(
                "TO_PHONE_NUMBER",
                &to_phone_number,
                "must be the international number in digits, e.g. 919876543210",
            ));
        }

        Ok(Self {
            elevenlabs_api_key: required(&lookup, "ELEVENLABS_API_KEY")?,
            green_api_instance_id: required(&lookup, "GREEN_API_INSTANCE_ID")?,
            green_api_token: required(&lookup, "GREEN_API_TOKEN")?,
            to_phone_number: digits.to_string(),
        })
    }
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    optional(lookup, name).ok_or(ConfigError::Missing(name))
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match optional(lookup, name) {
        Some(value) => value.parse().map_err(|e| invalid(name, &value, e)),
        None => Ok(default),
    }
}

fn invalid(name: &'static str, value: impl Display, reason: impl Display) -> ConfigError {
    ConfigError::Invalid {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
