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
use std::fmt;
use std::str::FromStr;

use chrono::Timelike;

use crate::errors::ConfigError;

/// Language the message is composed and spoken in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    En,
    #[default]
    Ta,
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ta" => Ok(Locale::Ta),
            other => Err(ConfigError::UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ta => write!(f, "ta"),
        }
    }
}

// Spellings are the ones the TTS voice pronounces cleanly, not dictionary forms.
const TAMIL_NUMBERS: [&str; 60] = [
    "பூஜ்ஜியம்",
    "ஒன்று",
    "இரண்டு",
    "மூன்று",
    "நான்கு",
    "ஐந்து",
    "ஆறு",
    "ஏழு",
    "எட்டு",
    "ஒன்பது",
    "பத்து",
    "பதினொன்று",
    "பன்னிரண்டு",
    "பதிமூன்று",
    "பதினான்கு",
    "பதினைந்து",
    "பதினாறு",
    "பதினேழு",
    "பதினெட்டு",
    "பத்தொன்பது",
    "இருபது",
    "இருபத்தொன்று",
    "இருபத்திரண்டு",
    "இருபத்துமூன்று",
    "இருபத்துநான்கு",
    "இருபத்திஐந்து",
    "இருபத்திஆறு",
    "இருபத்திஏழு",
    "இருபத்திஎட்டு",
    "இருபத்திஒன்பது",
    "முப்பது",
    "முப்பத்தொன்று",
    "முப்பத்திரண்டு",
    "முப்பத்துமூன்று",
    "முப்பத்துநான்கு",
    "முப்பத்திஐந்து",
    "முப்பத்திஆறு",
    "முப்பத்திஏழு",
    "முப்பத்திஎட்டு",
    "முப்பத்திஒன்பது",
    "நாற்பது",
    "நாற்பத்தொன்று",
    "நாற்பத்திரண்டு",
    "நாற்பத்துமூன்று",
    "நாற்பத்துநான்கு",
    "நாற்பத்திஐந்து",
    "நாற்பத்திஆறு",
    "நாற்பத்திஏழு",
    "நாற்பத்திஎட்டு",
    "நாற்பத்திஒன்பது",
    "ஐம்பது",
    "ஐம்பத்தொன்று",
    "ஐம்பத்திரண்டு",
    "ஐம்பத்துமூன்று",
    "ஐம்பத்துநான்கு",
    "ஐம்பத்திஐந்து",
    "ஐம்பத்திஆறு",
    "ஐம்பத்திஏழு",
    "ஐம்பத்திஎட்டு",
    "ஐம்பத்திஒன்பது",
];

const MORNING: &str = "காலை";
const MIDDAY: &str = "மதியம்";
const EVENING: &str = "மாலை";
const NIGHT: &str = "இரவு";
const HOUR_WORD: &str = "மணி";
const MINUTE_WORD: &str = "நிமிடம்";

/// Renders a clock time the way it is read out loud.
///
/// English keeps the 24-hour `HH:MM` form. Tamil uses a period-of-day word
/// followed by the 12-hour clock in words, dropping the minutes on the hour.
pub fn format_spoken_time<T: Timelike>(instant: &T, locale: Locale) -> String {
    let hour = instant.hour();
    let minute = instant.minute();

    match locale {
        Locale::En => format!("{:02}:{:02}", hour, minute),
        Locale::Ta => {
            let mut spoken = format!(
                "{} {} {}",
                period_of_day(hour),
                TAMIL_NUMBERS[twelve_hour(hour) as usize],
                HOUR_WORD
            );
            if minute > 0 {
                spoken.push_str(&format!(
                    " {} {}",
                    TAMIL_NUMBERS[minute as usize], MINUTE_WORD
                ));
            }
            spoken
        }
    }
}

/// The midnight hour is still night; morning starts at 01:00.
fn period_of_day(hour: u32) -> &'static str {
    match hour {
        0 => NIGHT,
        1..=11 => MORNING,
        12..=15 => MIDDAY,
        16..=18 => EVENING,
        _ => NIGHT,
    }
}

/// Midnight and noon are both read as twelve.
fn twelve_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}
