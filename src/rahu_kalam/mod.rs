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
mod message;
mod spoken;

pub use message::{compose_greeting, compose_message, weekday_name};
pub use spoken::{format_spoken_time, Locale};

use anyhow::Context as _;
use chrono::{DateTime, Datelike, NaiveDate, Weekday};
use chrono_tz::Tz;
use tracing::{debug, trace};

use crate::day_window::{DayWindow, DayWindowSource};

/// Daylight is split into this many equal parts, one of which is Rahu Kalam.
pub const PARTS_PER_DAY: i32 = 8;

/// The 1-based part of the day that is inauspicious on `weekday`.
pub fn rahu_slot(weekday: Weekday) -> u32 {
    match weekday {
        Weekday::Sun => 8,
        Weekday::Mon => 2,
        Weekday::Tue => 7,
        Weekday::Wed => 5,
        Weekday::Thu => 6,
        Weekday::Fri => 4,
        Weekday::Sat => 3,
    }
}

/// Number of whole parts between sunrise and the start of the window.
/// Always in `0..PARTS_PER_DAY`, whatever the slot table holds.
pub fn effective_slot(slot: u32) -> i32 {
    (slot as i32 - 1).rem_euclid(PARTS_PER_DAY)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RahuKalamWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// Places the window for `weekday` inside `day`.
///
/// Panics if `day` is empty or inverted; sources reject such data before it
/// gets here.
pub fn window_for(weekday: Weekday, day: &DayWindow) -> RahuKalamWindow {
    assert!(
        day.sunrise < day.sunset,
        "Sunset ({}) must come after sunrise ({})",
        day.sunset,
        day.sunrise
    );

    let part = day.length() / PARTS_PER_DAY;
    let start = day.sunrise + part * effective_slot(rahu_slot(weekday));

    RahuKalamWindow {
        start,
        end: start + part,
    }
}

/// Computes the Rahu Kalam window for `date`, asking `source` for the day's
/// sunrise and sunset. A failing source fails the computation.
pub async fn compute_window(
    date: NaiveDate,
    source: &dyn DayWindowSource,
) -> anyhow::Result<RahuKalamWindow> {
    trace!("Running compute_window for {}", date);
    let day = source.day_window(date).await.with_context(|| {
        format!(
            "Failed to get sunrise and sunset for {} from {}",
            date,
            source.name()
        )
    })?;
    debug!("Day window: {:?}", day);

    let window = window_for(date.weekday(), &day);
    debug!(
        "Rahu Kalam on {} ({}): {} - {}",
        date,
        date.weekday(),
        window.start,
        window.end
    );
    Ok(window)
}
