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
use chrono::Weekday;

use super::spoken::{format_spoken_time, Locale};
use super::RahuKalamWindow;

const ENGLISH_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const TAMIL_DAYS: [&str; 7] = [
    "ஞாயிறு",
    "திங்கள்",
    "செவ்வாய்",
    "புதன்",
    "வியாழன்",
    "வெள்ளி",
    "சனி",
];

pub fn weekday_name(weekday: Weekday, locale: Locale) -> &'static str {
    let index = weekday.num_days_from_sunday() as usize;
    match locale {
        Locale::En => ENGLISH_DAYS[index],
        Locale::Ta => TAMIL_DAYS[index],
    }
}

/// The morning greeting on its own, without any Rahu Kalam details.
pub fn compose_greeting(weekday: Weekday, locale: Locale) -> String {
    let day = weekday_name(weekday, locale);
    match locale {
        Locale::En => format!("Good morning and happy {}! 🌞", day),
        Locale::Ta => format!("இனிய காலை வணக்கம்! 🌞 இன்று {}.", day),
    }
}

/// Greeting followed by the day's Rahu Kalam, ready to be handed to TTS.
pub fn compose_message(weekday: Weekday, window: &RahuKalamWindow, locale: Locale) -> String {
    let start = format_spoken_time(&window.start, locale);
    let end = format_spoken_time(&window.end, locale);
    let rahu = match locale {
        Locale::En => format!("Today's Rahu Kalam is from {} to {}.", start, end),
        Locale::Ta => format!("இன்றைய ராகு காலம் {} முதல் {} வரை.", start, end),
    };

    format!("{} {}", compose_greeting(weekday, locale), rahu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Asia::Kolkata;

    fn window(start: (u32, u32), end: (u32, u32)) -> RahuKalamWindow {
        RahuKalamWindow {
            start: Kolkata
                .with_ymd_and_hms(2024, 1, 3, start.0, start.1, 0)
                .unwrap(),
            end: Kolkata.with_ymd_and_hms(2024, 1, 3, end.0, end.1, 0).unwrap(),
        }
    }

    #[test]
    fn weekday_tables_start_on_sunday() {
        assert_eq!(weekday_name(Weekday::Sun, Locale::En), "Sunday");
        assert_eq!(weekday_name(Weekday::Sat, Locale::En), "Saturday");
        assert_eq!(weekday_name(Weekday::Sun, Locale::Ta), "ஞாயிறு");
        assert_eq!(weekday_name(Weekday::Wed, Locale::Ta), "புதன்");
    }

    #[test]
    fn english_greeting() {
        assert_eq!(
            compose_greeting(Weekday::Mon, Locale::En),
            "Good morning and happy Monday! 🌞"
        );
    }

    #[test]
    fn tamil_message_for_wednesday() {
        let message = compose_message(Weekday::Wed, &window((12, 0), (13, 30)), Locale::Ta);
        assert_eq!(
            message,
            "இனிய காலை வணக்கம்! 🌞 இன்று புதன். இன்றைய ராகு காலம் மதியம் பன்னிரண்டு மணி முதல் மதியம் ஒன்று மணி முப்பது நிமிடம் வரை."
        );
    }

    #[test]
    fn english_message_uses_clock_digits() {
        let message = compose_message(Weekday::Fri, &window((10, 30), (12, 0)), Locale::En);
        assert_eq!(
            message,
            "Good morning and happy Friday! 🌞 Today's Rahu Kalam is from 10:30 to 12:00."
        );
    }
}
