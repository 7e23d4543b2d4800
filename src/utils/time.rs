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
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::debug;

use std::time::Duration;

/// Today's date on the wall clock of `tz`.
pub fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// The first time strictly after `now` that the clock in `now`'s zone
/// reads `at`. Days where `at` does not exist locally are skipped.
pub fn next_run(now: DateTime<Tz>, at: NaiveTime) -> DateTime<Tz> {
    let tz = now.timezone();
    let mut date = now.date_naive();

    loop {
        if let Some(candidate) = tz.from_local_datetime(&date.and_time(at)).earliest() {
            if candidate > now {
                return candidate;
            }
        }
        date = date.succ_opt().expect("Date must not overflow");
    }
}

/// Like [`next_run`], but never returns `last` or anything before it, even
/// if the clock has not yet moved past `last`.
pub fn next_run_after(
    now: DateTime<Tz>,
    last: Option<DateTime<Tz>>,
    at: NaiveTime,
) -> DateTime<Tz> {
    let from = match last {
        Some(last) if last > now => last,
        _ => now,
    };
    next_run(from, at)
}

/// Exact wait from `now` until `next`, sub-second part included.
pub fn time_until(now: DateTime<Tz>, next: DateTime<Tz>) -> Duration {
    debug!("now: {}, next_run: {}", now, next);

    let duration = next.signed_duration_since(now);
    debug!("duration: {}", duration);
    duration.to_std().unwrap_or(Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use chrono_tz::Asia::Kolkata;

    fn five_am() -> NaiveTime {
        NaiveTime::from_hms_opt(5, 0, 0).unwrap()
    }

    #[test]
    fn later_today() {
        let now = Kolkata.with_ymd_and_hms(2024, 1, 3, 4, 30, 0).unwrap();
        let next = next_run(now, five_am());
        assert_eq!(next.date_naive(), now.date_naive());
        assert_eq!(time_until(now, next), Duration::from_secs(30 * 60));
    }

    #[test]
    fn already_passed_rolls_over_to_tomorrow() {
        let now = Kolkata.with_ymd_and_hms(2024, 1, 3, 5, 0, 0).unwrap();
        let next = next_run(now, five_am());
        assert_eq!(next, Kolkata.with_ymd_and_hms(2024, 1, 4, 5, 0, 0).unwrap());
        assert_eq!(time_until(now, next), Duration::from_secs(24 * 60 * 60));
    }

    #[test]
    fn wait_keeps_the_sub_second_part() {
        let now = Kolkata
            .with_ymd_and_hms(2024, 1, 3, 4, 59, 30)
            .unwrap()
            .with_nanosecond(700_000_000)
            .unwrap();
        let next = next_run(now, five_am());
        let wait = time_until(now, next);
        assert_eq!(wait, Duration::from_millis(29_300));

        let woke = now + chrono::Duration::from_std(wait).unwrap();
        assert_eq!(woke, next);
        assert_ne!(next_run(woke, five_am()), next);
    }

    #[test]
    fn early_wake_does_not_repeat_the_same_day() {
        let first = Kolkata.with_ymd_and_hms(2024, 1, 3, 5, 0, 0).unwrap();
        let early = Kolkata
            .with_ymd_and_hms(2024, 1, 3, 4, 59, 59)
            .unwrap()
            .with_nanosecond(700_000_000)
            .unwrap();

        let second = next_run_after(early, Some(first), five_am());
        assert_eq!(second, Kolkata.with_ymd_and_hms(2024, 1, 4, 5, 0, 0).unwrap());
        assert_eq!(next_run_after(early, None, five_am()), first);
    }

    #[test]
    fn past_deadline_waits_zero() {
        let now = Kolkata.with_ymd_and_hms(2024, 1, 3, 5, 0, 1).unwrap();
        let earlier = Kolkata.with_ymd_and_hms(2024, 1, 3, 5, 0, 0).unwrap();
        assert_eq!(time_until(now, earlier), Duration::ZERO);
    }

    #[test]
    fn skips_missing_local_time() {
        // 02:30 does not exist in New York on 2024-03-10.
        let tz = chrono_tz::America::New_York;
        let now = tz.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let at = NaiveTime::from_hms_opt(2, 30, 0).unwrap();
        assert_eq!(
            next_run(now, at).date_naive(),
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
        );
    }
}
