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
use crate::green_api::Delivery;
use crate::tasks::{Announcer, Task};
use crate::utils::time::{next_run_after, time_until};

use anyhow::Context as _;
use chrono::{NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, error};

/// Where a composed announcement ends up.
pub enum Output {
    /// Print the message and stop; no service is contacted.
    Print,
    Announce(Announcer),
}

/// Runs `task` for `date` once. Either the whole pipeline succeeds or the
/// first failing step's error is returned.
pub async fn run_once(
    task: &dyn Task,
    output: &Output,
    date: NaiveDate,
) -> anyhow::Result<Option<Delivery>> {
    debug!("Running task {} for {}", task.name(), date);
    let announcement = task
        .compose(date)
        .await
        .with_context(|| format!("Task {} could not compose its message", task.name()))?;
    debug!("{}", announcement.text);

    match output {
        Output::Print => {
            println!("{}", announcement.text);
            Ok(None)
        }
        Output::Announce(announcer) => announcer.announce(&announcement).await.map(Some),
    }
}

/// Sleeps until `send_at` on the clock of `tz`, runs the task for that day
/// and goes back to sleep. Failures are logged and the next day is tried.
pub async fn run_daily(task: Box<dyn Task>, output: Output, tz: Tz, send_at: NaiveTime) {
    let mut last = None;
    loop {
        let now = Utc::now().with_timezone(&tz);
        let next = next_run_after(now, last, send_at);
        last = Some(next);
        let next_run_in = time_until(now, next);
        debug!("Task {}: Next run in {:?}", task.name(), next_run_in);
        tokio::time::sleep(next_run_in).await;

        debug!("Running task {}", task.name());
        if let Err(e) = run_once(task.as_ref(), &output, next.date_naive()).await {
            error!("Could not run task {}, error {:#}", task.name(), e);
        }
    }
}
