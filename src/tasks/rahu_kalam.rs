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
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::{Announcement, Task};
use crate::day_window::DayWindowSource;
use crate::elevenlabs::VoiceProfile;
use crate::rahu_kalam::{compute_window, compose_message, Locale};

/// Morning greeting followed by the day's Rahu Kalam.
pub struct RahuKalamAnnouncement {
    source: Box<dyn DayWindowSource>,
    locale: Locale,
    voice: VoiceProfile,
}

impl RahuKalamAnnouncement {
    pub fn new(source: Box<dyn DayWindowSource>, locale: Locale, voice: VoiceProfile) -> Self {
        Self {
            source,
            locale,
            voice,
        }
    }
}

#[async_trait]
impl Task for RahuKalamAnnouncement {
    fn name(&self) -> &str {
        "Rahu Kalam Announcement"
    }

    async fn compose(&self, date: NaiveDate) -> Result<Announcement> {
        let window = compute_window(date, self.source.as_ref()).await?;
        let text = compose_message(date.weekday(), &window, self.locale);
        debug!("Message: {}", text);

        Ok(Announcement {
            text,
            filename: "rahu_kalam.mp3",
            voice: self.voice.clone(),
        })
    }
}
