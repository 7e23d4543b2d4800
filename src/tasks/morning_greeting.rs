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

use super::{Announcement, Task};
use crate::elevenlabs::VoiceProfile;
use crate::rahu_kalam::{compose_greeting, Locale};

/// Just the greeting and the name of the day.
pub struct MorningGreeting {
    locale: Locale,
    voice: VoiceProfile,
}

impl MorningGreeting {
    pub fn new(locale: Locale, voice: VoiceProfile) -> Self {
        Self { locale, voice }
    }
}

#[async_trait]
impl Task for MorningGreeting {
    fn name(&self) -> &str {
        "Morning Greeting"
    }

    async fn compose(&self, date: NaiveDate) -> Result<Announcement> {
        Ok(Announcement {
            text: compose_greeting(date.weekday(), self.locale),
            filename: "morning.mp3",
            voice: self.voice.clone(),
        })
    }
}
