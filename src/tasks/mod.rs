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
mod morning_greeting;
mod rahu_kalam;

pub use morning_greeting::MorningGreeting;
pub use rahu_kalam::RahuKalamAnnouncement;

use std::sync::Arc;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{info, trace};

use crate::elevenlabs::{SpeechSynthesizer, VoiceProfile};
use crate::green_api::{Delivery, MessageDelivery};

/// What a task wants to say on a given day and how it should sound.
#[derive(Clone, Debug, PartialEq)]
pub struct Announcement {
    pub text: String,
    pub filename: &'static str,
    pub voice: VoiceProfile,
}

/// A [`Task`] is a job that runs once a day. [`Task::compose`] builds the
/// day's [`Announcement`], which an [`Announcer`] then speaks and delivers.
/// [`Task::name`] is only used for logging.
#[async_trait]
pub trait Task: Send + Sync {
    fn name(&self) -> &str;
    async fn compose(&self, date: NaiveDate) -> Result<Announcement>;
}

/// Runs text-to-speech and delivery, in that order. Nothing is delivered
/// unless speech was generated.
pub struct Announcer {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    delivery: Arc<dyn MessageDelivery>,
}

impl Announcer {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        delivery: Arc<dyn MessageDelivery>,
    ) -> Self {
        Self {
            synthesizer,
            delivery,
        }
    }

    pub async fn announce(&self, announcement: &Announcement) -> Result<Delivery> {
        trace!("Running announce");
        let audio = self
            .synthesizer
            .synthesize(&announcement.text, &announcement.voice)
            .await
            .context("Failed to generate speech")?;
        info!("Generated {} bytes of speech", audio.len());

        let delivery = self
            .delivery
            .send_audio(audio, announcement.filename, &announcement.text)
            .await
            .with_context(|| format!("Failed to deliver {}", announcement.filename))?;
        info!("Delivered {} as {}", announcement.filename, delivery.id_message);

        Ok(delivery)
    }
}
