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
use anyhow::{bail, Context as _, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, trace};

use crate::ids::PERSONAL_CHAT_SUFFIX;

/// Acknowledgement returned once the gateway has accepted a message.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Delivery {
    #[serde(rename = "idMessage")]
    pub id_message: String,
}

/// Sends an audio attachment to the configured recipient.
#[async_trait]
pub trait MessageDelivery: Send + Sync {
    async fn send_audio(&self, audio: Vec<u8>, filename: &str, caption: &str)
        -> Result<Delivery>;
}

/// WhatsApp delivery through a Green API instance.
pub struct GreenApi {
    client: reqwest::Client,
    base_url: String,
    instance_id: String,
    token: String,
    chat_id: String,
}

impl GreenApi {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        instance_id: String,
        token: String,
        phone_number: &str,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            instance_id,
            token,
            chat_id: chat_id(phone_number),
        }
    }

    fn upload_url(&self) -> String {
        format!(
            "{}/waInstance{}/SendFileByUpload/{}",
            self.base_url.trim_end_matches('/'),
            self.instance_id,
            self.token
        )
    }
}

pub fn chat_id(phone_number: &str) -> String {
    format!("{}{}", phone_number, PERSONAL_CHAT_SUFFIX)
}

#[async_trait]
impl MessageDelivery for GreenApi {
    async fn send_audio(
        &self,
        audio: Vec<u8>,
        filename: &str,
        caption: &str,
    ) -> Result<Delivery> {
        trace!("Uploading {} ({} bytes)", filename, audio.len());
        if audio.is_empty() {
            bail!("Refusing to send an empty audio file");
        }

        let file = Part::bytes(audio)
            .file_name(filename.to_string())
            .mime_str("audio/mpeg")
            .context("Failed to build audio part")?;
        let form = Form::new()
            .text("chatId", self.chat_id.clone())
            .text("caption", caption.to_string())
            .part("file", file);

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to reach Green API")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read Green API response")?;
        debug!("Green API responded {}: {}", status, body);

        if !status.is_success() {
            bail!("Green API returned {}: {}", status, body);
        }
        parse_delivery(&body)
    }
}

fn parse_delivery(body: &str) -> Result<Delivery> {
    let delivery: Delivery = serde_json::from_str(body)
        .with_context(|| format!("Green API did not acknowledge the message: {}", body))?;

    if delivery.id_message.is_empty() {
        bail!("Green API returned an empty idMessage: {}", body);
    }
    Ok(delivery)
}
