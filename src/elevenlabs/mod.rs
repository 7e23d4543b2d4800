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
use serde::Serialize;
use tracing::{debug, trace};

use crate::ids::{ENGLISH_VOICE_ID, MP3_OUTPUT_FORMAT, MULTILINGUAL_MODEL_ID, TAMIL_VOICE_ID};
use crate::rahu_kalam::Locale;

/// Turns text into audio bytes.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, voice: &VoiceProfile) -> Result<Vec<u8>>;
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
}

/// Everything ElevenLabs needs to know about how a message should sound.
#[derive(Clone, Debug, PartialEq)]
pub struct VoiceProfile {
    pub voice_id: String,
    pub model_id: String,
    pub output_format: String,
    pub settings: VoiceSettings,
}

impl VoiceProfile {
    /// Steady, slow delivery that keeps Tamil number words intelligible.
    pub fn tamil() -> Self {
        Self {
            voice_id: TAMIL_VOICE_ID.to_string(),
            model_id: MULTILINGUAL_MODEL_ID.to_string(),
            output_format: MP3_OUTPUT_FORMAT.to_string(),
            settings: VoiceSettings {
                stability: 0.8,
                similarity_boost: 0.3,
                style: Some(0.2),
            },
        }
    }

    pub fn english() -> Self {
        Self {
            voice_id: ENGLISH_VOICE_ID.to_string(),
            model_id: MULTILINGUAL_MODEL_ID.to_string(),
            output_format: MP3_OUTPUT_FORMAT.to_string(),
            settings: VoiceSettings {
                stability: 0.5,
                similarity_boost: 0.5,
                style: None,
            },
        }
    }

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::english(),
            Locale::Ta => Self::tamil(),
        }
    }

    pub fn with_voice_id(mut self, voice_id: Option<String>) -> Self {
        if let Some(voice_id) = voice_id {
            self.voice_id = voice_id;
        }
        self
    }
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

pub struct ElevenLabs {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ElevenLabs {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }

    fn speech_url(&self, voice: &VoiceProfile) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            voice.voice_id
        )
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabs {
    async fn synthesize(&self, text: &str, voice: &VoiceProfile) -> Result<Vec<u8>> {
        trace!("Requesting speech from voice {}", voice.voice_id);
        let body = SpeechRequest {
            text,
            model_id: &voice.model_id,
            voice_settings: &voice.settings,
        };

        let response = self
            .client
            .post(self.speech_url(voice))
            .query(&[("output_format", voice.output_format.as_str())])
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to reach ElevenLabs")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("ElevenLabs returned {}: {}", status, body);
        }

        let audio = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read audio from ElevenLabs")?;
        debug!("Received {} bytes of audio", audio.len());

        if audio.is_empty() {
            bail!("ElevenLabs returned no audio");
        }
        Ok(audio.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_matches_the_api() {
        let voice = VoiceProfile::tamil();
        let body = SpeechRequest {
            text: "வணக்கம்",
            model_id: &voice.model_id,
            voice_settings: &voice.settings,
        };
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["text"], json!("வணக்கம்"));
        assert_eq!(value["model_id"], json!("eleven_multilingual_v2"));
        assert_eq!(value["voice_settings"]["stability"], json!(0.8));
        assert_eq!(value["voice_settings"]["style"], json!(0.2));
    }

    #[test]
    fn english_profile_leaves_style_out() {
        let settings = serde_json::to_value(VoiceProfile::english().settings).unwrap();
        assert!(settings.get("style").is_none());
    }

    #[test]
    fn voice_override() {
        let voice = VoiceProfile::english().with_voice_id(Some("custom".to_string()));
        assert_eq!(voice.voice_id, "custom");
        let voice = VoiceProfile::english().with_voice_id(None);
        assert_eq!(voice.voice_id, ENGLISH_VOICE_ID);
    }

    #[test]
    fn speech_url_appends_the_voice() {
        let client = ElevenLabs::new(
            reqwest::Client::new(),
            "https://api.elevenlabs.io/v1/text-to-speech/",
            "key".to_string(),
        );
        assert_eq!(
            client.speech_url(&VoiceProfile::tamil()),
            "https://api.elevenlabs.io/v1/text-to-speech/C2RGMrNBTZaNfddRPeRH"
        );
    }
}
