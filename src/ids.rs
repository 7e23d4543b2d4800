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
/// Tamil-capable voice used for the Rahu Kalam announcement.
pub const TAMIL_VOICE_ID: &str = "C2RGMrNBTZaNfddRPeRH";
/// Voice used for the plain English morning greeting.
pub const ENGLISH_VOICE_ID: &str = "EXAVITQu4vr4xnSDxMaL";

pub const MULTILINGUAL_MODEL_ID: &str = "eleven_multilingual_v2";
pub const MP3_OUTPUT_FORMAT: &str = "mp3_44100_128";

// Endpoints
pub const ELEVENLABS_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";
pub const GREEN_API_URL: &str = "https://api.green-api.com";
pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// WhatsApp personal chats are addressed as `<number>@c.us`.
pub const PERSONAL_CHAT_SUFFIX: &str = "@c.us";

// Chennai
pub const DEFAULT_LATITUDE: f64 = 13.08784;
pub const DEFAULT_LONGITUDE: f64 = 80.27847;
