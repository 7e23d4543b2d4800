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
use thiserror::Error;

/// Problems with the environment or command line, raised once at startup
/// before any service is contacted.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} was not found in the ENV")]
    Missing(&'static str),

    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown locale {0:?}, expected \"en\" or \"ta\"")]
    UnknownLocale(String),

    #[error("Unknown sunrise source {0:?}, expected \"fixed\" or \"remote\"")]
    UnknownSource(String),
}
