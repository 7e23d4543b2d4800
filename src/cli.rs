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
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::day_window::SunSource;
use crate::rahu_kalam::Locale;

/// Computes the day's Rahu Kalam and sends it to WhatsApp as a voice note.
/// Settings and credentials come from the environment (or a `.env` file);
/// the flags below override them for a single run.
#[derive(Debug, Parser)]
#[command(name = "rahud", version = env!("CARGO_PKG_VERSION"), long_about = None)]
pub struct Cli {
    /// Which announcement to send
    #[arg(long, value_enum, default_value_t = TaskKind::RahuKalam)]
    pub task: TaskKind,

    /// Date to announce (YYYY-MM-DD), defaults to today in RAHU_TIMEZONE
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Language of the message: en or ta
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Where sunrise comes from: fixed (06:00) or remote (Open-Meteo)
    #[arg(long)]
    pub source: Option<SunSource>,

    /// Print the message instead of speaking and sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Stay running and send every day at RAHU_SEND_AT
    #[arg(long, conflicts_with = "date")]
    pub daily: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TaskKind {
    /// Greeting plus the day's Rahu Kalam
    RahuKalam,
    /// Greeting only
    Greeting,
}
