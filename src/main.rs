use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rahud::cli::{Cli, TaskKind};
use rahud::config::{Credentials, Settings};
use rahud::day_window::build_source;
use rahud::elevenlabs::{ElevenLabs, VoiceProfile};
use rahud::green_api::GreenApi;
use rahud::scheduler::{run_daily, run_once, Output};
use rahud::tasks::{Announcer, MorningGreeting, RahuKalamAnnouncement, Task};
use rahud::utils::time::today;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = Settings::from_env().context("Invalid settings")?;
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }
    if let Some(source) = cli.source {
        settings.sun_source = source;
    }

    let client = reqwest::Client::new();
    let task = build_task(cli.task, &settings, client.clone());

    let output = if cli.dry_run {
        Output::Print
    } else {
        let credentials = Credentials::from_env().context("Missing credentials")?;
        Output::Announce(Announcer::new(
            Arc::new(ElevenLabs::new(
                client.clone(),
                settings.elevenlabs_url.clone(),
                credentials.elevenlabs_api_key,
            )),
            Arc::new(GreenApi::new(
                client,
                settings.green_api_url.clone(),
                credentials.green_api_instance_id,
                credentials.green_api_token,
                &credentials.to_phone_number,
            )),
        ))
    };

    if cli.daily {
        info!(
            "Sending {} every day at {} ({})",
            task.name(),
            settings.send_at.format("%H:%M"),
            settings.timezone
        );
        run_daily(task, output, settings.timezone, settings.send_at).await;
        return Ok(());
    }

    let date = cli.date.unwrap_or_else(|| today(settings.timezone));
    if let Some(delivery) = run_once(task.as_ref(), &output, date).await? {
        info!("{} sent successfully ({})", task.name(), delivery.id_message);
    }
    Ok(())
}

fn build_task(kind: TaskKind, settings: &Settings, client: reqwest::Client) -> Box<dyn Task> {
    let voice = VoiceProfile::for_locale(settings.locale).with_voice_id(settings.voice_id.clone());
    match kind {
        TaskKind::RahuKalam => Box::new(RahuKalamAnnouncement::new(
            build_source(settings.sun_source, settings, client),
            settings.locale,
            voice,
        )),
        TaskKind::Greeting => Box::new(MorningGreeting::new(settings.locale, voice)),
    }
}
