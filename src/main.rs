use anyhow::Context;
use clap::Parser;
use morse_sender::config::print_status;
use morse_sender::utils::{logger, validation::Validate};
use morse_sender::{
    build_transmitter, CancelToken, CliConfig, MorseDriver, MorseError, NoDelay, ParisTiming,
    Settings, Sleeper, ThreadSleeper, Transmitter,
};

fn main() {
    let config = CliConfig::parse();

    // Logs go to stderr so the console transmitter owns stdout.
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting morse sender");
    tracing::debug!("CLI config: {:?}", config);

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || handler_token.cancel()) {
        tracing::warn!("Ctrl-C handler not installed: {}", e);
    }

    // `run` drops the transmitter before returning, so the exit below never
    // skips GPIO cleanup.
    if let Err(e) = run(&config, cancel) {
        tracing::error!("❌ Morse sender failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        if let Some(morse_error) = e.downcast_ref::<MorseError>() {
            eprintln!("💡 Suggestion: {}", morse_error.recovery_suggestion());
        }
        std::process::exit(1);
    }
}

fn run(config: &CliConfig, cancel: CancelToken) -> anyhow::Result<()> {
    let mut settings = config.resolve().context("failed to load the message")?;
    settings.validate()?;

    if settings.dry_run {
        if settings.output.hardware {
            tracing::info!("🔍 Dry run: hardware output disabled");
            settings.output.hardware = false;
        }
        let timing = ParisTiming::new(settings.wpm, NoDelay)?;
        send(&settings, timing)
    } else {
        let timing = ParisTiming::new(settings.wpm, ThreadSleeper::with_cancel(cancel))?;
        send(&settings, timing)
    }
}

fn send<S: Sleeper + 'static>(settings: &Settings, timing: ParisTiming<S>) -> anyhow::Result<()> {
    let dit_seconds = timing.unit_seconds();
    let transmitter = build_transmitter(&settings.output, timing)?;

    print_status(&mut std::io::stdout(), settings, dit_seconds)?;

    let mut driver = MorseDriver::new(transmitter);
    let sent = driver.send_message(&settings.message);
    let closed = driver.into_inner().close();
    sent?;
    closed?;

    tracing::info!("✅ Done");
    Ok(())
}
