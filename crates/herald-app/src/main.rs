mod cli;
mod logging;
mod repl;
mod setup;

use std::path::PathBuf;
use std::process::ExitCode;

use herald_ai::{Country, EMAIL_STYLES, NEWS_STYLES};
use herald_common::HeraldError;
use herald_config::{HeraldConfig, LogLevel};

use cli::{Args, Command};
use repl::Repl;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already set in the environment win over the file.
fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        PathBuf::from(".env"),
        // Workspace root, two levels up from crates/herald-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim().trim_start_matches("export ").trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn print_styles() {
    println!("Email tones:");
    for profile in EMAIL_STYLES {
        println!("  {}: {}", profile.label, profile.instruction);
    }
    println!("\nNews briefing styles:");
    for profile in NEWS_STYLES {
        println!("  {}: {}", profile.label, profile.instruction);
    }
    println!("\nCountries:");
    for country in herald_ai::COUNTRIES {
        let Country { label, code } = country;
        println!("  {label} ({code})");
    }
}

async fn run(args: Args, config: HeraldConfig) -> Result<(), HeraldError> {
    let model = args
        .model
        .clone()
        .unwrap_or_else(|| config.completion.model.clone());

    let launch = match args.command {
        Command::Styles => {
            print_styles();
            return Ok(());
        }
        Command::Config => {
            println!("{}", herald_config::config_to_json(&config));
            return Ok(());
        }
        Command::Email { sender, style } => setup::email(&config, &model, sender, style)?,
        Command::News {
            style,
            country,
            count,
        } => setup::news(&config, &model, style, country, count)?,
    };

    let client = setup::completion_client(&config.completion)?;
    Repl::new(launch, client).run().await
}

fn main() -> ExitCode {
    // Before any other thread exists.
    load_dotenv();

    let args = cli::parse();

    // The subscriber goes up before the config is read so loader messages
    // are kept; the configured level is applied afterwards.
    let logs = logging::init(&args.log_directive(LogLevel::default().directive()));

    tracing::info!("Herald v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match herald_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            HeraldConfig::default()
        }
    };
    if args.log_level.is_none() {
        logs.set_directive(config.logging.level.directive());
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
