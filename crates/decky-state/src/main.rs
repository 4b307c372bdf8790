mod cli; // Declare the cli module
mod session;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser; // Use clap for argument parsing
use decky_state_core::notification::NotificationSettings;
use decky_state_core::state::DeckyState;
use decky_state_core::ui_bridge::StateContextProvider;
use log::{error, info};

use cli::CliRenderTarget;
use session::SessionScript;

/// Decky State: replay plugin menu state changes and print the result
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Session script (json, yaml or toml) listing the collaborator calls to replay
    #[arg(long)]
    script: PathBuf,

    /// Notification settings file applied before the script runs
    #[arg(long)]
    notification_settings: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        eprintln!("Failed to initialize env_logger: {}", e);
    }
}

fn run(args: &CliArgs) -> decky_state_core::Result<()> {
    // Load everything up front so a bad file fails before any state changes.
    let script = SessionScript::load(&args.script)?;
    let settings = args
        .notification_settings
        .as_deref()
        .map(NotificationSettings::load)
        .transpose()?;

    let store = Arc::new(DeckyState::new());
    let provider = StateContextProvider::attach(Arc::clone(&store))?;
    provider.register_render_target(Arc::new(CliRenderTarget));

    if let Some(settings) = settings {
        store.set_notification_settings(settings);
    }

    info!("Replaying {} step(s) from {}", script.steps.len(), args.script.display());
    script.replay(&store);

    let published = provider.published();
    provider.detach();

    match serde_json::to_string_pretty(&published) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize published state: {}", e),
    }
    Ok(())
}

fn main() {
    // Parse command-line arguments
    let args = CliArgs::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
