//! subportal - terminal client for the submission portal
//!
//! Without a subcommand the interactive TUI starts. `list`, `check` and
//! `submit` run headless and print NDJSON events.

mod headless;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, WrapErr};

use portal_app::config::{self, Settings, URL_ENV_VAR};
use portal_app::{Engine, SystemClipboard};
use portal_client::{ClientConfig, HttpPortalClient};
use portal_core::logging;
use tracing::{info, warn};

use headless::runner::{self, HeadlessOutcome};

/// Terminal client for the submission portal
#[derive(Parser, Debug)]
#[command(name = "subportal", version)]
#[command(about = "Validate, submit and browse portal submissions", long_about = None)]
struct Args {
    /// Portal server URL (overrides SUBPORTAL_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// Load the submission content from this file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a commented default .subportal/config.toml
    Init,

    /// Print the stored submissions
    List,

    /// Validate a submission file ("-" reads stdin)
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Validate, then submit a file ("-" reads stdin)
    Submit {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Submit even when validation reports issues
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // The client works without a log file
    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let base_dir = std::env::current_dir().wrap_err("cannot determine working directory")?;

    if let Some(Command::Init) = args.command {
        let path = config::init_config_dir(&base_dir)?;
        println!("Config: {}", path.display());
        return Ok(());
    }

    let settings = resolve_settings(&base_dir, args.url.as_deref());
    let client = HttpPortalClient::new(
        ClientConfig::new(settings.server.base_url.clone())
            .with_timeout_ms(settings.server.timeout_ms),
    )?;
    info!("Using portal at {}", settings.server.base_url);

    let outcome = match args.command {
        None | Some(Command::Init) => return run_tui(client, settings, args.file),
        Some(Command::List) => runner::list(&client, &mut std::io::stdout()).await,
        Some(Command::Check { file }) => match runner::read_content(&file) {
            Ok(content) => runner::check(&client, &content, &mut std::io::stdout()).await,
            Err(e) => fail_before_request(&e),
        },
        Some(Command::Submit { file, yes }) => match runner::read_content(&file) {
            Ok(content) => {
                runner::submit(
                    &client,
                    &content,
                    yes,
                    settings.submit.confirm_on_issues,
                    &mut std::io::stdout(),
                )
                .await
            }
            Err(e) => fail_before_request(&e),
        },
    };

    info!("Headless command finished: {:?}", outcome);
    if outcome != HeadlessOutcome::Completed {
        std::process::exit(outcome.exit_code());
    }
    Ok(())
}

/// Load the config file and apply the URL precedence: flag, env, file
fn resolve_settings(base_dir: &Path, cli_url: Option<&str>) -> Settings {
    let mut settings = config::load_settings(base_dir);
    let env_url = std::env::var(URL_ENV_VAR).ok();
    settings.server.base_url = config::resolve_base_url(cli_url, env_url.as_deref(), &settings);
    settings
}

fn fail_before_request(err: &portal_core::Error) -> HeadlessOutcome {
    warn!("Cannot read submission content: {}", err);
    headless::HeadlessEvent::error(err).emit();
    HeadlessOutcome::Failed
}

fn run_tui(
    client: HttpPortalClient,
    settings: Settings,
    content_path: Option<PathBuf>,
) -> color_eyre::Result<()> {
    if content_path.as_deref() == Some(Path::new("-")) {
        return Err(eyre!("--file - is only supported by the headless commands"));
    }
    let engine = Engine::new(client, Arc::new(SystemClipboard), settings, content_path);
    portal_tui::run(engine)?;
    Ok(())
}
