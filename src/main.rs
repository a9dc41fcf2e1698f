use anyhow::Context;
use clap::Parser;

use userdeck::cli::{Cli, Command};
use userdeck::config::Config;
use userdeck::session::{FileTokenStorage, MemoryTokenStorage, SessionStore, TokenStorage};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)?;
    cli.apply(&mut config);
    config.validate()?;

    let storage: Box<dyn TokenStorage> = if cli.ephemeral {
        Box::new(MemoryTokenStorage::new())
    } else {
        Box::new(FileTokenStorage::new(config.session.resolved_token_path()))
    };

    if cli.command == Some(Command::Logout) {
        storage.clear().context("Failed to clear the session token")?;
        println!("Logged out.");
        return Ok(());
    }

    let log_path = userdeck::logging::init(&config.logging)
        .context("Failed to initialize logging")?;
    tracing::info!(log = %log_path.display(), config = %config_path.display(), "Starting userdeck");

    let session = SessionStore::open(storage).context("Failed to restore session")?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    userdeck::ui::run(config, session, cli.edit, runtime.handle())?;
    Ok(())
}
