mod cli;
mod seed;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use projectboard_core::AppConfig;
use projectboard_domain::{DraftRules, ProjectStore};
use projectboard_tui::App;
use std::rc::Rc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("PROJECTBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load();
    let store = ProjectStore::shared();

    // views subscribe inside App::new, so seeding afterwards lets the
    // seeded projects reach them through the normal broadcast path
    let mut app = App::new(Rc::clone(&store), &config);

    if let Some(path) = cli.seed.as_deref() {
        let drafts = seed::load(path)?;
        seed::apply(&store, &drafts, &DraftRules::from_config(&config))?;
    }

    app.run().await?;

    Ok(())
}
