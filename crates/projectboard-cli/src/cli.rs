use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "projectboard",
    version,
    about = "A terminal board for sorting projects between active and finished"
)]
pub struct Cli {
    /// JSON file with projects to load into the board at startup
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
