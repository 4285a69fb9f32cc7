//! Command-line host for the memo store.
//!
//! Plays the role the notebook page plays in a browser: `add` is the save
//! button, `list` is the on-load render.

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::warn;
use memopad_config::load_config;
use memopad_store::{FileBackend, MemoError, MemoStore};
use std::path::PathBuf;

/// Command-line options for the memopad binary.
#[derive(Parser)]
#[command(name = "memopad", version)]
struct Cli {
    /// Optional path to a memopad.json5 config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Storage directory override
    #[arg(long)]
    root: Option<PathBuf>,
    /// Storage key override
    #[arg(long)]
    key: Option<String>,
    #[command(subcommand)]
    command: Command,
}

/// Supported memopad subcommands.
#[derive(Subcommand)]
enum Command {
    /// Append a memo to the log
    Add {
        /// Memo text; multiple arguments are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print stored memos in insertion order
    List,
}

fn main() -> anyhow::Result<()> {
    memopad::init_logging();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("failed to load config")?;
    if let Some(root) = cli.root {
        config.storage.root = Some(root);
    }
    if let Some(key) = cli.key {
        config.storage.key = key;
    }
    config.validate().context("invalid storage settings")?;

    let root = config.storage_root();
    let backend = FileBackend::new(&root)
        .with_context(|| format!("failed to open storage at {}", root.display()))?;
    let mut store = MemoStore::with_key(backend, config.storage.key.clone());

    if let Err(err) = store.rehydrate() {
        match err {
            MemoError::CorruptState { key, .. } => {
                warn!("stored memo log is corrupt, continuing with an empty log (key={key})");
                store.start_empty();
            }
            err => return Err(err).context("failed to load memo log"),
        }
    }

    match cli.command {
        Command::Add { text } => {
            let text = text.join(" ");
            let appended = store.add(&text).context("failed to save memo")?;
            if appended {
                println!("saved ({} memos)", store.list()?.len());
            } else {
                warn!("memo is empty after trimming, nothing saved");
            }
        }
        Command::List => {
            for memo in store.list().context("failed to list memos")? {
                println!("{memo}");
            }
        }
    }

    Ok(())
}
