//! Dispatch and per-command handlers.
//!
//! Handlers take an opened [`Store`] plus parsed arguments, call the library,
//! and hand results to `render`. Library errors are surfaced unchanged through
//! `anyhow`.

use super::logging;
use super::render;
use super::seed::{self, User};
use super::setup::{Cli, Commands};
use crate::config::CliConfig;
use anyhow::{bail, Context, Result};
use clap::Parser;
use jsondir::{Store, StoreOptions};
use serde_json::Value;
use std::io::{IsTerminal, Read};
use tracing::info;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?.with_root_override(cli.root.clone());

    logging::init(&config.log_level, cli.verbose)?;

    let store = open_store(&config)?;

    match cli.command {
        Commands::Write {
            collection,
            resource,
            json,
        } => handle_write(&store, &collection, &resource, json),
        Commands::Read {
            collection,
            resource,
        } => handle_read(&store, &collection, &resource),
        Commands::List { collection } => handle_list(&store, &collection),
        Commands::Delete {
            collection,
            resource,
        } => handle_delete(&store, &collection, resource.as_deref().unwrap_or("")),
        Commands::Seed => handle_seed(&store),
    }
}

fn open_store(config: &CliConfig) -> Result<Store> {
    let options = StoreOptions::new().sync_writes(config.sync_writes);
    Store::open(&config.root, options)
        .with_context(|| format!("failed to open store at {}", config.root.display()))
}

fn handle_write(store: &Store, collection: &str, resource: &str, json: Option<String>) -> Result<()> {
    let text = match json {
        Some(text) => text,
        None => read_stdin()?,
    };
    let value: Value = serde_json::from_str(&text).context("input is not valid JSON")?;

    store.write(collection, resource, &value)?;
    render::print_written(collection, resource);
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("no JSON given: pass it as an argument or pipe it on stdin");
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn handle_read(store: &Store, collection: &str, resource: &str) -> Result<()> {
    let value: Value = store.read(collection, resource)?;
    render::print_record(&value)?;
    Ok(())
}

fn handle_list(store: &Store, collection: &str) -> Result<()> {
    let records = store.read_all(collection)?;
    render::print_records(collection, &records);
    Ok(())
}

fn handle_delete(store: &Store, collection: &str, resource: &str) -> Result<()> {
    store.delete(collection, resource)?;
    if resource.is_empty() {
        render::print_deleted(collection);
    } else {
        render::print_deleted(&format!("{}/{}", collection, resource));
    }
    Ok(())
}

fn handle_seed(store: &Store) -> Result<()> {
    let users = seed::users();
    for user in &users {
        store.write(seed::COLLECTION, &user.name, user)?;
    }
    info!(count = users.len(), "Seeded {}", seed::COLLECTION);

    let stored: Vec<User> = store.read_all_as(seed::COLLECTION)?;
    render::print_users(&stored);
    Ok(())
}
