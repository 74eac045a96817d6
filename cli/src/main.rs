//! CLI entrypoint for logswitch
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod args;

use anyhow::{Result, anyhow};
use args::{Cli, EmitLevel};
use clap::Parser;
use logswitch_application::{LogFacade, global};
use logswitch_domain::{Field, f};
use logswitch_infrastructure::{ConfigLoader, DefaultBackendFactory};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics of logswitch itself go to stderr, records go wherever the
    // selected backend sends them.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting logswitch");

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };

    for issue in file_config.logging.validate() {
        warn!("Configuration issue: {}", issue);
    }

    let backend = cli
        .backend
        .clone()
        .unwrap_or_else(|| file_config.logging.backend.clone());
    let settings = file_config.logging.to_log_config().update(&cli.overrides());

    // === Dependency Injection ===
    let facade = LogFacade::new(Arc::new(DefaultBackendFactory::new()));
    facade.set_client_named(&backend, Some(&settings))?;
    global::install(facade.clone());

    info!(backend = %backend, path = ?facade.client().path(), "Backend selected");

    let fields: Vec<Field> = cli
        .fields
        .iter()
        .map(|(key, value)| f(key.as_str(), value.as_str()))
        .collect();

    if cli.lines {
        let messages: Vec<&str> = cli.messages.iter().map(String::as_str).collect();
        emit_lines(&facade, cli.at, &messages, &fields);
    } else {
        for message in &cli.messages {
            emit(&facade, cli.at, message, &fields);
        }
    }

    global::debug("Messages emitted", &[f("count", cli.messages.len())]);

    Ok(())
}

fn emit(facade: &LogFacade, level: EmitLevel, message: &str, fields: &[Field]) {
    match level {
        EmitLevel::Debug => facade.debug(message, fields),
        EmitLevel::Info => facade.info(message, fields),
        EmitLevel::Error => facade.error(message, fields),
        EmitLevel::Fatal => facade.fatal(message, fields),
    }
}

fn emit_lines(facade: &LogFacade, level: EmitLevel, messages: &[&str], fields: &[Field]) {
    match level {
        EmitLevel::Debug => facade.debug_lines(messages, fields),
        EmitLevel::Info => facade.info_lines(messages, fields),
        EmitLevel::Error => facade.error_lines(messages, fields),
        EmitLevel::Fatal => facade.fatal_lines(messages, fields),
    }
}
