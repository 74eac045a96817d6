//! CLI argument definitions

use clap::{Parser, ValueEnum};
use logswitch_domain::LogConfig;
use std::path::PathBuf;

/// Severity to emit the messages at
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitLevel {
    Debug,
    Info,
    Error,
    /// Log, then exit with status 1
    Fatal,
}

/// CLI arguments for logswitch
#[derive(Parser, Debug)]
#[command(name = "logswitch")]
#[command(author, version, about = "Send messages through a switchable logging backend")]
#[command(long_about = r#"
logswitch selects a logging backend, configures it, and logs the given messages
through it. Flags override values from configuration files.

Configuration files are loaded from (in priority order):
1. LOGSWITCH_* environment variables
2. --config <path>            Explicit config file
3. ./logswitch.toml           Project-level config
4. ~/.config/logswitch/config.toml   Global config

Example:
  logswitch "service started"
  logswitch --format json --field user=bob "login ok"
  logswitch --outfile /var/log/app.log --lines "first" "second"
"#)]
pub struct Cli {
    /// Messages to log
    #[arg(required = true, value_name = "MESSAGE")]
    pub messages: Vec<String>,

    /// Backend to use: structured | null
    #[arg(short, long, value_name = "NAME")]
    pub backend: Option<String>,

    /// Threshold level: debug | info | error
    #[arg(short, long, value_name = "LEVEL")]
    pub level: Option<String>,

    /// Output format: json | text
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Append output to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub outfile: Option<String>,

    /// Severity of the emitted messages
    #[arg(long, value_enum, default_value = "info")]
    pub at: EmitLevel,

    /// Extra field attached to every message (repeatable)
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub fields: Vec<(String, String)>,

    /// Emit the messages as one multi-line batch sharing a call site
    #[arg(long)]
    pub lines: bool,

    /// Verbosity of logswitch's own diagnostics (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}

impl Cli {
    /// Settings given on the command line; unset flags stay empty.
    pub fn overrides(&self) -> LogConfig {
        LogConfig::new(
            self.level.clone().unwrap_or_default(),
            self.format.clone().unwrap_or_default(),
            self.outfile.clone().unwrap_or_default(),
        )
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{}`", s))?;
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in `{}`", s));
    }
    Ok((key.to_string(), value.to_string()))
}
