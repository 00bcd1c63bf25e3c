// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info, warn};
use std::io::Write;
use std::path::PathBuf;

use transcheck::app_config::{self, Config, parse_port};
use transcheck::Server;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP validation server (default command)
    Serve(ServeArgs),

    /// Generate shell completions for transcheck
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Configuration file path (JSON)
    #[arg(short, long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT", value_parser = parse_port)]
    port: Option<u16>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// transcheck - Translation quality checks over HTTP
///
/// Serves placeholder and consistency validation for source/translation pairs.
#[derive(Parser, Debug)]
#[command(name = "transcheck")]
#[command(version)]
#[command(about = "HTTP service for translation quality checks")]
#[command(long_about = "transcheck compares source strings with their translations and reports
missing placeholders, dropped punctuation and suspicious length ratios.

EXAMPLES:
    transcheck                                 # Serve on 0.0.0.0:5000
    PORT=8080 transcheck                       # Port from the environment
    transcheck serve -p 8080 -l debug          # Explicit port and log level
    transcheck serve -c conf.json              # Load settings from a file
    transcheck completions bash > transcheck.bash

ENDPOINTS:
    GET  /api/random
    POST /api/validate-translation   (alias /api/validate-placeholders)
    POST /api/validate-consistency
    GET  /health")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    serve: ServeArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // The filter is lowered later through log::set_max_level
        metadata.level() <= self.level.max(log::max_level())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "transcheck", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Serve(args)) => run_serve(args).await,
        None => run_serve(cli.serve).await,
    }
}

async fn run_serve(options: ServeArgs) -> Result<()> {
    let config = resolve_config(options)?;

    log::set_max_level(LevelFilter::from(&config.log_level));

    info!(
        "Starting transcheck v{} on {}:{}",
        env!("CARGO_PKG_VERSION"),
        config.server.host,
        config.server.port
    );

    let server = Server::new(&config)?;
    if let Err(e) = server.run().await {
        error!("Server failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}

/// Merge defaults, the optional config file, and CLI/environment overrides
fn resolve_config(options: ServeArgs) -> Result<Config> {
    let mut config = match &options.config_path {
        Some(path) => {
            if !path.exists() {
                warn!("Config file not found at '{}', using defaults.", path.display());
            }
            Config::load(path)?
        }
        None => Config::default(),
    };

    if let Some(host) = options.host {
        config.server.host = host;
    }

    if let Some(port) = options.port {
        config.server.port = port;
    }

    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    config.validate().context("Configuration validation failed")?;

    Ok(config)
}
