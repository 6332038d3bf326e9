//! mdwiki CLI Binary
//!
//! Command-line interface for browsing and editing a markdown wiki.

use clap::Parser;
use mdwiki::cli::{Cli, RunContext};
use mdwiki::config::ConfigLoader;
use mdwiki::logging::{init_logging, LoggingConfig};
use std::io::IsTerminal;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args, env vars, and config file
    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("mdwiki CLI starting");

    let context = match RunContext::new(cli.config.clone(), cli.wiki.clone()) {
        Ok(ctx) => {
            let color = ctx.config().logging.color && std::io::stdout().is_terminal();
            ctx.with_color(color)
        }
        Err(e) => {
            error!("Error loading settings: {}", e);
            eprintln!("{}", mdwiki::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", mdwiki::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and the settings file.
/// Precedence: CLI flags override settings file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = ConfigLoader::load(cli.config.as_deref())
        .ok()
        .map(|c| c.logging)
        .unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
        // A log file without an explicit destination implies file output
        if cli.log_output.is_none() {
            config.output = "file".to_string();
        }
    }

    config
}
