//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dl_headers` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use strum::IntoEnumIterator;

use dl_headers::config::{Command, DirectiveArgs, Opt};
use dl_headers::initialization::init_logger_with;
use dl_headers::{no_store, CacheControl, CommonHeader};

fn main() -> Result<()> {
    let opt = Opt::parse();

    let config = opt.config();
    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    let output = run(opt.command)?;
    println!("{}", output);
    Ok(())
}

/// Executes one subcommand and returns what should be printed.
fn run(command: Command) -> Result<String> {
    match command {
        Command::List { json } => {
            let headers: Vec<CommonHeader> = CommonHeader::iter().collect();
            info!("Listing {} registry headers", headers.len());
            if json {
                serde_json::to_string(&headers).context("Failed to serialize header list")
            } else {
                Ok(headers
                    .iter()
                    .map(|h| h.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
        Command::Lookup { name } => {
            let header: CommonHeader = name
                .parse()
                .with_context(|| format!("Lookup of {:?} failed", name))?;
            debug!("Resolved {:?} to {:?}", name, header);
            Ok(header.to_string())
        }
        Command::NoStore => Ok(no_store().to_string()),
        Command::CacheControl(args) => Ok(build_directive(&args).to_string()),
        Command::Parse { value } => {
            let cc = CacheControl::parse(&value);
            if cc.is_empty() {
                info!("No recognised directive in {:?}", value);
            }
            Ok(cc.to_string())
        }
    }
}

fn build_directive(args: &DirectiveArgs) -> CacheControl {
    let mut builder = CacheControl::builder();
    if args.no_cache {
        builder = builder.no_cache();
    }
    if args.no_store {
        builder = builder.no_store();
    }
    if let Some(secs) = args.max_age {
        builder = builder.max_age(Duration::from_secs(secs.into()));
    }
    match args.max_stale {
        Some(Some(secs)) => builder = builder.max_stale(Duration::from_secs(secs.into())),
        Some(None) => builder = builder.max_stale_unbounded(),
        None => {}
    }
    if let Some(secs) = args.min_fresh {
        builder = builder.min_fresh(Duration::from_secs(secs.into()));
    }
    if args.only_if_cached {
        builder = builder.only_if_cached();
    }
    if args.no_transform {
        builder = builder.no_transform();
    }
    if args.immutable {
        builder = builder.immutable();
    }
    builder.build()
}
