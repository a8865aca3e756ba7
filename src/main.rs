// Copyright 2026 Carprompt Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod cli;

use std::path::PathBuf;

use anyhow::Context as _;
use anyhow::Result;
use carprompt::config;
use carprompt::config::Config;
use carprompt::interpret;
use carprompt::output::JsonResponse;
use carprompt::output::print_json;
use carprompt::request::ListingRequest;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::CatalogArgs;
use crate::cli::Cli;
use crate::cli::Commands;
use crate::cli::ParseArgs;
use crate::cli::RequestArgs;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Init { path } => cmd_init(path),
        Commands::Parse(args) => {
            let json = args.json;
            handle_result(cmd_parse(args), json)
        }
        Commands::Request(args) => {
            let json = args.json;
            handle_result(cmd_request(args), json)
        }
    }
}

fn handle_result(result: Result<()>, json: bool) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            if json {
                let resp = JsonResponse::error("error", &format!("{err:#}"));
                print_json(&resp)?;
                Ok(())
            } else {
                Err(err)
            }
        }
    }
}

fn load_catalog(catalog: &CatalogArgs) -> Result<Config> {
    let config = config::load_config(catalog.config.as_deref())?;
    let config = config.with_brands(&catalog.brands);
    tracing::debug!(brands = config.brands.len(), "catalog loaded");
    Ok(config)
}

fn cmd_init(path: Option<PathBuf>) -> Result<()> {
    let config_path = match path {
        Some(dir) => dir.join("carprompt.toml"),
        None => config::global_config_path().context("no config directory for this platform")?,
    };
    if config_path.exists() {
        anyhow::bail!("carprompt.toml already exists at {}", config_path.display());
    }
    config::write_config(&config_path, &Config::default())?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn cmd_parse(args: ParseArgs) -> Result<()> {
    let config = load_catalog(&args.catalog)?;
    let result = interpret(&args.prompt, &config.brands);

    if args.json {
        let resp = JsonResponse::ok()
            .with_prompt(&args.prompt)
            .with_result(result);
        print_json(&resp)?;
        return Ok(());
    }

    if !result.recognized_any() {
        println!("No filters recognized.");
    }
    for note in &result.interpreted {
        println!("- {note}");
    }
    let compact = serde_json::to_string(&result.json)?;
    println!("{compact}");
    Ok(())
}

fn cmd_request(args: RequestArgs) -> Result<()> {
    let config = load_catalog(&args.catalog)?;
    let result = interpret(&args.prompt, &config.brands);
    let request = ListingRequest::from_result(&result)
        .with_sort(args.sort_by, args.order)
        .with_page(
            args.page.unwrap_or(config.page),
            args.per_page.unwrap_or(config.per_page),
        );

    if args.json {
        let resp = JsonResponse::ok()
            .with_prompt(&args.prompt)
            .with_request(&request)
            .with_result(result);
        print_json(&resp)?;
        return Ok(());
    }

    for (key, value) in request.query_pairs() {
        println!("{key}={value}");
    }
    Ok(())
}
