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

use std::path::PathBuf;

use carprompt::model::SortKey;
use carprompt::model::SortOrder;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(
    name = "carprompt",
    version,
    about = "Turn free-text car search prompts into listing filters"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default carprompt.toml
    Init {
        /// Directory to write carprompt.toml into (defaults to the global config dir)
        path: Option<PathBuf>,
    },

    /// Interpret a prompt into filters, sort and notes
    Parse(ParseArgs),

    /// Build listing request parameters from a prompt
    Request(RequestArgs),
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Known brand, appended to the configured catalog (repeatable)
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Config file to load instead of the global one
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Prompt text
    pub prompt: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Prompt text
    pub prompt: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Override the interpreted sort key
    #[arg(long)]
    pub sort_by: Option<SortKey>,

    /// Override the interpreted sort order
    #[arg(long)]
    pub order: Option<SortOrder>,

    /// Page number (defaults to the configured page)
    #[arg(long)]
    pub page: Option<u32>,

    /// Page size (defaults to the configured page size)
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Output JSON
    #[arg(long)]
    pub json: bool,
}
