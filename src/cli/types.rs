//! CLI type definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{
    categories::CategoriesArgs, fetch::FetchArgs, init::InitArgs, refresh::RefreshArgs,
    serve::ServeArgs,
};

#[derive(Parser, Debug)]
#[command(name = "better-papers")]
#[command(about = "Better Papers - recent arXiv papers by category", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Config file layered over better-papers.yaml
    #[arg(long, global = true, env = "BETTER_PAPERS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration file
    Init(InitArgs),

    /// Run the HTTP API
    Serve(ServeArgs),

    /// Refresh cached category documents from arXiv
    Refresh(RefreshArgs),

    /// Fetch recent papers for one category straight from arXiv
    Fetch(FetchArgs),

    /// List catalog or cached categories
    Categories(CategoriesArgs),
}
