//! Implementation of the `better-papers fetch` command.

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::Cell;
use serde::Serialize;

use crate::cli::commands::paper_service;
use crate::cli::display::{list_table, output, render_list, truncate, CommandOutput};
use crate::domain::models::{Category, Config, PaperRecord};

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Category code, e.g. cs.LG
    pub category: String,

    /// Show at most this many papers
    #[arg(long, short)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct FetchOutput {
    pub category: String,
    pub papers: Vec<PaperRecord>,
}

impl CommandOutput for FetchOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["published", "title", "authors", "link"]);
        for paper in &self.papers {
            table.add_row(vec![
                Cell::new(paper.published.format("%Y-%m-%d")),
                Cell::new(truncate(&paper.title, 60)),
                Cell::new(format_authors(&paper.authors)),
                Cell::new(&paper.link),
            ]);
        }
        render_list("paper", table, self.papers.len())
    }
}

fn format_authors(authors: &[String]) -> String {
    match authors {
        [] => "-".to_string(),
        [only] => only.clone(),
        [first, ..] => format!("{first} et al."),
    }
}

pub async fn execute(args: FetchArgs, config: &Config, json_mode: bool) -> Result<()> {
    let category = Category::parse(args.category)?;
    let service = paper_service(config)?;

    let mut papers = service
        .recent_papers(&category)
        .await
        .with_context(|| format!("Failed to fetch papers for {category}"))?;
    if let Some(limit) = args.limit {
        papers.truncate(limit);
    }

    output(
        &FetchOutput {
            category: category.to_string(),
            papers,
        },
        json_mode,
    );
    Ok(())
}
