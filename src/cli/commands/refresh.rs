//! Implementation of the `better-papers refresh` command.
//!
//! One-shot batch run: fetch every requested category, write the ones that
//! succeed, report the rest. Meant to be driven by cron or a scheduler.

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::commands::{open_cache, paper_service};
use crate::cli::display::{action_failure, action_success, output, CommandOutput};
use crate::domain::models::{catalog_categories, Category, Config};
use crate::services::{RefreshReport, RefreshService};

#[derive(Args, Debug)]
pub struct RefreshArgs {
    /// Refresh only these categories (repeatable); defaults to the full catalog
    #[arg(long = "category", short = 'c')]
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RefreshOutput {
    #[serde(flatten)]
    pub report: RefreshReport,
    pub total_papers: usize,
}

impl CommandOutput for RefreshOutput {
    fn to_human(&self) -> String {
        let report = &self.report;
        let mut lines = Vec::new();
        for written in &report.written {
            lines.push(action_success(&format!(
                "{}: {} paper(s)",
                written.category, written.papers
            )));
        }
        for failed in &report.failed {
            lines.push(action_failure(&format!(
                "{} ({:?}): {}",
                failed.category, failed.stage, failed.error
            )));
        }
        if report.aborted > 0 {
            lines.push(action_failure(&format!("{} task(s) aborted", report.aborted)));
        }
        lines.push(format!(
            "\nRefreshed {} categor{} ({} papers), {} failed in {} ms",
            report.written.len(),
            if report.written.len() == 1 { "y" } else { "ies" },
            self.total_papers,
            report.failed.len() + report.aborted,
            report.duration_ms
        ));
        lines.join("\n")
    }
}

/// Resolve requested codes, falling back to the catalog.
fn resolve_categories(requested: Vec<String>) -> Result<Vec<Category>> {
    if requested.is_empty() {
        return Ok(catalog_categories());
    }
    let mut categories = Vec::with_capacity(requested.len());
    for code in requested {
        let category = Category::parse(code)?;
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    Ok(categories)
}

pub async fn execute(args: RefreshArgs, config: &Config, json_mode: bool) -> Result<()> {
    let categories = resolve_categories(args.categories)?;
    let requested = categories.len();

    let service = RefreshService::new(paper_service(config)?, open_cache(config)?);
    let report = service.run(categories).await;
    let nothing_written = report.written.is_empty();

    output(
        &RefreshOutput {
            total_papers: report.total_papers(),
            report,
        },
        json_mode,
    );

    if nothing_written && requested > 0 {
        bail!("refresh failed for all {requested} categories");
    }
    Ok(())
}
