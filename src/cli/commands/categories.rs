//! Implementation of the `better-papers categories` command.

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::Cell;
use serde::Serialize;

use crate::cli::commands::open_cache;
use crate::cli::display::{colorize_field, list_table, output, render_list, CommandOutput};
use crate::domain::models::{catalog_entry, CategoryInfo, Config, CATALOG};

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// List categories that have a cached document instead of the catalog
    #[arg(long)]
    pub cached: bool,
}

#[derive(Debug, Serialize)]
pub struct CatalogOutput {
    pub categories: &'static [CategoryInfo],
}

impl CommandOutput for CatalogOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["code", "name", "field", "description"]);
        for info in self.categories {
            table.add_row(vec![
                Cell::new(info.code),
                Cell::new(info.name),
                Cell::new(colorize_field(info.field)),
                Cell::new(info.description),
            ]);
        }
        render_list("category", table, self.categories.len())
    }
}

#[derive(Debug, Serialize)]
pub struct CachedCategoriesOutput {
    pub categories: Vec<String>,
}

impl CommandOutput for CachedCategoriesOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["code", "name"]);
        for code in &self.categories {
            let name = catalog_entry(code).map_or("-", |info| info.name);
            table.add_row(vec![Cell::new(code), Cell::new(name)]);
        }
        render_list("cached category", table, self.categories.len())
    }
}

pub async fn execute(args: CategoriesArgs, config: &Config, json_mode: bool) -> Result<()> {
    if !args.cached {
        output(&CatalogOutput { categories: CATALOG }, json_mode);
        return Ok(());
    }

    let cache = open_cache(config)?;
    let categories = cache
        .list_categories()
        .await
        .context("Failed to list cached categories")?;
    output(
        &CachedCategoriesOutput {
            categories: categories.into_iter().collect(),
        },
        json_mode,
    );
    Ok(())
}
