//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gridview::SortDirection;

#[derive(Debug, Parser)]
#[command(name = "backoffice", version, about = "Browse back-office data in the terminal")]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a JSON array of records as a table
    View(ViewArgs),
    /// Print the sidebar navigation tree
    Menu(MenuArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct ViewArgs {
    /// JSON file holding an array of records
    pub data: PathBuf,

    /// Columns to show, comma separated (default: every field, in first-seen order)
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Field used as the row key (default: array position)
    #[arg(short, long)]
    pub key_field: Option<String>,

    /// Filter text
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Column the filter applies to
    #[arg(long)]
    pub filter_column: Option<String>,

    /// Sort key as COLUMN[:asc|desc]; repeat for multi-column sorting
    #[arg(short, long, value_parser = parse_sort)]
    pub sort: Vec<SortArg>,

    /// Hide a column; repeatable
    #[arg(long)]
    pub hide: Vec<String>,

    /// Rows per page (10, 20, 30, 40 or 50)
    #[arg(short, long)]
    pub page_size: Option<usize>,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Select a row by key; repeatable
    #[arg(long)]
    pub select: Vec<String>,

    /// JSON table configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reject invalid operations instead of ignoring them
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MenuArgs {
    /// JSON sidebar definition (default: the built-in sidebar)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print the breadcrumbs of this path instead of the tree
    #[arg(long)]
    pub active: Option<String>,
}

/// A `--sort` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortArg {
    pub column: String,
    pub direction: SortDirection,
}

fn parse_sort(value: &str) -> Result<SortArg, String> {
    let (column, direction) = match value.rsplit_once(':') {
        Some((column, direction)) => (column, direction.parse()?),
        None => (value, SortDirection::Ascending),
    };
    if column.is_empty() {
        return Err("missing column name".to_string());
    }
    Ok(SortArg {
        column: column.to_string(),
        direction,
    })
}
