//! Command-line parsing for the medal chart builder.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the transformation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::transform::DEFAULT_TOP_N;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "podium", version, about = "Olympic medal statistics chart builder")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands, one per chart kind.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// World-map medal distribution (one series per medal kind).
    Map(MapArgs),
    /// Top-N nation ranking as a bar chart.
    Bar(BarArgs),
    /// Total medals by country grouped by sport (packed-bubble chart).
    Bubble(BubbleArgs),
}

/// Options shared by every chart command.
#[derive(Debug, Parser, Clone)]
pub struct CommonArgs {
    /// Read the snapshot from this local JSON file instead of auto-resolving.
    #[arg(short, long, value_name = "JSON")]
    pub input: Option<PathBuf>,

    /// Base URL for fetching snapshots (overrides PODIUM_BASE_URL).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Export the chart document (renderer options + series) to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Export a standalone HTML page for the chart.
    #[arg(long = "export-html", value_name = "HTML")]
    pub export_html: Option<PathBuf>,
}

/// Options for the map chart.
#[derive(Debug, Parser)]
pub struct MapArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options for the top-N bar chart.
#[derive(Debug, Parser)]
pub struct BarArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// How many nations to rank.
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Render an ASCII preview in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal preview.
    #[arg(long)]
    pub no_plot: bool,

    /// Preview bar width (columns).
    #[arg(long, default_value_t = 40)]
    pub width: usize,
}

/// Options for the packed-bubble chart.
#[derive(Debug, Parser)]
pub struct BubbleArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}
