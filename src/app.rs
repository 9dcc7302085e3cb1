//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the snapshot source
//! - runs the transformation pipelines
//! - prints reports/previews
//! - writes optional exports

use clap::Parser;

use crate::chart::{self, ChartDocument, ChartKind};
use crate::cli::{BarArgs, BubbleArgs, Command, CommonArgs, MapArgs};
use crate::data::{SourceSpec, StatsSource};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `podium` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Map(args) => handle_map(args),
        Command::Bar(args) => handle_bar(args),
        Command::Bubble(args) => handle_bubble(args),
    }
}

fn handle_map(args: MapArgs) -> Result<(), AppError> {
    let run = pipeline::run_map(&source_spec(&args.common))?;

    println!(
        "{}",
        crate::report::format_nation_summary(&run.snapshot.stats, &run.snapshot.source)
    );

    let doc = ChartDocument::new(
        ChartKind::Map,
        run.snapshot.source.clone(),
        chart::map_options(&run.series),
    );
    export(&args.common, &doc)
}

fn handle_bar(args: BarArgs) -> Result<(), AppError> {
    let run = pipeline::run_ranking(&source_spec(&args.common), args.top)?;

    println!(
        "{}",
        crate::report::format_nation_summary(&run.snapshot.stats, &run.snapshot.source)
    );
    println!("{}", crate::report::format_ranking(&run.ranking));

    if args.plot && !args.no_plot {
        println!("{}", crate::plot::render_ranking_bars(&run.ranking, args.width));
    }

    let doc = ChartDocument::new(
        ChartKind::Bar,
        run.snapshot.source.clone(),
        chart::bar_options(&run.ranking, &run.snapshot.source),
    );
    export(&args.common, &doc)
}

fn handle_bubble(args: BubbleArgs) -> Result<(), AppError> {
    let run = pipeline::run_sports(&source_spec(&args.common))?;

    println!(
        "{}",
        crate::report::format_sport_summary(&run.series, &run.snapshot.source)
    );

    let doc = ChartDocument::new(
        ChartKind::PackedBubble,
        run.snapshot.source.clone(),
        chart::bubble_options(&run.series, &run.snapshot.source),
    );
    export(&args.common, &doc)
}

/// Resolve where snapshots come from for this invocation.
fn source_spec(common: &CommonArgs) -> SourceSpec {
    match &common.input {
        Some(path) => SourceSpec::Path(path.clone()),
        None => SourceSpec::Auto {
            base_url: common
                .base_url
                .clone()
                .or_else(StatsSource::base_url_from_env),
        },
    }
}

fn export(common: &CommonArgs, doc: &ChartDocument) -> Result<(), AppError> {
    if let Some(path) = &common.export {
        chart::write_chart_json(path, doc)?;
        println!("Wrote chart JSON to '{}'.", path.display());
    }
    if let Some(path) = &common.export_html {
        chart::write_chart_html(path, doc)?;
        println!("Wrote chart page to '{}'.", path.display());
    }
    Ok(())
}
