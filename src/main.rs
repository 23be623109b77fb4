//! feedgrid - Entry Point

use clap::Parser;
use feedgrid::config::ResolvedConfig;
use feedgrid::layout::WeightStrategy;
use feedgrid::logging::LogTarget;
use feedgrid::model::{AppError, FeedOrder};
use feedgrid::source::detect_input_source;
use feedgrid::view::{render_layout, OutputFormat};
use std::path::PathBuf;
use tracing::{info, warn};

/// feedgrid - masonry columns for a feed of posts
#[derive(Parser, Debug)]
#[command(name = "feedgrid")]
#[command(version)]
#[command(about = "Lay out a feed of posts in balanced masonry columns")]
pub struct Args {
    /// Feed file, JSON lines or a JSON array (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Print the layout for this viewport width in pixels instead of opening the viewer
    #[arg(short, long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Output format for --width
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Post order before layout
    #[arg(long, value_enum)]
    pub order: Option<FeedOrder>,

    /// How a post's weight is measured
    #[arg(long, value_enum)]
    pub weight: Option<WeightStrategy>,

    /// Pixels per terminal cell when sizing the viewer
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub cell_width: Option<u16>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Load configuration with full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = feedgrid::config::load_config_with_precedence(args.config.clone())?;
    let merged = feedgrid::config::merge_config(config_file)?;
    let with_env = feedgrid::config::apply_env_overrides(merged);

    Ok(feedgrid::config::apply_cli_overrides(
        with_env,
        args.weight,
        args.order,
        args.cell_width,
    ))
}

/// Lay out the feed once for a fixed width and write it to stdout.
fn print_layout(args: &Args, config: &ResolvedConfig, width: i64) -> Result<(), AppError> {
    let mut source = detect_input_source(args.file.clone())?;
    let feed = source.load()?;

    for err in &feed.errors {
        warn!("Skipping feed record: {}", err);
    }

    let mut items = feed.items;
    config.order.apply(&mut items);

    let output = render_layout(&items, width, &config.policy, args.format)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    // The viewer owns the screen, so it logs to a file.
    let target = if args.width.is_some() {
        LogTarget::Stderr
    } else {
        LogTarget::File(config.log_file_path.clone())
    };
    let _log_guard = feedgrid::logging::init(target)?;

    info!(config = ?config, "Configuration loaded and resolved");

    match args.width {
        Some(width) => print_layout(&args, &config, width)?,
        None => {
            let input_source = detect_input_source(args.file.clone())?;
            feedgrid::view::run_with_source(input_source, &config)?;
        }
    }

    Ok(())
}
